use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PLANT_NAME: &str = "Plant";
pub const DEFAULT_MOISTURE_LEVEL: &str = "50";
pub const DEFAULT_WATERING_FREQUENCY_DAYS: u32 = 7;
pub const DEFAULT_WATERING_AMOUNT: &str = "Until soil is moist";
pub const NO_ISSUES_DETECTED: &str = "No specific issues detected";
pub const GENERAL_CARE_TIP: &str = "Follow general plant care guidelines";
pub const DEFAULT_INTERESTING_FACTS: [&str; 4] = [
    "Every plant is unique",
    "Plants grow throughout their lifecycle",
    "Proper care helps plants thrive",
    "Plants can communicate with each other",
];
pub const MAX_INTERESTING_FACTS: usize = 4;

/// Structured care record sent to the mobile client.
///
/// Every field is always populated; [`PlantCareRecord::fallback`] provides the
/// defaults used when nothing could be extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlantCareRecord {
    pub general_description: String,
    pub name: String,
    pub species: String,
    pub plant_size: PlantSize,
    pub pot_size: PlantSize,
    pub growth_stage: GrowthStage,
    pub moisture_level: String,
    pub light: LightLevel,
    #[serde(rename = "watering_frequency")]
    pub watering_frequency_days: u32,
    pub watering_amount: String,
    pub specific_issues: String,
    pub care_tips: String,
    pub interesting_facts: Vec<String>,
}

impl PlantCareRecord {
    /// All-defaults record carrying the raw model text as its description.
    pub fn fallback(raw_response: &str) -> Self {
        Self {
            general_description: raw_response.to_string(),
            name: DEFAULT_PLANT_NAME.to_string(),
            species: String::new(),
            plant_size: PlantSize::default(),
            pot_size: PlantSize::default(),
            growth_stage: GrowthStage::default(),
            moisture_level: DEFAULT_MOISTURE_LEVEL.to_string(),
            light: LightLevel::default(),
            watering_frequency_days: DEFAULT_WATERING_FREQUENCY_DAYS,
            watering_amount: DEFAULT_WATERING_AMOUNT.to_string(),
            specific_issues: NO_ISSUES_DETECTED.to_string(),
            care_tips: GENERAL_CARE_TIP.to_string(),
            interesting_facts: default_interesting_facts(),
        }
    }
}

pub fn default_interesting_facts() -> Vec<String> {
    DEFAULT_INTERESTING_FACTS
        .iter()
        .map(|fact| fact.to_string())
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PlantSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum GrowthStage {
    Seedling,
    Young,
    #[default]
    Mature,
    Established,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LightLevel {
    #[serde(rename = "Low light")]
    Low,
    #[default]
    #[serde(rename = "Bright indirect light")]
    BrightIndirect,
    #[serde(rename = "Direct sunlight")]
    Direct,
}

/// Interpreted recommendations together with the text they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlantCareAnalysis {
    pub recommendations: PlantCareRecord,
    pub raw_response: String,
}
