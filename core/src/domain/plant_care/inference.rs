//! Keyword and pattern inference for the fields the model does not label.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::plant_care::{
    entities::{
        DEFAULT_MOISTURE_LEVEL, DEFAULT_WATERING_FREQUENCY_DAYS, GENERAL_CARE_TIP, GrowthStage,
        LightLevel, MAX_INTERESTING_FACTS, NO_ISSUES_DETECTED, PlantSize,
        default_interesting_facts,
    },
    interpreter::{ExtractedSections, InterpretError},
    rules::Field,
};

static MOISTURE_PERCENTAGE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?i)moisture[^0-9\n.;]{0,40}?(\d{1,3})\s*%"));

static NUMBERED_ITEM: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+(\S.*?)[ \t\r]*$"));

fn pattern(
    regex: &'static LazyLock<Result<Regex, regex::Error>>,
) -> Result<&'static Regex, InterpretError> {
    LazyLock::force(regex)
        .as_ref()
        .map_err(|e| InterpretError::Pattern(e.clone()))
}

/// Cadence rules, first match wins. `every 15 days` resolving to 5 is the
/// long-standing behavior and is kept.
const WATERING_RULES: [(&[&str], u32); 6] = [
    (&["every 3 days", "3 days"], 3),
    (&["every 5 days", "5 days"], 5),
    (&["every 10 days", "10 days"], 10),
    (&["every 14 days", "14 days"], 14),
    (&["weekly", "once a week"], 7),
    (&["daily", "every day"], 1),
];

pub fn watering_frequency_days(watering_text: Option<&str>) -> u32 {
    let Some(text) = watering_text else {
        return DEFAULT_WATERING_FREQUENCY_DAYS;
    };
    let text = text.to_lowercase();

    WATERING_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| text.contains(needle)))
        .map(|(_, days)| *days)
        .unwrap_or(DEFAULT_WATERING_FREQUENCY_DAYS)
}

/// Lines mentioning water, for replies without a watering label.
pub fn watering_lines(raw: &str) -> Option<String> {
    let lines: Vec<&str> = raw
        .lines()
        .filter(|line| line.to_lowercase().contains("water"))
        .collect();

    (!lines.is_empty()).then(|| lines.join("\n"))
}

/// Moisture as a percentage string: an explicit `moisture ... NN%` in the
/// same sentence wins,
/// otherwise dryness or wetness keywords, otherwise the midpoint.
pub fn moisture_level(raw: &str, lowered: &str) -> Result<String, InterpretError> {
    let explicit = pattern(&MOISTURE_PERCENTAGE)?
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .find(|percent| *percent <= 100);

    if let Some(percent) = explicit {
        return Ok(percent.to_string());
    }

    let level = if lowered.contains("dry") || lowered.contains("underwatered") {
        "25"
    } else if lowered.contains("wet") || lowered.contains("overwatered") {
        "75"
    } else {
        DEFAULT_MOISTURE_LEVEL
    };

    Ok(level.to_string())
}

const ISSUE_TRIGGERS: [(&[&str], &str); 6] = [
    (&["yellow"], "Yellowing leaves"),
    (&["brown"], "Brown spots or edges"),
    (&["wilt"], "Wilting or drooping"),
    (&["dry", "underwatered"], "Underwatering"),
    (&["wet", "overwatered"], "Overwatering"),
    (&["root rot"], "Root rot"),
];

pub fn specific_issues(lowered: &str) -> String {
    let issues: Vec<&str> = ISSUE_TRIGGERS
        .iter()
        .filter(|(needles, _)| needles.iter().any(|needle| lowered.contains(needle)))
        .map(|(_, issue)| *issue)
        .collect();

    if issues.is_empty() {
        NO_ISSUES_DETECTED.to_string()
    } else {
        issues.join(", ")
    }
}

pub const LIGHT_KEYS: &[&str] = &["light", "lightrequirements", "lighting"];

const CARE_TIP_TOPICS: [(&str, Field, &[&str]); 6] = [
    ("Watering", Field::Watering, &["watering"]),
    ("Light", Field::Light, LIGHT_KEYS),
    ("Temperature", Field::Temperature, &["temperature"]),
    ("Soil", Field::Soil, &["soil", "soiltype"]),
    (
        "Fertilizing",
        Field::Fertilizing,
        &["fertilizing", "fertilizer", "fertilization"],
    ),
    ("Humidity", Field::Humidity, &["humidity"]),
];

const KEYWORD_TIPS: [(&str, &str); 5] = [
    ("water", "Water when the top inch of soil feels dry"),
    ("light", "Give the plant the light level its species prefers"),
    (
        "temperature",
        "Keep the plant away from drafts and sudden temperature changes",
    ),
    ("humidity", "Keep humidity steady around the plant"),
    (
        "fertiliz",
        "Feed with a balanced fertilizer during the growing season",
    ),
];

/// Labeled care values in a fixed topic order, else the free-text advice of
/// the care section, else one generic tip per topic keyword found in the
/// text, else a general sentence.
pub fn care_tips(sections: &ExtractedSections, lowered: &str) -> String {
    let labeled: Vec<String> = CARE_TIP_TOPICS
        .iter()
        .filter_map(|(label, field, keys)| {
            sections
                .care_value(*field, keys)
                .map(|value| format!("{label}: {value}"))
        })
        .collect();

    if !labeled.is_empty() {
        return labeled.join("\n");
    }

    if !sections.care_notes.is_empty() {
        return sections.care_notes.join(" ");
    }

    let generic: Vec<&str> = KEYWORD_TIPS
        .iter()
        .filter(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, tip)| *tip)
        .collect();

    if generic.is_empty() {
        GENERAL_CARE_TIP.to_string()
    } else {
        generic.join(". ")
    }
}

pub fn light_level(light_text: Option<&str>) -> LightLevel {
    let Some(text) = light_text.map(str::to_lowercase) else {
        return LightLevel::default();
    };

    if text.contains("indirect") || text.contains("bright") {
        LightLevel::BrightIndirect
    } else if text.contains("direct") || text.contains("full sun") {
        LightLevel::Direct
    } else if text.contains("low") || text.contains("shade") {
        LightLevel::Low
    } else {
        LightLevel::default()
    }
}

pub fn growth_stage(growth_text: Option<&str>) -> Option<GrowthStage> {
    let text = growth_text?.to_lowercase();

    if text.contains("seedling") {
        Some(GrowthStage::Seedling)
    } else if text.contains("young") || text.contains("juvenile") {
        Some(GrowthStage::Young)
    } else if text.contains("established") {
        Some(GrowthStage::Established)
    } else if text.contains("mature") {
        Some(GrowthStage::Mature)
    } else {
        None
    }
}

pub fn plant_size(size_text: Option<&str>) -> Option<PlantSize> {
    let text = size_text?.to_lowercase();

    if text.contains("small") {
        Some(PlantSize::Small)
    } else if text.contains("medium") {
        Some(PlantSize::Medium)
    } else if text.contains("large") {
        Some(PlantSize::Large)
    } else {
        None
    }
}

/// `N. text` lines anywhere in the reply, in order.
pub fn numbered_facts(raw: &str) -> Result<Vec<String>, InterpretError> {
    let facts = pattern(&NUMBERED_ITEM)?
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().replace("**", "").trim().to_string())
        .filter(|fact| !fact.is_empty())
        .take(MAX_INTERESTING_FACTS)
        .collect();

    Ok(facts)
}

pub fn interesting_facts(
    section_facts: &[String],
    raw: &str,
) -> Result<Vec<String>, InterpretError> {
    if !section_facts.is_empty() {
        return Ok(section_facts
            .iter()
            .take(MAX_INTERESTING_FACTS)
            .cloned()
            .collect());
    }

    let numbered = numbered_facts(raw)?;
    if !numbered.is_empty() {
        return Ok(numbered);
    }

    Ok(default_interesting_facts())
}
