//! Prompt templates. They ask for the labels the interpreter reads.

const RESPONSE_FORMAT: &str = "\
Plant: [common name]
Species: [scientific name, or leave blank]
Description: [two or three sentences about the plant]

Care Recommendations:
- Watering: [how often and how much, e.g. \"every 7 days\"]
- Light: [light requirements]
- Temperature: [ideal range]
- Soil: [soil type]
- Fertilizing: [schedule]
- Humidity: [ideal humidity]

Interesting Facts:
1. [fact]
2. [fact]
3. [fact]
4. [fact]

HEALTH ASSESSMENT: [healthy or not, and any visible problems]";

pub fn plant_photo_prompt(plant_name: Option<&str>) -> String {
    let hint = plant_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| format!("The owner believes this plant is a {name}.\n"))
        .unwrap_or_default();

    format!(
        "Analyze this plant photo.\n{hint}\
         Answer using exactly this format:\n\n{RESPONSE_FORMAT}\n\n\
         IMPORTANT:\n\
         - Be confident in your plant identification\n\
         - Focus on what you can actually see in the image\n\
         - Only give care recommendations relevant to the plant's current condition\n\
         - Never say \"unable to identify\"; give your best assessment based on visible features"
    )
}

pub fn plant_content_prompt(plant_name: &str, species: Option<&str>) -> String {
    let subject = match species.map(str::trim).filter(|s| !s.is_empty()) {
        Some(species) => format!("{plant_name} ({species})"),
        None => plant_name.to_string(),
    };

    format!(
        "Provide focused care recommendations for a {subject}.\n\
         Answer using exactly this format:\n\n{RESPONSE_FORMAT}\n\n\
         IMPORTANT:\n\
         - Focus on practical care information\n\
         - Provide actionable advice\n\
         - Skip the HEALTH ASSESSMENT line, there is no photo"
    )
}
