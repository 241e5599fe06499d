//! Turns the free-text reply of the vision model into a [`PlantCareRecord`].
//!
//! The reply is read line by line. Labeled lines are dispatched through the
//! ordered table in [`rules`](super::rules); everything that is not labeled
//! explicitly is inferred afterwards by [`inference`](super::inference).

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::plant_care::{
    entities::{MAX_INTERESTING_FACTS, PlantCareRecord},
    inference,
    rules::{self, Field, RuleKind, Section},
};

#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Values collected by the line scan, before any inference.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExtractedSections {
    pub name: Option<String>,
    pub species: Option<String>,
    pub description: Option<String>,
    pub health_assessment: Option<String>,
    /// Values of the known `- Label:` rows, wherever they appeared.
    pub care_fields: HashMap<Field, String>,
    /// Every `- Label: value` row inside the care recommendations section,
    /// keyed by the lower-cased label without whitespace.
    pub care_items: HashMap<String, String>,
    /// Unlabeled advice in the care recommendations section, including the
    /// text written inline after the header.
    pub care_notes: Vec<String>,
    pub facts: Vec<String>,
}

impl ExtractedSections {
    fn set(&mut self, field: Field, value: &str) {
        if value.is_empty() {
            return;
        }

        let value = value.to_string();
        match field {
            Field::Name => self.name = Some(value),
            Field::Species => self.species = Some(value),
            Field::Description => self.description = Some(value),
            Field::HealthAssessment => self.health_assessment = Some(value),
            _ => {
                self.care_fields.insert(field, value);
            }
        }
    }

    fn append(&mut self, field: Field, line: &str) {
        let slot = match field {
            Field::Description => &mut self.description,
            Field::HealthAssessment => &mut self.health_assessment,
            _ => return,
        };

        match slot {
            Some(text) => {
                text.push(' ');
                text.push_str(line);
            }
            None => *slot = Some(line.to_string()),
        }
    }

    fn push_care_note(&mut self, note: &str) {
        if !note.is_empty() && !note.starts_with("IMPORTANT:") {
            self.care_notes.push(note.to_string());
        }
    }

    fn push_fact(&mut self, fact: &str) {
        if !fact.is_empty() && self.facts.len() < MAX_INTERESTING_FACTS {
            self.facts.push(fact.to_string());
        }
    }

    /// Looks a care topic up in the generic items first (by any of `keys`),
    /// then in the known-label values.
    pub fn care_value(&self, field: Field, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .find_map(|key| self.care_items.get(*key))
            .or_else(|| self.care_fields.get(&field))
            .map(String::as_str)
    }
}

/// Interprets a model reply. Never fails: when the parse itself errors the
/// all-defaults record is returned with the raw text as its description.
pub fn interpret(raw: &str) -> PlantCareRecord {
    match try_interpret(raw) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to interpret model response, using fallback record");
            PlantCareRecord::fallback(raw)
        }
    }
}

pub fn try_interpret(raw: &str) -> Result<PlantCareRecord, InterpretError> {
    let sections = scan(raw);
    let lowered = raw.to_lowercase();

    let mut record = PlantCareRecord::fallback(raw);

    if let Some(description) = sections
        .description
        .as_ref()
        .or(sections.health_assessment.as_ref())
    {
        record.general_description = description.clone();
    }
    if let Some(name) = &sections.name {
        record.name = name.clone();
    }
    if let Some(species) = sections.species.as_deref().filter(|s| !is_placeholder(s)) {
        record.species = species.to_string();
    }

    let light_text = sections.care_value(Field::Light, inference::LIGHT_KEYS);
    record.light = inference::light_level(light_text);

    // Without a watering label only lines about watering are searched.
    let watering_lines;
    let watering_text = match sections.care_value(Field::Watering, &["watering"]) {
        Some(text) => Some(text),
        None => {
            watering_lines = inference::watering_lines(raw);
            watering_lines.as_deref()
        }
    };
    record.watering_frequency_days = inference::watering_frequency_days(watering_text);
    if let Some(amount) = sections.care_items.get("wateringamount") {
        record.watering_amount = amount.clone();
    }

    let growth_text = sections.care_value(Field::Growth, &["growthstage"]);
    if let Some(stage) = inference::growth_stage(growth_text) {
        record.growth_stage = stage;
    }
    if let Some(size) = inference::plant_size(
        sections
            .care_items
            .get("plantsize")
            .or(sections.care_items.get("size"))
            .map(String::as_str),
    ) {
        record.plant_size = size;
    }
    if let Some(size) =
        inference::plant_size(sections.care_items.get("potsize").map(String::as_str))
    {
        record.pot_size = size;
    }

    record.moisture_level = inference::moisture_level(raw, &lowered)?;
    record.specific_issues = inference::specific_issues(&lowered);
    record.care_tips = inference::care_tips(&sections, &lowered);
    record.interesting_facts = inference::interesting_facts(&sections.facts, raw)?;

    Ok(record)
}

/// Single pass over the reply, collecting labeled values per section.
pub fn scan(raw: &str) -> ExtractedSections {
    let mut sections = ExtractedSections::default();
    let mut current = Section::None;

    for line in raw.split('\n') {
        let line = normalize_line(line);
        if line.is_empty() {
            continue;
        }

        if let Some((rule, value)) = rules::match_rule(&line, current == Section::Facts) {
            match rule.kind {
                RuleKind::Header(section) => {
                    current = section;
                    match rule.field {
                        Some(field) => sections.set(field, value),
                        None if section == Section::Facts => sections.push_fact(value),
                        None if section == Section::Care => sections.push_care_note(value),
                        None => {}
                    }
                }
                RuleKind::CareItem => {
                    if let Some(field) = rule.field {
                        sections.set(field, value);
                    }
                    if current == Section::Care {
                        capture_care_item(&mut sections, &line);
                    }
                }
            }
            continue;
        }

        match current {
            Section::Care => {
                if !capture_care_item(&mut sections, &line) {
                    sections.push_care_note(strip_list_marker(&line));
                }
            }
            Section::Facts => sections.push_fact(strip_list_marker(&line)),
            Section::Description => sections.append(Field::Description, &line),
            Section::Health => sections.append(Field::HealthAssessment, &line),
            Section::None => {}
        }
    }

    sections
}

fn capture_care_item(sections: &mut ExtractedSections, line: &str) -> bool {
    match rules::parse_labeled_item(line) {
        Some((key, value)) => {
            sections.care_items.insert(key, value);
            true
        }
        None => false,
    }
}

/// Trims the line, drops markdown bold markers and rewrites `*`/`•` bullets
/// as `- ` so the rule prefixes see one bullet style.
fn normalize_line(line: &str) -> String {
    let line = line.trim().replace("**", "");
    let line = line.trim();

    for bullet in ["* ", "• "] {
        if let Some(rest) = line.strip_prefix(bullet) {
            return format!("- {}", rest.trim_start());
        }
    }

    line.to_string()
}

/// Removes a leading `- `, `N.` or `N)` list marker.
pub(crate) fn strip_list_marker(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix("- ") {
        return rest.trim_start();
    }

    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')'))
            && rest.starts_with(char::is_whitespace)
        {
            return rest.trim_start();
        }
    }

    line
}

fn is_placeholder(value: &str) -> bool {
    ["not specified", "unknown", "n/a", "none"]
        .iter()
        .any(|placeholder| value.eq_ignore_ascii_case(placeholder))
}
