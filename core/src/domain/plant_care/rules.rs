/// Part of the response the interpreter is currently reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    None,
    Description,
    Care,
    Facts,
    Health,
}

/// Extraction target of a labeled line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Species,
    Description,
    HealthAssessment,
    Watering,
    Light,
    Temperature,
    Soil,
    Fertilizing,
    Humidity,
    Growth,
    Blooming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Top-level label; moves the cursor to the given section.
    Header(Section),
    /// `- Label:` line; sets its field and leaves the cursor where it is.
    CareItem,
}

#[derive(Debug)]
pub struct SectionRule {
    pub prefix: &'static str,
    pub field: Option<Field>,
    pub kind: RuleKind,
}

const fn header(prefix: &'static str, field: Option<Field>, section: Section) -> SectionRule {
    SectionRule {
        prefix,
        field,
        kind: RuleKind::Header(section),
    }
}

const fn care_item(prefix: &'static str, field: Field) -> SectionRule {
    SectionRule {
        prefix,
        field: Some(field),
        kind: RuleKind::CareItem,
    }
}

/// Recognized line prefixes, tested case-insensitively in this order.
/// The first match wins.
pub const SECTION_RULES: &[SectionRule] = &[
    header("Plant Name:", Some(Field::Name), Section::None),
    header("Plant:", Some(Field::Name), Section::None),
    header("Species:", Some(Field::Species), Section::None),
    header("Description:", Some(Field::Description), Section::Description),
    header("Care Recommendations:", None, Section::Care),
    care_item("- Watering:", Field::Watering),
    care_item("- Lighting:", Field::Light),
    care_item("- Light", Field::Light),
    care_item("- Temperature:", Field::Temperature),
    care_item("- Soil:", Field::Soil),
    care_item("- Fertilizing:", Field::Fertilizing),
    care_item("- Humidity:", Field::Humidity),
    care_item("- Growth", Field::Growth),
    care_item("- Blooming:", Field::Blooming),
    header("Interesting Facts:", None, Section::Facts),
    header(
        "HEALTH ASSESSMENT:",
        Some(Field::HealthAssessment),
        Section::Health,
    ),
];

impl SectionRule {
    /// Returns the labeled value when `line` starts with this rule's prefix.
    ///
    /// Open prefixes such as `- Light` must end the word and need a `:` later
    /// on the line, so `- Light Requirements: ...` matches but
    /// `- Lightly water: ...` does not.
    pub fn matches<'a>(&self, line: &'a str) -> Option<&'a str> {
        let head = line.get(..self.prefix.len())?;
        if !head.eq_ignore_ascii_case(self.prefix) {
            return None;
        }

        if self.prefix.ends_with(':') {
            return Some(line[self.prefix.len()..].trim());
        }

        let rest = &line[self.prefix.len()..];
        if rest.starts_with(char::is_alphabetic) {
            return None;
        }

        rest.split_once(':').map(|(_, value)| value.trim())
    }

    pub fn is_header(&self) -> bool {
        matches!(self.kind, RuleKind::Header(_))
    }
}

/// Finds the first rule matching `line`. With `headers_only` the care-item
/// rows are skipped, which is how fact lists keep `- ...` entries.
pub fn match_rule(line: &str, headers_only: bool) -> Option<(&'static SectionRule, &str)> {
    SECTION_RULES
        .iter()
        .filter(|rule| !headers_only || rule.is_header())
        .find_map(|rule| rule.matches(line).map(|value| (rule, value)))
}

/// Parses a generic `- <Label>: <value>` line into a normalized key
/// (lower-cased, whitespace removed) and its value.
pub fn parse_labeled_item(line: &str) -> Option<(String, String)> {
    let item = line.strip_prefix("- ")?;
    let (label, value) = item.split_once(':')?;

    let key: String = label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value.to_string()))
}
