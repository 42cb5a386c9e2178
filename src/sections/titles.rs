//! Section title resolution
//!
//! Known report areas get their industry names from a small pattern
//! dictionary; everything else falls back to a readable version of the raw
//! key.

/// Priority-ordered (pattern, title) pairs. The first pattern that appears
/// as a case-insensitive substring of the key wins, so specific words sit
/// above generic ones ("insulation" before "test").
pub const TITLE_RULES: &[(&str, &str)] = &[
    ("insulation", "Insulation Resistance Tests"),
    ("contact", "Contact Resistance Tests"),
    ("dielectric", "Dielectric Withstand Tests"),
    ("visual", "Visual and Mechanical Inspection"),
    ("mechanical", "Visual and Mechanical Inspection"),
    ("nameplate", "Nameplate Data"),
    ("torque", "Torque Specifications"),
    ("trip", "Trip Unit Tests"),
    ("fuse", "Fuse Data"),
    ("ground", "Ground Test Results"),
    ("reading", "Test Readings"),
    ("test", "Test Results"),
    ("equipment", "Equipment Information"),
];

/// Dictionary title for a key, if any rule matches.
pub fn title_for(key: &str) -> Option<&'static str> {
    let lower = key.to_lowercase();
    TITLE_RULES
        .iter()
        .find(|(pattern, _)| lower.contains(pattern))
        .map(|&(_, title)| title)
}

/// Human-readable fallback title: underscores become spaces, internal
/// uppercase letters start a new word, first character is uppercased.
pub fn format_key(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if c == '_' {
            spaced.push(' ');
        } else if c.is_uppercase() && i > 0 {
            spaced.push(' ');
            spaced.push(c);
        } else {
            spaced.push(c);
        }
    }
    let trimmed = spaced.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
