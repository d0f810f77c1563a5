//! Category display names.

/// Display name of a raw catalog category, if it is a known one.
pub fn display_name(category: &str) -> Option<&'static str> {
    match category {
        "kimsufi" => Some("Kimsufi"),
        "soyoustart" => Some("So you Start"),
        "rise" => Some("Rise"),
        "vps" => Some("VPS"),
        "uncategorized" => Some("Uncategorized"),
        _ => None,
    }
}

/// Display name of a category, or the raw category when unknown.
pub fn display_name_or_raw(category: &str) -> &str {
    display_name(category).unwrap_or(category)
}
