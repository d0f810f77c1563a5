//! Datacenter code to location name lookup.

/// Full location name of a datacenter code, ignoring case.
pub fn full_name(code: &str) -> Option<&'static str> {
    let name = match code.to_ascii_lowercase().as_str() {
        "bhs" => "Beauharnois, Canada",
        "gra" => "Gravelines, France",
        "rbx" => "Roubaix, France",
        "sbg" => "Strasbourg, France",
        "par" => "Paris, France",
        "lon" => "London, United Kingdom",
        "fra" => "Frankfurt, Germany",
        "waw" => "Warsaw, Poland",
        "syd" => "Sydney, Australia",
        "sgp" => "Singapore",
        "ynm" => "Mumbai, India",
        "hil" => "Hillsboro, USA",
        "vin" => "Vint Hill, USA",
        "tor" => "Toronto, Canada",
        _ => return None,
    };
    Some(name)
}

/// Maps codes to full names, keeping codes that have no known name.
pub fn to_full_names_or_codes(codes: &[String]) -> Vec<String> {
    codes
        .iter()
        .map(|code| full_name(code).map_or_else(|| code.clone(), str::to_string))
        .collect()
}
