use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

pub const MAX_INSTAGRAM_ID_LENGTH: usize = 30;

static INSTAGRAM_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._]+$").expect("instagram id pattern is valid"));

/// Trims whitespace and a leading `@` the way people usually type handles.
pub fn normalize_instagram_id(raw: &str) -> String {
    raw.trim().trim_start_matches('@').trim().to_string()
}

/// Returns the normalized handle when it is usable for a spin.
pub fn validate_instagram_id(raw: &str) -> Result<String, ValidationError> {
    let instagram_id = normalize_instagram_id(raw);

    if instagram_id.is_empty() {
        return Err(ValidationError::new("instagram_id_required"));
    }
    if instagram_id.chars().count() > MAX_INSTAGRAM_ID_LENGTH {
        return Err(ValidationError::new("instagram_id_too_long"));
    }
    if !INSTAGRAM_ID.is_match(&instagram_id) {
        return Err(ValidationError::new("invalid_instagram_id"));
    }
    Ok(instagram_id)
}
