//! Input Validation
//!
//! Mirrors the server's field limits so bad input fails fast.

pub const TITLE_MAX_CHARS: usize = 150;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title cannot be empty or just whitespace.".to_string());
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(format!("Title must be at most {} characters long.", TITLE_MAX_CHARS));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), String> {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(format!("Description must be at most {} characters long.", DESCRIPTION_MAX_CHARS));
    }
    Ok(())
}
