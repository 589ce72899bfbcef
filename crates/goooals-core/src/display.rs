//! Display conventions for nullable goal fields.

use std::fmt::Display;

/// Rendered in place of any null or empty field.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Text field: `None` and `""` become [`NOT_SPECIFIED`].
pub fn display_text(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NOT_SPECIFIED.to_string(),
    }
}

pub fn display_number<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_SPECIFIED.to_string(), |n| n.to_string())
}

pub fn display_flag(value: Option<bool>) -> String {
    match value {
        Some(true) => "Yes".to_string(),
        Some(false) => "No".to_string(),
        None => NOT_SPECIFIED.to_string(),
    }
}

/// Tags joined with `", "`; a missing or empty list is not specified.
pub fn display_tags(tags: Option<&[String]>) -> String {
    match tags {
        Some(tags) if !tags.is_empty() => tags.join(", "),
        _ => NOT_SPECIFIED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_missing_text_is_not_specified() {
        assert_eq!(display_text(None), NOT_SPECIFIED);
        assert_eq!(display_text(Some("")), NOT_SPECIFIED);
        assert_eq!(display_text(Some("Health")), "Health");
    }

    #[test]
    fn zero_is_a_value() {
        assert_eq!(display_number(Some(0.0)), "0");
        assert_eq!(display_number::<u32>(None), NOT_SPECIFIED);
    }

    #[test]
    fn flags_and_tags() {
        assert_eq!(display_flag(Some(false)), "No");
        assert_eq!(display_flag(None), NOT_SPECIFIED);
        let tags = vec!["health".to_string(), "outdoors".to_string()];
        assert_eq!(display_tags(Some(tags.as_slice())), "health, outdoors");
        assert_eq!(display_tags(Some(&[][..])), NOT_SPECIFIED);
    }
}
