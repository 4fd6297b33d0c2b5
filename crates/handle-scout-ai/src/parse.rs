use serde_json::Value;

/// Extract the `usernames` array from the model's JSON text.
///
/// Anything that is not a JSON object carrying a `usernames` array yields an
/// empty list. Non-string entries are dropped.
pub fn parse_usernames(text: &str) -> Vec<String> {
    let value: Value = match serde_json::from_str(text.trim()) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("Model output is not valid JSON, treating as empty: {}", err);
            return Vec::new();
        }
    };

    match value.get("usernames").and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        None => {
            log::warn!("Model output has no usernames array, treating as empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_usernames_array() {
        let parsed = parse_usernames(r#" {"usernames":["gamer1","pro_gm","xx"]} "#);
        assert_eq!(parsed, vec!["gamer1", "pro_gm", "xx"]);
    }

    #[test]
    fn test_empty_array_is_empty() {
        assert!(parse_usernames(r#"{"usernames":[]}"#).is_empty());
    }

    #[test]
    fn test_missing_field_is_empty() {
        assert!(parse_usernames(r#"{"names":["abc"]}"#).is_empty());
    }

    #[test]
    fn test_non_array_field_is_empty() {
        assert!(parse_usernames(r#"{"usernames":"abc"}"#).is_empty());
    }

    #[test]
    fn test_invalid_json_is_empty() {
        assert!(parse_usernames("Sure! Here are some usernames: abc, def").is_empty());
        assert!(parse_usernames("").is_empty());
    }

    #[test]
    fn test_top_level_array_is_empty() {
        assert!(parse_usernames(r#"["abc","def"]"#).is_empty());
    }

    #[test]
    fn test_non_string_entries_are_dropped() {
        let parsed = parse_usernames(r#"{"usernames":["abc", 1234, null, {"a":1}, "def"]}"#);
        assert_eq!(parsed, vec!["abc", "def"]);
    }
}
