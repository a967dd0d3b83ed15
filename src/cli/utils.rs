use std::fs;
use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use serde_json::Value;

pub fn truncate(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > max_len {
        let truncated: String = chars[..max_len.saturating_sub(3)].iter().collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// String at a JSON pointer, or empty
pub fn field(entry: &Value, pointer: &str) -> String {
    match entry.pointer(pointer) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Split a comma-separated recipient list, dropping blanks
pub fn parse_recipients(list: &str) -> Vec<String> {
    list.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Body from the argument, stdin, or a file, in that order
pub fn read_body(body: Option<String>, stdin: bool, file: Option<&str>) -> Result<String> {
    let content = if let Some(b) = body {
        b
    } else if stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer.trim().to_string()
    } else if let Some(path) = file {
        fs::read_to_string(path).with_context(|| format!("Failed to read body file: {}", path))?
    } else {
        bail!("No body provided. Use --stdin or --file, or provide body as argument.");
    };

    if content.is_empty() {
        bail!("Email body cannot be empty");
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truncates_long_strings() {
        assert_eq!(truncate("abcdefghij", 6), "abc...");
        assert_eq!(truncate("abc", 6), "abc");
    }

    #[test]
    fn recipients_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_recipients(" a@example.com, ,b@example.com "),
            vec!["a@example.com", "b@example.com"]
        );
        assert!(parse_recipients(" , ").is_empty());
    }

    #[test]
    fn field_reads_nested_values() {
        let entry = json!({"from": {"emailAddress": {"address": "sender@example.com"}}, "n": 3});
        assert_eq!(field(&entry, "/from/emailAddress/address"), "sender@example.com");
        assert_eq!(field(&entry, "/n"), "3");
        assert_eq!(field(&entry, "/missing"), "");
    }

    #[test]
    fn body_argument_wins() {
        assert_eq!(read_body(Some("hi".into()), false, None).unwrap(), "hi");
    }

    #[test]
    fn body_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("body.txt");
        fs::write(&path, "from file").unwrap();
        assert_eq!(
            read_body(None, false, path.to_str()).unwrap(),
            "from file"
        );
    }

    #[test]
    fn missing_body_is_an_error() {
        assert!(read_body(None, false, None).is_err());
        assert!(read_body(Some(String::new()), false, None).is_err());
    }
}
