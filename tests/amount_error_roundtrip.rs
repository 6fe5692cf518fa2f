use std::collections::HashSet;

use token_amount_core::codec::error::AmountError;
use token_amount_core::codec::error_catalog::AmountErrorCode;

fn extract_string(json: &str, key: &str) -> Option<String> {
    let pattern = format!("\"{}\":\"", key);
    let start = json.find(&pattern)? + pattern.len();
    let mut chars = json[start..].chars();
    let mut value = String::new();
    let mut escape = false;
    while let Some(ch) = chars.next() {
        if escape {
            match ch {
                'n' => value.push('\n'),
                'r' => value.push('\r'),
                't' => value.push('\t'),
                'u' => {
                    let digits: String = chars.by_ref().take(4).collect();
                    let codepoint = u32::from_str_radix(&digits, 16).ok()?;
                    value.push(char::from_u32(codepoint)?);
                }
                other => value.push(other),
            }
            escape = false;
            continue;
        }
        match ch {
            '\\' => escape = true,
            '"' => return Some(value),
            _ => value.push(ch),
        }
    }
    None
}

fn extract_object_body(json: &str, key: &str) -> Option<String> {
    let pattern = format!("\"{}\":{{", key);
    let start = json.find(&pattern)? + pattern.len();
    let mut depth = 1i32;
    let mut in_string = false;
    let mut escape = false;
    let mut body = String::new();
    for ch in json[start..].chars() {
        if escape {
            body.push(ch);
            escape = false;
            continue;
        }
        match ch {
            '\\' if in_string => {
                body.push(ch);
                escape = true;
            }
            '"' => {
                in_string = !in_string;
                body.push(ch);
            }
            '{' if !in_string => {
                depth += 1;
                body.push(ch);
            }
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(body);
                }
                body.push(ch);
            }
            _ => body.push(ch),
        }
    }
    None
}

#[test]
fn json_shape_per_code() {
    for code in AmountErrorCode::all() {
        let err = AmountError::new(*code);
        let json = err.to_log_json();
        assert!(json.starts_with('{'));
        assert_eq!(extract_string(&json, "code").as_deref(), Some(code.code()));
        assert_eq!(
            extract_string(&json, "title").as_deref(),
            Some(code.title())
        );
        assert_eq!(
            extract_string(&json, "message").as_deref(),
            Some(code.message_pt())
        );
        assert_eq!(extract_object_body(&json, "context").as_deref(), Some(""));
    }
}

#[test]
fn context_value_roundtrips_through_escaping() {
    let raw = "aspas \" barra \\ sino \u{7}";
    let err = AmountError::new(AmountErrorCode::MalformedInput).with_context("amount", raw);
    let json = err.to_log_json();
    let body = extract_object_body(&json, "context").expect("context");
    let wrapped = format!("{{{}}}", body);
    assert_eq!(extract_string(&wrapped, "amount").as_deref(), Some(raw));
}

#[test]
fn all_codes_seen() {
    let mut seen = HashSet::new();
    for code in AmountErrorCode::all() {
        let json = AmountError::new(*code).to_log_json();
        if let Some(code_str) = extract_string(&json, "code") {
            seen.insert(code_str);
        }
    }
    assert_eq!(seen.len(), 6);
}
