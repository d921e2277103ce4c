//! Diff generation for audit logging
//!
//! Summarizes top-level field changes between two JSON snapshots.

use serde_json::Value;

/// Describe the changes between two JSON values, or None if they are equal
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

/// Format a JSON value compactly for a diff line
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => {
            // Split policies are small enough to show inline
            if obj.len() <= 2 && obj.values().all(|v| !v.is_object() && !v.is_array()) {
                let fields: Vec<String> = obj
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, format_value(v)))
                    .collect();
                format!("{{{}}}", fields.join(", "))
            } else {
                format!("{{{} fields}}", obj.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_income_change() {
        let before = json!({"name": "Sam", "monthly_income": 15000});
        let after = json!({"name": "Sam", "monthly_income": 18000});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "monthly_income: 15000 -> 18000");
    }

    #[test]
    fn test_split_change_is_inline() {
        let before = json!({"split": {"mode": "income", "percentMore": 0}});
        let after = json!({"split": {"mode": "topEarnsMore", "percentMore": 20}});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("mode=\"income\""));
        assert!(diff.contains("mode=\"topEarnsMore\""));
        assert!(diff.contains("percentMore=20"));
    }

    #[test]
    fn test_categories_change_summarized() {
        let before = json!({"categories": [{"name": "Rent"}]});
        let after = json!({"categories": [{"name": "Rent"}, {"name": "Food"}]});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "categories: [1 items] -> [2 items]");
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"name": "Flat", "old": true});
        let after = json!({"name": "Flat", "new": 1});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old: true -> (removed)"));
        assert!(diff.contains("new: (added) -> 1"));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "Flat"});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_long_string_truncation() {
        let before = json!({"name": "å".repeat(100)});
        let after = json!({"name": "short"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }
}
