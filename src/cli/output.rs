//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{ConfabArgs, OutputFormat};
use crate::error::Result;

/// Result structure for a single classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub text: String,
    pub tag: String,
    pub confidence: f64,
    pub fallback: bool,
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<IntentScore>>,
}

/// Probability of one intent.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentScore {
    pub tag: String,
    pub probability: f64,
}

/// Result structure for catalog validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogValidationResult {
    pub source: String,
    pub intents: usize,
    pub patterns: usize,
    pub responses: usize,
    pub tags: Vec<String>,
}

/// Summary printed when a chat ends.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatSummary {
    pub session_id: String,
    pub turns: usize,
    pub ended_by_user: bool,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &ConfabArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &ConfabArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match &value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                if let Some(rows) = val.as_array()
                    && rows.iter().all(|row| row.is_object())
                    && !rows.is_empty()
                {
                    println!("{key}:");
                    for row in rows {
                        println!("  {}", format_row(row));
                    }
                } else {
                    println!("{key}: {}", format_value(val));
                }
            }
        }
        _ => println!("{}", format_value(&value)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ConfabArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON object as `key=value` pairs on one line.
fn format_row(value: &serde_json::Value) -> String {
    match value.as_object() {
        Some(obj) => obj
            .iter()
            .map(|(key, val)| format!("{key}={}", format_value(val)))
            .collect::<Vec<_>>()
            .join(" "),
        None => format_value(value),
    }
}

/// Format a JSON value for human output.
pub(crate) fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:.4}"),
            _ => n.to_string(),
        },
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("greeting")), "greeting");
        assert_eq!(format_value(&json!(3)), "3");
        assert_eq!(format_value(&json!(0.5)), "0.5000");
        assert_eq!(format_value(&json!(["a", "b"])), "[a, b]");
        assert_eq!(format_value(&json!(null)), "null");
    }

    #[test]
    fn test_format_row() {
        let row = json!({"tag": "thanks", "probability": 0.25});
        let formatted = format_row(&row);
        assert!(formatted.contains("tag=thanks"));
        assert!(formatted.contains("probability=0.2500"));
    }
}
