use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

use super::OutputFormat;

/// Print rows in the specified format
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Table => {
            println!("{}", Table::new(data));
        }
        OutputFormat::Plain => {
            let json = serde_json::to_value(data)?;
            if let Some(arr) = json.as_array() {
                for item in arr {
                    if let Some(obj) = item.as_object() {
                        let values: Vec<String> = obj
                            .values()
                            .map(|v| match v {
                                serde_json::Value::String(s) => s.clone(),
                                serde_json::Value::Null => "".to_string(),
                                other => other.to_string(),
                            })
                            .collect();
                        println!("{}", values.join("|"));
                    }
                }
            }
        }
    }
    Ok(())
}

/// Print a single value as pretty JSON
pub fn print_single<T: Serialize + ?Sized>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
