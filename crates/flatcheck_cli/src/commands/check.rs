use anyhow::{Context, Result};
use flatcheck_core::{ColumnDefinition, ConfigError, Configuration};
use flatcheck_parser::parse_file;
use serde_json::json;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(config_path: &Path, format: &str) -> Result<()> {
    info!("Checking configuration: {}", config_path.display());

    let configuration = parse_file(config_path).with_context(|| {
        format!(
            "Failed to parse configuration file: {}",
            config_path.display()
        )
    })?;

    let problems = configuration.check();

    match format {
        "json" => {
            let output = json!({
                "valid": problems.is_empty(),
                "delimiter": configuration.delimiter.to_string(),
                "size": configuration.size,
                "patternMatch": configuration.pattern_match,
                "columns": configuration.columns.len(),
                "problems": problems.iter().map(|p| p.to_string()).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => print_summary(&configuration, config_path, &problems),
    }

    if !problems.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn print_summary(
    configuration: &Configuration,
    config_path: &Path,
    problems: &[ConfigError],
) {
    output::print_info(&format!("Configuration loaded: {}", config_path.display()));

    println!("\nConfiguration Summary:");
    println!("  Delimiter:     '{}'", configuration.delimiter);
    println!("  Row size:      {}", configuration.size);
    println!("  Pattern match: {:?}", configuration.pattern_match);
    println!("  Columns:       {}", configuration.columns.len());

    for (index, column) in configuration.columns.iter().enumerate() {
        let rules = describe_rules(column);
        let rules = if rules.is_empty() {
            "unconstrained".to_string()
        } else {
            rules.join(", ")
        };
        println!("    {:>3}. {}: {}", index, column.display_name(index), rules);
    }

    if configuration.columns.len() > configuration.size {
        output::print_error(&format!(
            "{} column definitions but rows are expected to have {} fields",
            configuration.columns.len(),
            configuration.size
        ));
    }

    if problems.is_empty() {
        println!();
        output::print_success("Configuration is valid");
    } else {
        output::print_problems(problems);
    }
}

fn describe_rules(column: &ColumnDefinition) -> Vec<String> {
    let mut rules = Vec::new();

    if column.required {
        rules.push("required".to_string());
    }
    if let Some(other) = column.required_if_empty {
        rules.push(format!("requiredIfEmpty #{}", other));
    }
    if let Some(other) = column.required_if_filled {
        rules.push(format!("requiredIfFilled #{}", other));
    }
    if let Some(max) = column.max_length.filter(|max| *max > 0) {
        rules.push(format!("maxLength {}", max));
    }
    if let Some(min) = column.min_length {
        rules.push(format!("minLength {}", min));
    }
    if let Some(values) = column.values.as_ref().filter(|v| !v.is_empty()) {
        rules.push(format!("values [{}]", values.join(", ")));
    }
    if let Some(pattern) = column.pattern.as_deref().filter(|p| !p.is_empty()) {
        rules.push(format!("pattern {}", pattern));
    }
    if column.integer {
        rules.push("integer".to_string());
    }
    if let Some(format) = column.date.as_deref().filter(|f| !f.is_empty()) {
        rules.push(format!("date {}", format));
    }

    rules
}
