use anyhow::Result;
use colored::*;
use flatcheck_core::{ConfigError, ValidationReport};
use flatcheck_validator::Diagnostic;
use serde_json::json;

pub fn print_validation_report(
    report: &ValidationReport,
    diagnostics: &[Diagnostic],
    format: &str,
) -> Result<()> {
    match format {
        "json" => print_json_report(report, diagnostics),
        _ => {
            print_text_report(report, diagnostics);
            Ok(())
        }
    }
}

fn print_text_report(report: &ValidationReport, diagnostics: &[Diagnostic]) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    if !diagnostics.is_empty() {
        println!("\n{}", "Violations:".red().bold());
        for (i, diagnostic) in diagnostics.iter().enumerate() {
            println!("  {}. {}", i + 1, diagnostic.to_string().red());
        }
    }

    let stats = &report.stats;
    println!("\n{}", "Summary:".bold());
    println!("  Records validated: {}", stats.records_validated);
    println!("  Records failed:    {}", stats.records_failed);
    println!("  Fields checked:    {}", stats.fields_checked);
    println!("  Violations:        {}", stats.violations);
    println!("  Duration:          {} ms", stats.duration_ms);
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &ValidationReport, diagnostics: &[Diagnostic]) -> Result<()> {
    let output = json!({
        "passed": report.passed,
        "stats": report.stats,
        "diagnostics": diagnostics,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_problems(problems: &[ConfigError]) {
    println!("\n{}", "Problems:".red().bold());
    for (i, problem) in problems.iter().enumerate() {
        println!("  {}. {}", i + 1, problem.to_string().red());
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
