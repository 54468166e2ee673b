use colored::*;
use formcheck_core::{ValidationOutcome, Violation};
use formcheck_messages::MessageCatalog;
use serde_json::json;

pub fn print_outcome(outcome: &ValidationOutcome, catalog: &MessageCatalog, format: &str) {
    match format {
        "json" => print_json_outcome(outcome, catalog),
        _ => print_text_outcome(outcome, catalog),
    }
}

fn print_text_outcome(outcome: &ValidationOutcome, catalog: &MessageCatalog) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if outcome.is_valid() {
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

        println!("\n{}", "Violations:".red().bold());
        for (i, violation) in outcome.violations().iter().enumerate() {
            let target = violation.field_name().unwrap_or("record");
            println!(
                "  {}. [{}] {}",
                i + 1,
                target.bold(),
                catalog.render(violation).red()
            );
            if let Some(rejected) = &violation.rejected_value {
                println!("     rejected value: {:?}", rejected);
            }
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Total violations: {}", outcome.len());
    println!("{}", "═".repeat(60));
}

fn print_json_outcome(outcome: &ValidationOutcome, catalog: &MessageCatalog) {
    let violations: Vec<_> = outcome
        .violations()
        .iter()
        .map(|violation| violation_json(violation, catalog))
        .collect();

    let output = json!({
        "valid": outcome.is_valid(),
        "violations": violations,
        "summary": {
            "violation_count": outcome.len(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn violation_json(violation: &Violation, catalog: &MessageCatalog) -> serde_json::Value {
    json!({
        "target": violation.field_name().unwrap_or("record"),
        "code": violation.code,
        "message": catalog.render(violation),
        "resolvedCodes": violation.resolved_codes,
        "rejectedValue": violation.rejected_value,
    })
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
