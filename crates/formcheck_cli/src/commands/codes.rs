use anyhow::{Context, Result};
use colored::*;
use formcheck_messages::MessageCodesResolver;
use serde_json::json;
use tracing::info;

pub fn execute(
    code: &str,
    object: &str,
    field: Option<&str>,
    field_type: &str,
    format: &str,
) -> Result<()> {
    info!("Resolving message codes for '{}' on '{}'", code, object);

    let resolver = MessageCodesResolver::new();
    let chain = match field {
        Some(field) => resolver
            .resolve_field(code, object, field, field_type)
            .context("Failed to resolve field-level message codes")?,
        None => resolver
            .resolve_record(code, object)
            .context("Failed to resolve record-level message codes")?,
    };

    match format {
        "json" => {
            let output = json!({
                "code": code,
                "object": object,
                "field": field,
                "resolvedCodes": chain,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        _ => {
            println!("\n{}", "Resolved message codes:".bold());
            for (i, resolved) in chain.iter().enumerate() {
                println!("  {}. {}", i + 1, resolved);
            }
        }
    }

    Ok(())
}
