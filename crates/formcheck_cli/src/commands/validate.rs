use anyhow::{Context, Result};
use formcheck_messages::MessageCatalog;
use formcheck_parser::parse_file;
use formcheck_rules::{FormBinder, ItemForm, RuleEngine, RuleTable};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(
    form_path: &str,
    rules_path: Option<&str>,
    messages_path: Option<&str>,
    format: &str,
) -> Result<()> {
    info!("Validating item form: {}", form_path);

    // Parse the form file
    let form: ItemForm = parse_file(Path::new(form_path))
        .with_context(|| format!("Failed to parse form file: {}", form_path))?;

    // Rule table: standard unless a table file was supplied
    let table = match rules_path {
        Some(path) => {
            info!("Loading rule table: {}", path);
            parse_file::<RuleTable>(Path::new(path))
                .with_context(|| format!("Failed to parse rule table: {}", path))?
        }
        None => RuleTable::standard(),
    };

    // Message catalog: built-in messages unless a catalog file was supplied
    let catalog = match messages_path {
        Some(path) => {
            info!("Loading message catalog: {}", path);
            let messages = parse_file::<HashMap<String, String>>(Path::new(path))
                .with_context(|| format!("Failed to parse message catalog: {}", path))?;
            MessageCatalog::from_map(messages)
        }
        None => MessageCatalog::standard(),
    };

    output::print_info(&format!(
        "Form loaded: name={:?} price={:?} quantity={:?}",
        form.item_name, form.price, form.quantity
    ));

    // Bind raw input, then run the rule set over whatever parsed; binding
    // violations and rule violations are reported together.
    let bound = FormBinder::new().bind(&form);
    let engine = RuleEngine::with_table(table);

    let mut outcome = bound.violations;
    outcome.merge(engine.validate(&bound.item));

    output::print_outcome(&outcome, &catalog, format);

    if !outcome.is_valid() {
        std::process::exit(1);
    }

    Ok(())
}
