use anyhow::{Context, Result};
use tracing::info;

use crate::output;

/// Starter item form. Values are raw strings on purpose: forms carry user
/// text, and binding decides what parses.
const STARTER_FORM: &str = r#"# formcheck item form
itemName: notebook
price: "1200"
quantity: "20"
"#;

pub fn execute(output_path: Option<&str>) -> Result<()> {
    match output_path {
        Some(path) => {
            info!("Writing starter form to {}", path);
            std::fs::write(path, STARTER_FORM)
                .with_context(|| format!("Failed to write starter form: {}", path))?;
            output::print_success(&format!("Starter form written to {}", path));
        }
        None => {
            print!("{}", STARTER_FORM);
        }
    }

    Ok(())
}
