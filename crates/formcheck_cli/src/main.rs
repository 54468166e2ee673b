mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "formcheck")]
#[command(version, about = "Form validation engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an item form file against the rule set
    Validate {
        /// Path to the item form file (YAML or TOML)
        form: String,

        /// Rule table file overriding the standard rules
        #[arg(short, long)]
        rules: Option<String>,

        /// Message catalog file overriding the built-in messages
        #[arg(short, long)]
        messages: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Resolve the message-code fallback chain for a violation code
    Codes {
        /// Symbolic violation code (e.g. "required")
        code: String,

        /// Object name (e.g. "item")
        object: String,

        /// Field name; switches to the field-level chain
        #[arg(long)]
        field: Option<String>,

        /// Declared field type for the field-level chain
        #[arg(long, default_value = "String")]
        field_type: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Write a starter item form file
    Init {
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            form,
            rules,
            messages,
            format,
        } => commands::validate::execute(&form, rules.as_deref(), messages.as_deref(), &format),

        Commands::Codes {
            code,
            object,
            field,
            field_type,
            format,
        } => commands::codes::execute(&code, &object, field.as_deref(), &field_type, &format),

        Commands::Init { output } => commands::init::execute(output.as_deref()),
    }
}
