//! Command-line interface for sqlstash
//! Extracts one named SQL statement from an annotated `.sql` file and writes
//! it to stdout, optionally gated behind a confirmation prompt for
//! schema-changing or row-mutating statements.
//!
//! Usage:
//!   sqlstash `<path>` [name]            - Emit the named statement
//!   sqlstash `<path>`                   - List available statement names

use clap::{Arg, ArgAction, Command};
use sqlstash_config::StashConfig;
use sqlstash_parser::{interpolate, is_row_mutation, is_schema_change, DocumentLoader};

mod prompt;

fn main() {
    let matches = Command::new("sqlstash")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract named SQL statements from annotated .sql files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the statement file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("statement")
                .help("Name of the statement to emit (omit to list all names)")
                .index(2),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .short('n')
                .help("Name of the statement to emit (same as the positional)"),
        )
        .arg(
            Arg::new("confirm")
                .long("confirm")
                .help("Prompt for confirmation before emitting (overrides config)")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let name = matches
        .get_one::<String>("name")
        .or_else(|| matches.get_one::<String>("statement"));
    let force_confirm = matches.get_flag("confirm");

    if !path.ends_with(".sql") {
        eprintln!("error: file must have .sql extension");
        std::process::exit(1);
    }

    let config = load_config();

    let loader = DocumentLoader::from_path(path).unwrap_or_else(|err| {
        eprintln!("error: {}", err);
        std::process::exit(1);
    });
    let document = loader.parse();

    let Some(name) = name else {
        eprintln!("available statements:");
        for statement_name in document.names() {
            eprintln!("  {}", statement_name);
        }
        return;
    };

    let statement = document.statement(name).unwrap_or_else(|err| {
        eprintln!("error: {}", err);
        std::process::exit(1);
    });

    // Classify the interpolated text so the verdict reflects what will run.
    let sql = interpolate(&statement.text, document.variables());
    let needs_confirm = force_confirm
        || config.confirm
        || (config.confirm_schema_changes && is_schema_change(&sql))
        || (config.confirm_updates && is_row_mutation(&sql));

    if needs_confirm && !prompt::confirm(&statement.name, &sql) {
        eprintln!("cancelled");
        std::process::exit(1);
    }

    // No added trailing newline; the statement is piped as-is.
    print!("{}", sql);
}

/// Load the user configuration. A missing, unreadable or malformed file all
/// behave the same: the built-in defaults apply.
fn load_config() -> StashConfig {
    let mut loader = sqlstash_config::Loader::new();
    if let Some(path) = sqlstash_config::default_config_path() {
        loader = loader.with_optional_file(path);
    }
    loader.build().unwrap_or_default()
}
