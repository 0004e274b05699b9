//! Target validation command.

use tally::{Config, TARGET_ENV_VAR, TargetDescriptor};
use tracing::debug;

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS, OutputFormat};
use crate::terminal;

/// Validate a qualified target and print its decomposition.
pub fn cmd_check(target: Option<&str>, format: OutputFormat) -> i32 {
    let config = match target {
        Some(raw) => Config::from_target_str(raw),
        None => {
            terminal::info(&format!("reading target from ${TARGET_ENV_VAR}"));
            Config::from_env()
        }
    };

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            terminal::error(&err.to_string());
            return EXIT_FAILURE;
        }
    };

    let target = config.target();
    debug!(target_name = target.qualified_name(), "target parsed");

    match format {
        OutputFormat::Text => print_text(target),
        OutputFormat::Json => print_json(target),
    }
    EXIT_SUCCESS
}

fn print_text(target: &TargetDescriptor) {
    terminal::success(target.qualified_name());
    let modules = if target.module_names().is_empty() {
        "-".to_string()
    } else {
        target.module_names().join("::")
    };
    println!("modules: {modules}");
    println!("type: {}", target.type_name());
    println!("method: {}", target.method_name());
    println!("kind: {}", target.kind());
}

fn print_json(target: &TargetDescriptor) {
    let modules: Vec<String> = target
        .module_names()
        .iter()
        .map(|m| format!("\"{}\"", escape(m)))
        .collect();
    println!(
        r#"{{"target":"{}","modules":[{}],"type":"{}","method":"{}","kind":"{}"}}"#,
        escape(target.qualified_name()),
        modules.join(","),
        escape(target.type_name()),
        escape(target.method_name()),
        target.kind()
    );
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
