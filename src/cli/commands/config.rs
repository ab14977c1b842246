use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, path: &Path, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            if !path.exists() {
                cfg.save_to(path)?;
            }
            edit(path, editor.as_deref())?;
        }
    }

    Ok(())
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open `path` in the requested editor, falling back to the default one.
fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let fallback = default_editor();
    let editor = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    if matches!(Command::new(&editor).arg(path).status(), Ok(s) if s.success()) {
        success(format!("Configuration file edited using '{editor}'"));
        return Ok(());
    }

    if editor == fallback {
        return Err(AppError::Config(format!("failed to run editor '{editor}'")));
    }

    warning(format!(
        "Editor '{editor}' not available, falling back to '{fallback}'"
    ));

    match Command::new(&fallback).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using fallback '{fallback}'"));
            Ok(())
        }
        _ => Err(AppError::Config(format!(
            "failed to edit configuration file using fallback '{fallback}'"
        ))),
    }
}
