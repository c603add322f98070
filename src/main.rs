//! Quill - a small terminal line editor.
//!
//! # Usage
//!
//! ```bash
//! quill notes.txt todo.txt
//! quill --tabsize 8 --line-numbers main.c
//! quill --log-file quill.log notes.txt
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quill::app::App;
use quill::config::{
    ConfigOverrides, clear_config, global_config_path, load_config, local_override_path,
    save_config,
};

/// A small terminal line editor
#[derive(Parser, Debug)]
#[command(name = "quill", version, about, long_about = None)]
struct Cli {
    /// Files to edit; missing files are created on save
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Tab stop width in columns
    #[arg(long, value_name = "N", value_parser = parse_tabsize)]
    tabsize: Option<usize>,

    /// Show line numbers
    #[arg(long)]
    line_numbers: bool,

    /// Redraws a status message stays visible for
    #[arg(long, value_name = "N")]
    message_cooldown: Option<u32>,

    /// Write log output to a file (also read from QUILL_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save the options given on this command line as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            tabsize: self.tabsize,
            message_cooldown: self.message_cooldown,
            show_linenumbers: self.line_numbers.then_some(true),
        }
    }
}

fn parse_tabsize(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("'{s}' is not a tab width of at least 1")),
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| std::env::var_os("QUILL_LOG").map(PathBuf::from));
    init_logging(log_file.as_deref())?;

    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_overrides = cli.overrides();

    if cli.clear {
        clear_config(&global_path)?;
    }
    if cli.save {
        save_config(&global_path, &cli_overrides)?;
    }

    let file_overrides = if cli.clear {
        ConfigOverrides::default()
    } else {
        let global = load_config(&global_path)?;
        let local = load_config(&local_path)?;
        global.union(&local)
    };
    let options = file_overrides.union(&cli_overrides).resolve();
    tracing::debug!(?options, "resolved options");

    let mut app = App::new(cli.files).with_options(options);
    app.run().context("Editor error")
}
