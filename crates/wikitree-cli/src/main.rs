use anyhow::{Context, Result};
use std::fs::File;
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};
use std::{env, process};
use wikitree_config::{Config, ConfigError, PrinterConfig};
use wikitree_syntax::{Document, PrintOptions, parse, write_tree};

fn print_options(printer: &PrinterConfig) -> PrintOptions {
    PrintOptions {
        indent_width: printer.indent_width,
        escape_newlines: printer.escape_newlines,
    }
}

/// A broken config file only costs the printer settings, never the parse.
fn config_or_default(loaded: Result<Option<Config>, ConfigError>) -> Config {
    match loaded {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            log::warn!("{e}; using default config");
            Config::default()
        }
    }
}

fn load_config() -> Config {
    log::info!("Config path: {}", Config::config_path().display());
    config_or_default(Config::load())
}

fn parse_file(path: &Path) -> Result<Document> {
    log::info!("Parsing {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    parse(file).with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <wiki-file>", args[0]);
        process::exit(1);
    }
    let path = PathBuf::from(&args[1]);

    let config = load_config();
    let doc = parse_file(&path)?;

    for diagnostic in doc.diagnostics() {
        log::warn!("{}: {diagnostic}", path.display());
    }

    let mut out = String::new();
    write_tree(&mut out, doc.tree(), &print_options(&config.printer))?;

    let mut stdout = stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
