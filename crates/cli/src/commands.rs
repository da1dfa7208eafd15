use crate::session::Session;
use anyhow::{bail, Context, Result};
use bookshelf_config::{Config, ConfigManager};
use bookshelf_library::Catalog;
use clap::ArgMatches;
use console::style;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

/// Start an interactive session on stdin
pub fn shell(config_dir: Option<&str>) -> Result<()> {
    let catalog = open_catalog(config_dir)?;
    let interactive = io::stdin().is_terminal();

    if interactive {
        println!(
            "{} Type 'help' for commands, 'quit' to leave.",
            style("Bookshelf").bold().cyan()
        );
    }

    let mut session = Session::new(catalog, io::stdout());
    session.run(io::stdin().lock(), interactive)
}

/// Run every command in a script file
pub fn run_script(config_dir: Option<&str>, matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("script")
        .ok_or_else(|| anyhow::anyhow!("Script path is required"))?;

    let file = File::open(path).with_context(|| format!("Failed to open script {}", path))?;
    let catalog = open_catalog(config_dir)?;

    let mut session = Session::new(catalog, io::stdout());
    session.run(BufReader::new(file), false)
}

/// List configured genres with their age rating
pub fn list_genres(config_dir: Option<&str>) -> Result<()> {
    let catalog = open_catalog(config_dir)?;
    for line in genre_lines(&catalog) {
        println!("{}", line);
    }
    Ok(())
}

/// Manage the configuration file
pub fn config(config_dir: Option<&str>, matches: &ArgMatches) -> Result<()> {
    let manager = config_manager(config_dir)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            if manager.initialize().context("Failed to write default config")? {
                println!(
                    "{} Wrote default config to {}",
                    style("✓").green().bold(),
                    manager.config_path().display()
                );
            } else {
                println!("Config already exists at {}", manager.config_path().display());
            }
        }
        Some(("show", _)) => {
            let config = manager
                .load_with_env_overrides()
                .context("Failed to load config")?;
            print!("{}", render_config(&config)?);
            for problem in config.validate().err().unwrap_or_default() {
                println!("{} {}", style("warning:").yellow().bold(), problem);
            }
        }
        Some(("path", _)) => println!("{}", manager.config_path().display()),
        _ => bail!("Expected one of: init, show, path"),
    }
    Ok(())
}

fn config_manager(config_dir: Option<&str>) -> Result<ConfigManager> {
    let manager = match config_dir {
        Some(dir) => ConfigManager::with_directory(PathBuf::from(dir)),
        None => ConfigManager::new(),
    };
    manager.context("Failed to locate config directory")
}

fn open_catalog(config_dir: Option<&str>) -> Result<Catalog> {
    let manager = config_manager(config_dir)?;
    log::debug!("Loading catalog config from {}", manager.config_path().display());
    Catalog::from_manager(&manager).with_context(|| {
        format!(
            "Failed to set up catalog from {}",
            manager.config_path().display()
        )
    })
}

fn genre_lines(catalog: &Catalog) -> Vec<String> {
    let config = catalog.config();
    catalog
        .known_genres()
        .iter()
        .map(|genre| {
            let rating = if config.is_for_children(genre) {
                "children"
            } else {
                "adults"
            };
            format!("{} ({})", genre, rating)
        })
        .collect()
}

fn render_config(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to render config")
}
