use anyhow::Result;
use clap::{Arg, Command};

mod commands;
mod session;

fn build_cli() -> Command {
    Command::new("bookshelf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("In-memory book catalog with genres and favorites")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.toml (defaults to the platform config dir)")
                .global(true),
        )
        .subcommand(Command::new("shell").about("Start an interactive catalog session"))
        .subcommand(
            Command::new("run")
                .about("Run a script of catalog commands")
                .arg(Arg::new("script").required(true).value_name("FILE").help("Script file, one command per line")),
        )
        .subcommand(Command::new("genres").about("List the configured genres and their age rating"))
        .subcommand(
            Command::new("config")
                .about("Manage the configuration file")
                .subcommand(Command::new("init").about("Write a default config file if none exists"))
                .subcommand(Command::new("show").about("Print the effective configuration"))
                .subcommand(Command::new("path").about("Print the config file location")),
        )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let matches = build_cli().get_matches();
    let config_dir = matches.get_one::<String>("config").map(|s| s.as_str());

    match matches.subcommand() {
        Some(("shell", _)) => commands::shell(config_dir),
        Some(("run", sub_matches)) => commands::run_script(config_dir, sub_matches),
        Some(("genres", _)) => commands::list_genres(config_dir),
        Some(("config", sub_matches)) => commands::config(config_dir, sub_matches),
        _ => {
            build_cli().print_help()?;
            Ok(())
        }
    }
}
