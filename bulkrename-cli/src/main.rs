use anyhow::{anyhow, Context, Result};
use bulkrename_core::{load_rules, Config, OutputFormatter, Preview, RuleConfig, VersionResult};
use clap::Parser;
use log::debug;
use std::io::{self, IsTerminal};
use std::process;
use std::str::FromStr;

mod cli;
mod preview;
mod rename;

use cli::{Cli, Commands, OutputFormat, PreviewArg, RuleArgs};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let use_color = !cli.no_color && io::stdout().is_terminal();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
            .unwrap_or_else(|e| {
                eprintln!("Error: {e:#}");
                process::exit(2);
            });
    }

    // Load config to get defaults
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: ignoring config file: {e:#}");
        Config::default()
    });
    let use_color = config.defaults.use_color.map_or(use_color, |c| c && !cli.no_color);

    let result = match cli.command {
        Commands::Preview {
            dir,
            rules,
            preview,
            output,
        } => build_rules(&rules, &config).and_then(|rule_config| {
            preview::handle_preview(
                &dir,
                &rule_config,
                preview_format(preview, &config),
                output,
                use_color,
            )
        }),
        Commands::Rename {
            dir,
            rules,
            preview,
            dry_run,
            output,
        } => build_rules(&rules, &config).and_then(|rule_config| {
            rename::handle_rename(
                &dir,
                &rule_config,
                preview_format(preview, &config),
                dry_run,
                cli.yes,
                output,
                use_color,
                config.defaults.max_failures_shown,
            )
        }),
        Commands::Version { output } => handle_version(output),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Map an error to the process exit code: 1 for collisions and partial
/// failures, 2 for invalid input, 3 for everything else
fn exit_code(e: &anyhow::Error) -> i32 {
    let message = format!("{e:#}").to_lowercase();
    if message.contains("collide") || message.contains("partial failure") {
        1
    } else if ["invalid", "not found", "not a directory", "non-interactive", "unknown preset"]
        .iter()
        .any(|needle| message.contains(needle))
    {
        2
    } else {
        3
    }
}

/// Start from the rules file or preset, then overlay individual flags
fn build_rules(args: &RuleArgs, config: &Config) -> Result<RuleConfig> {
    let mut rules = if let Some(path) = &args.rules {
        load_rules(path)?
    } else if let Some(name) = &args.preset {
        config
            .preset(name)
            .cloned()
            .ok_or_else(|| anyhow!("Unknown preset '{}'", name))?
    } else {
        RuleConfig::default()
    };

    args.apply_to(&mut rules);
    debug!("Effective rules: {:?}", rules);
    Ok(rules)
}

fn preview_format(arg: Option<PreviewArg>, config: &Config) -> Preview {
    arg.map(Into::into).unwrap_or_else(|| {
        Preview::from_str(&config.defaults.preview_format).unwrap_or(Preview::Table)
    })
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "bulkrename".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(())
}
