use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use colorfix_cli::config::{CONFIG_FILE_NAME, Config, generate_init_template, load_config};
use colorfix_cli::rules::RuleSet;
use colorfix_cli::walker::fix_files;

#[derive(Parser)]
#[command(name = "colorfix")]
#[command(
	author,
	version,
	about = "CLI tool for rewriting color .into() conversions into explicit constructor calls"
)]
struct Cli {
	/// Directory to scan (overrides `root` from the config file)
	#[arg(value_name = "ROOT")]
	root: Option<PathBuf>,

	/// Config file to use instead of ./.colorfix.toml
	#[arg(long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Extension of the files to rewrite, without the leading dot
	#[arg(long, value_name = "EXT")]
	ext: Option<String>,

	/// Only scan the top level of ROOT
	#[arg(long)]
	no_recursive: bool,

	/// Known color variable to rewrite; repeat to list several (replaces the defaults)
	#[arg(long = "color-var", value_name = "NAME")]
	color_vars: Vec<String>,

	/// Constructor wrapped around converted expressions
	#[arg(long, value_name = "PATH")]
	constructor: Option<String>,

	/// Report the files that would change without writing them
	#[arg(long)]
	dry_run: bool,

	/// Print the effective configuration and exit
	#[arg(long)]
	show_config: bool,

	/// Create a template .colorfix.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .colorfix.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(std::io::stderr)
		.init();

	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let (config, source) = load_config(cli.config.as_deref(), &cwd)
		.context("Failed to load configuration")?;
	let config = apply_overrides(config, &cli)?;

	if cli.show_config {
		return handle_show_config(&config, source.as_deref());
	}

	handle_fix(&config, cli.dry_run)
}

fn apply_overrides(mut config: Config, cli: &Cli) -> Result<Config> {
	if let Some(ref root) = cli.root {
		config.root = root.clone();
	}
	if let Some(ref ext) = cli.ext {
		config.extension = ext.clone();
	}
	if cli.no_recursive {
		config.recursive = false;
	}
	if !cli.color_vars.is_empty() {
		config.color_vars = cli.color_vars.clone();
	}
	if let Some(ref constructor) = cli.constructor {
		config.constructor = constructor.clone();
	}

	config.validate().context("Invalid command-line option")?;
	Ok(config)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_show_config(config: &Config, source: Option<&Path>) -> Result<ExitCode> {
	match source {
		Some(path) => println!("# Source: {}", path.display()),
		None => println!("# Source: built-in defaults"),
	}
	println!("root: {}", config.root.display());
	println!("extension: {}", config.extension);
	println!("recursive: {}", config.recursive);
	println!("constructor: {}", config.constructor);
	println!("color-vars: {}", config.color_vars.join(", "));
	println!("glob: {}", config.glob_pattern());

	Ok(ExitCode::SUCCESS)
}

fn handle_fix(config: &Config, dry_run: bool) -> Result<ExitCode> {
	let rules = RuleSet::from_config(config).context("Failed to compile rules")?;

	let verb = if dry_run { "Would fix" } else { "Fixed" };
	let report = fix_files(config, &rules, dry_run, |path| {
		println!("{verb} color conversions in {}", path.display());
	})
	.with_context(|| format!("Failed to process {}", config.root.display()))?;

	if dry_run {
		println!("Would modify {} files", report.modified.len());
	} else {
		println!("Modified {} files", report.modified.len());
	}
	tracing::debug!(scanned = report.scanned, "done");

	Ok(ExitCode::SUCCESS)
}
