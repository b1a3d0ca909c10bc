//! Spidr form CLI
//!
//! Drives the interest form from the command line: render the page, try the
//! input masks, or push one submission through validation.
//!
//! ## Usage
//!
//! ```bash
//! spidr-form render --errors
//! spidr-form mask phone 1234567890
//! spidr-form submit --first-name Kai --last-name Depweg --phone 1234567890 \
//!     --email kai@example.com --cost-guess 69 --pin 1234567890123456
//! ```

mod commands;

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use spidr_conf::Settings;
use tracing_subscriber::EnvFilter;

use crate::commands::{MaskKind, SubmitArgs};

#[derive(Parser)]
#[command(name = "spidr-form")]
#[command(about = "Spidr air fryer interest form utility", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Path to a TOML settings file
	#[arg(long, global = true, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Verbosity level (can be repeated)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the form page as HTML
	Render {
		/// Render after an empty submission so every error is shown
		#[arg(long)]
		errors: bool,
	},

	/// Print a value as the form would display it
	Mask {
		/// Which input mask to apply
		#[arg(value_enum)]
		kind: MaskKind,

		/// Raw input
		#[arg(value_name = "INPUT")]
		input: String,
	},

	/// Validate one submission and log it on success
	Submit(SubmitArgs),
}

fn init_tracing(settings: &Settings, verbosity: u8) {
	let level = match verbosity {
		0 => settings.logging.level.as_str(),
		1 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn run(cli: Cli) -> anyhow::Result<bool> {
	let settings = Settings::load(cli.config.as_deref()).with_context(|| match &cli.config {
		Some(path) => format!("failed to load settings from {}", path.display()),
		None => "failed to load settings from the environment".to_string(),
	})?;
	init_tracing(&settings, cli.verbosity);
	tracing::debug!(title = %settings.title, "settings loaded");

	match cli.command {
		Commands::Render { errors } => {
			print!("{}", commands::render(&settings, errors)?);
			Ok(true)
		}
		Commands::Mask { kind, input } => {
			println!("{}", commands::mask(kind, &input));
			Ok(true)
		}
		Commands::Submit(args) => {
			let report = commands::submit(&settings, &args)?;
			if report.errors.is_empty() {
				println!("{} {}", "Submitted:".green(), report.record);
				return Ok(true);
			}
			eprintln!("{}", "Submission rejected".red().bold());
			for (field, message) in report.errors {
				eprintln!("  {}: {}", field.as_str().yellow(), message);
			}
			Ok(false)
		}
	}
}

fn main() {
	let cli = Cli::parse();

	match run(cli) {
		Ok(true) => {}
		Ok(false) => process::exit(1),
		Err(e) => {
			eprintln!("{}: {:#}", "Error".red(), e);
			process::exit(1);
		}
	}
}
