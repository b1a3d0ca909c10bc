//! Subcommand implementations

use anyhow::Context;
use clap::{Args, ValueEnum};
use spidr_conf::Settings;
use spidr_forms::InputMask;
use spidr_forms::interest::{COST_GUESS, EMAIL, FIRST_NAME, LAST_NAME, PHONE, SPIDR_PIN};
use spidr_pages::{InterestFormComponent, SubmissionSink, SubmitOutcome, TracingSink, render_form};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MaskKind {
	Phone,
	Pin,
}

impl From<MaskKind> for InputMask {
	fn from(kind: MaskKind) -> Self {
		match kind {
			MaskKind::Phone => InputMask::Phone,
			MaskKind::Pin => InputMask::Pin,
		}
	}
}

#[derive(Debug, Clone, Default, Args)]
pub struct SubmitArgs {
	#[arg(long, default_value = "")]
	pub first_name: String,

	#[arg(long, default_value = "")]
	pub last_name: String,

	/// Digits are masked as they would be when typed
	#[arg(long, default_value = "")]
	pub phone: String,

	#[arg(long, default_value = "")]
	pub email: String,

	#[arg(long, default_value = "", allow_hyphen_values = true)]
	pub cost_guess: String,

	/// Digits are masked as they would be when typed
	#[arg(long, default_value = "")]
	pub pin: String,
}

impl SubmitArgs {
	fn entries(&self) -> [(&'static str, &str); 6] {
		[
			(FIRST_NAME, self.first_name.as_str()),
			(LAST_NAME, self.last_name.as_str()),
			(PHONE, self.phone.as_str()),
			(EMAIL, self.email.as_str()),
			(COST_GUESS, self.cost_guess.as_str()),
			(SPIDR_PIN, self.pin.as_str()),
		]
	}
}

/// What a submit attempt produced
#[derive(Debug)]
pub struct SubmitReport {
	/// JSON of the submitted record; empty when rejected
	pub record: String,
	/// Field errors in form order
	pub errors: Vec<(String, String)>,
}

pub fn render(settings: &Settings, with_errors: bool) -> anyhow::Result<String> {
	let component = InterestFormComponent::from_settings(settings);
	if with_errors {
		component
			.handle_submit()
			.context("failed to validate empty form")?;
	}
	Ok(render_form(&component, settings))
}

pub fn mask(kind: MaskKind, input: &str) -> String {
	InputMask::from(kind).apply(input)
}

pub fn submit(settings: &Settings, args: &SubmitArgs) -> anyhow::Result<SubmitReport> {
	let sink = TracingSink::new(settings.logging.channel.clone());
	submit_to(settings, args, sink)
}

pub fn submit_to(
	settings: &Settings,
	args: &SubmitArgs,
	sink: impl SubmissionSink + 'static,
) -> anyhow::Result<SubmitReport> {
	let component =
		InterestFormComponent::new(sink).with_pin_visible(settings.pin_visible_by_default);
	for (name, raw) in args.entries() {
		component
			.handle_change(name, raw)
			.with_context(|| format!("failed to enter {name}"))?;
	}

	match component.handle_submit()? {
		SubmitOutcome::Submitted(submission) => Ok(SubmitReport {
			record: serde_json::to_string(&submission)?,
			errors: Vec::new(),
		}),
		SubmitOutcome::Rejected(errors) => Ok(SubmitReport {
			record: String::new(),
			errors: errors
				.iter()
				.map(|(field, message)| (field.to_string(), message.to_string()))
				.collect(),
		}),
	}
}
