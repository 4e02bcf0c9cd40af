//! Argument definitions and `--set` parsing.

use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use backdrop_host_api::{FieldChange, FieldControl, FieldValue, PanelField, ThemeFlavor};
use clap::{ArgAction, Parser, ValueEnum};

/// Command-line arguments accepted by the `backdrop` binary.
#[derive(Parser, Debug)]
#[command(
	name = "backdrop",
	version,
	about = "Render and edit editor background settings outside a host"
)]
pub(crate) struct CliArgs {
	#[arg(
		long,
		value_enum,
		default_value_t = ThemeArg::Light,
		help = "Theme flavor to render for (default: light)"
	)]
	pub(crate) theme: ThemeArg,
	#[arg(
		long,
		value_name = "DIR",
		env = "BACKDROP_DATA_DIR",
		help = "Directory holding the settings snapshot (default: platform data dir)"
	)]
	pub(crate) data_dir: Option<PathBuf>,
	#[arg(
		long = "set",
		value_name = "FIELD=VALUE",
		action = ArgAction::Append,
		help = "Edit a settings field before rendering (repeatable)"
	)]
	pub(crate) set: Vec<String>,
	#[arg(long, help = "List the settings page fields and exit")]
	pub(crate) list_fields: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}

/// Theme flavors selectable from the command line.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub(crate) enum ThemeArg {
	Light,
	Dark,
}

impl ThemeArg {
	/// The host flavor this argument selects.
	pub(crate) fn flavor(self) -> ThemeFlavor {
		match self {
			ThemeArg::Light => ThemeFlavor::Light,
			ThemeArg::Dark => ThemeFlavor::Dark,
		}
	}
}

/// Output formats supported by the preview binary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Parse command-line arguments from the process environment.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

/// Turn one `FIELD=VALUE` argument into a change report.
///
/// The field catalog decides whether the raw value is taken as text or
/// parsed as a number.
pub(crate) fn parse_set_arg(arg: &str, fields: &[PanelField]) -> Result<FieldChange> {
	let Some((id, raw)) = arg.split_once('=') else {
		bail!("invalid --set '{arg}': expected FIELD=VALUE");
	};

	let Some(field) = fields.iter().find(|field| field.id == id) else {
		let known = fields
			.iter()
			.map(|field| field.id)
			.collect::<Vec<_>>()
			.join(", ");
		bail!("unknown settings field '{id}' (known fields: {known})");
	};

	let value = match field.control {
		FieldControl::Text { .. } => FieldValue::Text(raw.to_string()),
		FieldControl::Slider { .. } => {
			let number: f64 = raw
				.parse()
				.map_err(|_| anyhow!("field '{id}' expects a number, got '{raw}'"))?;
			FieldValue::Number(number)
		}
	};

	Ok(FieldChange {
		id: id.to_string(),
		value,
	})
}

#[cfg(test)]
mod tests {
	use backdrop::{BackgroundSettings, plugin::panel};

	use super::*;

	#[test]
	fn defaults_parse() {
		let args = CliArgs::try_parse_from(["backdrop"]).expect("parse");

		assert!(matches!(args.theme, ThemeArg::Light));
		assert_eq!(args.output, OutputFormat::Plain);
		assert!(args.set.is_empty());
		assert!(!args.list_fields);
	}

	#[test]
	fn set_arguments_accumulate_in_order() {
		let args = CliArgs::try_parse_from([
			"backdrop",
			"--set",
			"blurRadius=4",
			"--set",
			"contrastFactor=1.2",
			"--theme",
			"dark",
		])
		.expect("parse");

		assert_eq!(args.set, vec!["blurRadius=4", "contrastFactor=1.2"]);
		assert!(matches!(args.theme, ThemeArg::Dark));
	}

	#[test]
	fn set_values_follow_the_field_control() {
		let fields = panel::fields(&BackgroundSettings::default());

		let change = parse_set_arg("blurRadius=4.5", &fields).expect("number field");
		assert_eq!(change.id, panel::FIELD_BLUR);
		assert_eq!(change.value, FieldValue::Number(4.5));

		let change = parse_set_arg("lightImageRef=a.png", &fields).expect("text field");
		assert_eq!(change.value, FieldValue::Text("a.png".into()));
	}

	#[test]
	fn malformed_set_arguments_are_rejected() {
		let fields = panel::fields(&BackgroundSettings::default());

		assert!(parse_set_arg("blurRadius", &fields).is_err());
		assert!(parse_set_arg("fontSize=12", &fields).is_err());
		assert!(parse_set_arg("blurRadius=soft", &fields).is_err());
	}
}
