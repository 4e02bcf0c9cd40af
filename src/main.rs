mod cli;

use anyhow::{Context, Result};
use backdrop::{BackdropPlugin, DiskSnapshotStore, logging};
use backdrop_host_api::{HostSession, StyleElement, StyleSink, ThemeProbe, ThemeState};
use cli::{OutputFormat, parse_cli};

fn main() -> Result<()> {
	logging::init();
	let cli = parse_cli();

	let storage = match &cli.data_dir {
		Some(dir) => DiskSnapshotStore::in_dir(dir),
		None => DiskSnapshotStore::at_default_location()?,
	};
	let snapshot_path = storage.path().to_path_buf();

	let mut session = HostSession::new(
		BackdropPlugin::new(),
		storage,
		ThemeState::new(cli.theme.flavor()),
		StyleElement::new(),
	);
	session
		.start()
		.with_context(|| format!("loading settings from {}", snapshot_path.display()))?;

	if cli.list_fields {
		let fields = session.fields();
		match cli.output {
			OutputFormat::Plain => cli::print_fields_plain(&fields),
			OutputFormat::Json => cli::print_fields_json(&fields)?,
		}
		session.stop();
		return Ok(());
	}

	for arg in &cli.set {
		let change = cli::parse_set_arg(arg, &session.fields())?;
		session
			.edit(change)
			.with_context(|| format!("updating settings in {}", snapshot_path.display()))?;
	}

	let css = session
		.styles()
		.installed()
		.map(|style| style.as_css().to_string())
		.unwrap_or_default();

	match cli.output {
		OutputFormat::Plain => cli::print_css_plain(&css),
		OutputFormat::Json => cli::print_render_json(
			session.theme().active_flavor(),
			session.plugin().settings(),
			&css,
		)?,
	}

	session.stop();
	Ok(())
}
