//! The backdrop plugin: lifecycle wiring over the host contracts.
//!
//! Startup loads settings and installs the rendered stylesheet, theme
//! change notifications re-render it, and settings edits persist before
//! re-rendering. Stopping removes the stylesheet so the editor surface is
//! left exactly as the host created it.

pub mod panel;

use backdrop_host_api::{
	EditorPlugin, FieldChange, HostEvent, PanelField, PluginContext, PluginDescriptor, PluginError,
	SettingsTab,
};
use tracing::{debug, info};

use crate::settings::{BackgroundSettings, SettingsStore};
use crate::style::render_stylesheet;

/// Descriptor advertised to the host.
pub static BACKDROP_DESCRIPTOR: PluginDescriptor = PluginDescriptor {
	id: "backdrop",
	name: "Backdrop",
	description: "Per-theme editor background images with blur and contrast control.",
};

/// Editor background plugin.
///
/// Holds the one live [`SettingsStore`] for the session; every other piece
/// of state (style element, theme, persistence) belongs to the host and is
/// only borrowed during hooks.
pub struct BackdropPlugin {
	store: SettingsStore,
}

impl BackdropPlugin {
	/// Plugin with default settings, ready to be started by a host.
	#[must_use]
	pub fn new() -> Self {
		Self {
			store: SettingsStore::new(),
		}
	}

	/// The live settings value.
	#[must_use]
	pub fn settings(&self) -> &BackgroundSettings {
		self.store.current()
	}

	/// Render for the probed theme and install on the editor surface.
	fn apply_current(&self, ctx: &mut PluginContext<'_>) {
		let flavor = ctx.theme().active_flavor();
		let style = render_stylesheet(self.store.current(), flavor);
		debug!(%flavor, "stylesheet rendered");
		ctx.styles().install(&style);
	}
}

impl Default for BackdropPlugin {
	fn default() -> Self {
		Self::new()
	}
}

impl EditorPlugin for BackdropPlugin {
	fn descriptor(&self) -> &'static PluginDescriptor {
		&BACKDROP_DESCRIPTOR
	}

	fn on_start(&mut self, mut ctx: PluginContext<'_>) -> Result<(), PluginError> {
		self.store = SettingsStore::load(ctx.storage())?;
		self.apply_current(&mut ctx);
		ctx.events().subscribe(HostEvent::ThemeChanged);
		info!("backdrop started");
		Ok(())
	}

	fn on_stop(&mut self, mut ctx: PluginContext<'_>) {
		ctx.styles().clear();
		info!("backdrop stopped");
	}

	fn on_event(
		&mut self,
		event: HostEvent,
		mut ctx: PluginContext<'_>,
	) -> Result<(), PluginError> {
		match event {
			HostEvent::ThemeChanged => {
				self.apply_current(&mut ctx);
				Ok(())
			}
		}
	}

	fn settings_tab(&mut self) -> Option<&mut dyn SettingsTab> {
		Some(self)
	}
}

impl SettingsTab for BackdropPlugin {
	fn title(&self) -> &'static str {
		"Editor-Background Settings"
	}

	fn fields(&self) -> Vec<PanelField> {
		panel::fields(self.store.current())
	}

	fn update(
		&mut self,
		change: FieldChange,
		mut ctx: PluginContext<'_>,
	) -> Result<(), PluginError> {
		panel::apply_change(self.store.current_mut(), &change)?;
		self.store.save(ctx.storage())?;
		self.apply_current(&mut ctx);
		debug!(field = %change.id, "setting updated");
		Ok(())
	}
}
