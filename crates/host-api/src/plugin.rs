use crate::context::PluginContext;
use crate::descriptors::PluginDescriptor;
use crate::error::PluginError;
use crate::events::HostEvent;
use crate::panel::{FieldChange, PanelField};

/// A plugin the host starts, notifies, and stops over one session.
///
/// Hooks run synchronously on the host's dispatch thread: a hook finishes
/// before the host processes the next event, so implementations never see
/// two hooks in flight at once.
pub trait EditorPlugin {
    /// Static descriptor advertising this plugin to the host.
    fn descriptor(&self) -> &'static PluginDescriptor;

    /// Called once when the host activates the plugin.
    ///
    /// Subscriptions registered here decide which notifications `on_event`
    /// receives for the rest of the session.
    fn on_start(&mut self, ctx: PluginContext<'_>) -> Result<(), PluginError>;

    /// Called once when the host deactivates the plugin.
    ///
    /// Must release anything installed on the host, in particular any style
    /// on the editor surface.
    fn on_stop(&mut self, ctx: PluginContext<'_>);

    /// Deliver a host notification the plugin subscribed to.
    fn on_event(&mut self, event: HostEvent, ctx: PluginContext<'_>) -> Result<(), PluginError> {
        let _ = (event, ctx);
        Ok(())
    }

    /// The settings page contributed by this plugin, if any.
    fn settings_tab(&mut self) -> Option<&mut dyn SettingsTab> {
        None
    }
}

/// A settings page rendered inside the host's preferences UI.
///
/// The host presents the declared fields and reports every committed edit
/// through [`update`](SettingsTab::update); the implementation owns
/// persisting the result and refreshing whatever depends on it.
pub trait SettingsTab {
    /// Heading shown above the page.
    fn title(&self) -> &'static str;

    /// The controls to present, carrying their current values.
    fn fields(&self) -> Vec<PanelField>;

    /// Apply one edited field.
    fn update(&mut self, change: FieldChange, ctx: PluginContext<'_>) -> Result<(), PluginError>;
}
