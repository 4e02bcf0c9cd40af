use crate::context::PluginContext;
use crate::error::PluginError;
use crate::events::{HostEvent, SubscriptionSet};
use crate::panel::{FieldChange, PanelField};
use crate::plugin::EditorPlugin;
use crate::storage::SnapshotStore;
use crate::style::StyleSink;
use crate::theme::ThemeProbe;

/// Single-threaded host session driving one plugin through its lifecycle.
///
/// This is the reference implementation of the dispatch contract embedding
/// hosts are expected to follow: every hook runs synchronously on the
/// caller's thread, storage writes complete before the triggering hook
/// returns, and notifications are delivered only for events the plugin
/// subscribed to while starting.
pub struct HostSession<P, S, T, U>
where
    P: EditorPlugin,
    S: SnapshotStore,
    T: ThemeProbe,
    U: StyleSink,
{
    plugin: P,
    storage: S,
    theme: T,
    styles: U,
    subscriptions: SubscriptionSet,
    started: bool,
}

impl<P, S, T, U> HostSession<P, S, T, U>
where
    P: EditorPlugin,
    S: SnapshotStore,
    T: ThemeProbe,
    U: StyleSink,
{
    /// Assemble a session from a plugin and the host services backing it.
    #[must_use]
    pub fn new(plugin: P, storage: S, theme: T, styles: U) -> Self {
        Self {
            plugin,
            storage,
            theme,
            styles,
            subscriptions: SubscriptionSet::new(),
            started: false,
        }
    }

    /// Activate the plugin by running its startup hook once.
    pub fn start(&mut self) -> Result<(), PluginError> {
        let ctx = PluginContext::new(
            &mut self.storage,
            &self.theme,
            &mut self.styles,
            &mut self.subscriptions,
        );
        self.plugin.on_start(ctx)?;
        self.started = true;
        Ok(())
    }

    /// Deliver `event` to the plugin if it subscribed to it.
    ///
    /// Returns whether the plugin's event hook actually ran.
    pub fn notify(&mut self, event: HostEvent) -> Result<bool, PluginError> {
        if !self.subscriptions.contains(event) {
            return Ok(false);
        }

        let ctx = PluginContext::new(
            &mut self.storage,
            &self.theme,
            &mut self.styles,
            &mut self.subscriptions,
        );
        self.plugin.on_event(event, ctx)?;
        Ok(true)
    }

    /// Route one settings edit to the plugin's settings page.
    pub fn edit(&mut self, change: FieldChange) -> Result<(), PluginError> {
        let Self {
            plugin,
            storage,
            theme,
            styles,
            subscriptions,
            started: _,
        } = self;

        let Some(tab) = plugin.settings_tab() else {
            return Err(PluginError::NoSettingsTab);
        };

        let ctx = PluginContext::new(&mut *storage, &*theme, &mut *styles, &mut *subscriptions);
        tab.update(change, ctx)
    }

    /// The settings page fields as currently presented, if a page exists.
    pub fn fields(&mut self) -> Vec<PanelField> {
        self.plugin
            .settings_tab()
            .map(|tab| tab.fields())
            .unwrap_or_default()
    }

    /// Deactivate the plugin and release its host registrations.
    pub fn stop(&mut self) {
        if !self.started {
            return;
        }

        let ctx = PluginContext::new(
            &mut self.storage,
            &self.theme,
            &mut self.styles,
            &mut self.subscriptions,
        );
        self.plugin.on_stop(ctx);
        self.subscriptions.clear();
        self.started = false;
    }

    /// The hosted plugin.
    #[must_use]
    pub fn plugin(&self) -> &P {
        &self.plugin
    }

    /// The session's snapshot store.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The session's theme signal.
    #[must_use]
    pub fn theme(&self) -> &T {
        &self.theme
    }

    /// Mutable theme signal, for hosts that flip flavors mid-session.
    pub fn theme_mut(&mut self) -> &mut T {
        &mut self.theme
    }

    /// The style element backing the editor surface.
    #[must_use]
    pub fn styles(&self) -> &U {
        &self.styles
    }

    /// Events the plugin subscribed to during startup.
    #[must_use]
    pub fn subscriptions(&self) -> &SubscriptionSet {
        &self.subscriptions
    }

    /// Whether the plugin is currently active.
    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptors::PluginDescriptor;
    use crate::storage::MemorySnapshotStore;
    use crate::style::{StyleDescription, StyleElement};
    use crate::theme::{ThemeFlavor, ThemeState};

    static TEST_DESCRIPTOR: PluginDescriptor = PluginDescriptor {
        id: "recorder",
        name: "Recorder",
        description: "Records lifecycle calls for session tests.",
    };

    #[derive(Default)]
    struct RecordingPlugin {
        events: Vec<HostEvent>,
        stopped: bool,
    }

    impl EditorPlugin for RecordingPlugin {
        fn descriptor(&self) -> &'static PluginDescriptor {
            &TEST_DESCRIPTOR
        }

        fn on_start(&mut self, mut ctx: PluginContext<'_>) -> Result<(), PluginError> {
            ctx.styles().install(&StyleDescription::new("started"));
            ctx.events().subscribe(HostEvent::ThemeChanged);
            Ok(())
        }

        fn on_stop(&mut self, mut ctx: PluginContext<'_>) {
            ctx.styles().clear();
            self.stopped = true;
        }

        fn on_event(
            &mut self,
            event: HostEvent,
            _ctx: PluginContext<'_>,
        ) -> Result<(), PluginError> {
            self.events.push(event);
            Ok(())
        }
    }

    fn session() -> HostSession<RecordingPlugin, MemorySnapshotStore, ThemeState, StyleElement> {
        HostSession::new(
            RecordingPlugin::default(),
            MemorySnapshotStore::new(),
            ThemeState::new(ThemeFlavor::Light),
            StyleElement::new(),
        )
    }

    #[test]
    fn start_runs_the_startup_hook() {
        let mut session = session();
        session.start().expect("start");

        assert!(session.started());
        assert!(session.styles().installed().is_some());
        assert!(session.subscriptions().contains(HostEvent::ThemeChanged));
    }

    #[test]
    fn notifications_reach_only_subscribed_plugins() {
        let mut session = session();
        assert!(!session.notify(HostEvent::ThemeChanged).expect("notify"));

        session.start().expect("start");
        assert!(session.notify(HostEvent::ThemeChanged).expect("notify"));
        assert_eq!(session.plugin().events, vec![HostEvent::ThemeChanged]);
    }

    #[test]
    fn stop_releases_subscriptions_and_styles() {
        let mut session = session();
        session.start().expect("start");
        session.stop();

        assert!(!session.started());
        assert!(session.styles().installed().is_none());
        assert!(session.plugin().stopped);
        assert!(!session.notify(HostEvent::ThemeChanged).expect("notify"));
    }

    #[test]
    fn edits_need_a_settings_page() {
        let mut session = session();
        session.start().expect("start");

        let err = session
            .edit(FieldChange::text("anything", "value"))
            .expect_err("plugin has no settings page");
        assert!(matches!(err, PluginError::NoSettingsTab));
        assert!(session.fields().is_empty());
    }
}
