use crate::events::EventRegistrar;
use crate::storage::SnapshotStore;
use crate::style::StyleSink;
use crate::theme::ThemeProbe;

/// Host services lent to a plugin hook for the duration of one call.
///
/// Bundling the services in a context struct keeps the hook signatures on
/// [`EditorPlugin`](crate::EditorPlugin) stable when the host grows new
/// services, and makes explicit that a plugin only ever borrows them: the
/// host owns every service and hands them out call by call.
pub struct PluginContext<'a> {
    storage: &'a mut dyn SnapshotStore,
    theme: &'a dyn ThemeProbe,
    styles: &'a mut dyn StyleSink,
    events: &'a mut dyn EventRegistrar,
}

impl<'a> PluginContext<'a> {
    /// Assemble a context from the host's live services.
    #[must_use]
    pub fn new(
        storage: &'a mut dyn SnapshotStore,
        theme: &'a dyn ThemeProbe,
        styles: &'a mut dyn StyleSink,
        events: &'a mut dyn EventRegistrar,
    ) -> Self {
        Self {
            storage,
            theme,
            styles,
            events,
        }
    }

    /// Persistence service holding this plugin's snapshot.
    pub fn storage(&mut self) -> &mut (dyn SnapshotStore + 'a) {
        &mut *self.storage
    }

    /// Theme signal, to be read at render time.
    #[must_use]
    pub fn theme(&self) -> &'a dyn ThemeProbe {
        self.theme
    }

    /// Style element for the editor surface.
    pub fn styles(&mut self) -> &mut (dyn StyleSink + 'a) {
        &mut *self.styles
    }

    /// Event subscription surface; registrations matter during startup.
    pub fn events(&mut self) -> &mut (dyn EventRegistrar + 'a) {
        &mut *self.events
    }
}
