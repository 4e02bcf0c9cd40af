/// Host notifications a plugin can subscribe to.
///
/// Events carry no payload; they mean "host state changed, re-check it".
/// Handlers must therefore be safe to run when the state turns out to be
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The active theme, or the host stylesheet driving it, changed.
    ThemeChanged,
}

/// Registration surface offered to a plugin while it starts.
///
/// Subscriptions determine which [`HostEvent`]s the host later delivers to
/// the plugin's event hook. Registering the same event twice is harmless.
pub trait EventRegistrar {
    /// Ask the host to deliver `event` notifications to this plugin.
    fn subscribe(&mut self, event: HostEvent);
}

/// Plain record of the events a plugin subscribed to.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionSet {
    events: Vec<HostEvent>,
}

impl SubscriptionSet {
    /// Create an empty subscription set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `event` has been subscribed to.
    #[must_use]
    pub fn contains(&self, event: HostEvent) -> bool {
        self.events.contains(&event)
    }

    /// Whether no subscriptions were registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop all registrations, as a host does when unloading a plugin.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventRegistrar for SubscriptionSet {
    fn subscribe(&mut self, event: HostEvent) {
        if !self.contains(event) {
            self.events.push(event);
        }
    }
}
