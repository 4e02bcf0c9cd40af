/// Static metadata a plugin advertises to the host.
///
/// Hosts key storage, the plugin list, and the settings page on the `id`,
/// so it must stay stable across plugin versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginDescriptor {
    /// Stable identifier used for storage and registration.
    pub id: &'static str,

    /// Display name shown in the host's plugin and settings lists.
    pub name: &'static str,

    /// One-line summary shown alongside the name.
    pub description: &'static str,
}
