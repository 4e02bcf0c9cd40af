use std::fmt;

/// The two visual modes a host can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFlavor {
    Light,
    Dark,
}

impl ThemeFlavor {
    /// Map a host's boolean dark-mode flag onto a flavor.
    #[must_use]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    /// Whether this flavor is the dark mode.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemeFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// Host service answering which theme flavor is active right now.
///
/// Plugins query the probe at render time and never cache the answer across
/// renders; the host owns the current value and may flip it at any point
/// between hook invocations.
pub trait ThemeProbe {
    /// The flavor currently presented by the host.
    fn active_flavor(&self) -> ThemeFlavor;
}

/// A fixed flavor is itself a valid probe, useful for one-shot rendering.
impl ThemeProbe for ThemeFlavor {
    fn active_flavor(&self) -> ThemeFlavor {
        *self
    }
}

/// Mutable theme holder for hosts that switch between light and dark at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    flavor: ThemeFlavor,
}

impl ThemeState {
    /// Create a theme state presenting the given flavor.
    #[must_use]
    pub fn new(flavor: ThemeFlavor) -> Self {
        Self { flavor }
    }

    /// Switch the active flavor.
    pub fn set(&mut self, flavor: ThemeFlavor) {
        self.flavor = flavor;
    }

    /// Flip between light and dark.
    pub fn toggle(&mut self) {
        self.flavor = match self.flavor {
            ThemeFlavor::Light => ThemeFlavor::Dark,
            ThemeFlavor::Dark => ThemeFlavor::Light,
        };
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeFlavor::Light)
    }
}

impl ThemeProbe for ThemeState {
    fn active_flavor(&self) -> ThemeFlavor {
        self.flavor
    }
}
