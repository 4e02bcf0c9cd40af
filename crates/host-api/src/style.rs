use std::fmt;

/// A rendered stylesheet ready to hand to the host.
///
/// Content is opaque to the host: it installs the text verbatim and never
/// parses or rewrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDescription {
    css: String,
}

impl StyleDescription {
    /// Wrap rendered CSS text.
    #[must_use]
    pub fn new(css: impl Into<String>) -> Self {
        Self { css: css.into() }
    }

    /// The stylesheet text.
    #[must_use]
    pub fn as_css(&self) -> &str {
        &self.css
    }
}

impl fmt::Display for StyleDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

/// Host service owning the live style element for the editor surface.
pub trait StyleSink {
    /// Install `style` as the active stylesheet, replacing prior content.
    ///
    /// Installing a description identical to the current one must be
    /// observationally a no-op for the host surface.
    fn install(&mut self, style: &StyleDescription);

    /// Remove the installed stylesheet entirely.
    fn clear(&mut self);

    /// The currently installed stylesheet, if any.
    fn installed(&self) -> Option<&StyleDescription>;
}

/// In-process stand-in for a host style element.
///
/// Tracks a revision counter that moves only when the visible content
/// actually changes, which is how tests observe that re-installing an
/// identical stylesheet caused no churn.
#[derive(Debug, Clone, Default)]
pub struct StyleElement {
    content: Option<StyleDescription>,
    revision: u64,
}

impl StyleElement {
    /// Create an empty style element.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the visible content has changed since creation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl StyleSink for StyleElement {
    fn install(&mut self, style: &StyleDescription) {
        if self.content.as_ref() == Some(style) {
            return;
        }
        self.content = Some(style.clone());
        self.revision += 1;
    }

    fn clear(&mut self) {
        if self.content.take().is_some() {
            self.revision += 1;
        }
    }

    fn installed(&self) -> Option<&StyleDescription> {
        self.content.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_replaces_content() {
        let mut element = StyleElement::new();
        element.install(&StyleDescription::new("a { color: red; }"));
        element.install(&StyleDescription::new("a { color: blue; }"));

        let installed = element.installed().expect("style installed");
        assert_eq!(installed.as_css(), "a { color: blue; }");
        assert_eq!(element.revision(), 2);
    }

    #[test]
    fn reinstalling_identical_content_is_a_noop() {
        let mut element = StyleElement::new();
        let style = StyleDescription::new("a { color: red; }");

        element.install(&style);
        element.install(&style);

        assert_eq!(element.revision(), 1);
    }

    #[test]
    fn clear_removes_content() {
        let mut element = StyleElement::new();
        element.install(&StyleDescription::new("a {}"));
        element.clear();

        assert!(element.installed().is_none());
        assert_eq!(element.revision(), 2);
    }

    #[test]
    fn clearing_an_empty_element_does_not_bump_revision() {
        let mut element = StyleElement::new();
        element.clear();
        assert_eq!(element.revision(), 0);
    }
}
