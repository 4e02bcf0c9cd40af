//! Pure rendering of settings into an editor-surface stylesheet.

mod stylesheet;

pub use stylesheet::{EDITOR_SCROLLER_SELECTOR, EDITOR_SURFACE_SELECTOR, render_stylesheet};
