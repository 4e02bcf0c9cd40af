//! Stylesheet construction for the editor background.

use backdrop_host_api::{StyleDescription, ThemeFlavor};

use crate::settings::BackgroundSettings;

/// Root editor surface the background image is painted on.
pub const EDITOR_SURFACE_SELECTOR: &str = ".cm-editor";
/// Scrollable text region layered above the background.
pub const EDITOR_SCROLLER_SELECTOR: &str = ".cm-editor .cm-scroller";

/// Render the two-rule stylesheet for the given settings and theme flavor.
///
/// Pure string construction with no side effects: the image reference is
/// interpolated as opaque text (an empty reference still yields a valid
/// rule with `url("")`), numbers are emitted exactly as stored, and equal
/// inputs produce byte-identical output.
#[must_use]
pub fn render_stylesheet(settings: &BackgroundSettings, flavor: ThemeFlavor) -> StyleDescription {
	let image = settings.image_ref_for(flavor);
	let blur = settings.blur_radius;
	let contrast = settings.contrast_factor;

	let mut css = format!(
		"{EDITOR_SURFACE_SELECTOR} {{\n\
		 \tbackground: url(\"{image}\") no-repeat center center fixed !important;\n\
		 \tbackground-size: cover !important;\n\
		 }}\n"
	);
	css.push_str(&format!(
		"{EDITOR_SCROLLER_SELECTOR} {{\n\
		 \tbackdrop-filter: blur({blur}px) contrast({contrast});\n\
		 }}\n"
	));

	StyleDescription::new(css)
}
