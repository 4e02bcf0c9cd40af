//! Live background configuration as the plugin works with it.

use backdrop_host_api::ThemeFlavor;
use serde::Serialize;

use super::snapshot::SettingsSnapshot;

/// Blur applied when no snapshot provides one, in CSS pixels.
const DEFAULT_BLUR_RADIUS: f64 = 0.0;
/// Neutral contrast multiplier.
const DEFAULT_CONTRAST_FACTOR: f64 = 1.0;

/// Persisted background configuration for the editor surface.
///
/// Exactly one live instance exists per plugin session, owned by the
/// [`SettingsStore`](super::SettingsStore). Image references are opaque
/// text and numeric ranges are UI affordances only; neither is validated
/// or clamped here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundSettings {
	/// Image shown behind the editor while the light theme is active.
	/// Empty means no image.
	pub light_image_ref: String,

	/// Image shown behind the editor while the dark theme is active.
	/// Empty means no image.
	pub dark_image_ref: String,

	/// Backdrop blur in CSS pixels. The settings page offers 0 to 20.
	pub blur_radius: f64,

	/// Contrast multiplier for the text area. The settings page offers
	/// 0.5 to 2.0.
	pub contrast_factor: f64,
}

impl Default for BackgroundSettings {
	fn default() -> Self {
		Self {
			light_image_ref: String::new(),
			dark_image_ref: String::new(),
			blur_radius: DEFAULT_BLUR_RADIUS,
			contrast_factor: DEFAULT_CONTRAST_FACTOR,
		}
	}
}

impl BackgroundSettings {
	/// Merge a possibly partial snapshot over the defaults, field by field.
	///
	/// Fields absent from the snapshot keep their default; present fields
	/// win even when they hold an empty string or an out-of-range number.
	#[must_use]
	pub fn from_snapshot(snapshot: SettingsSnapshot) -> Self {
		let defaults = Self::default();
		Self {
			light_image_ref: snapshot.light_image_ref.unwrap_or(defaults.light_image_ref),
			dark_image_ref: snapshot.dark_image_ref.unwrap_or(defaults.dark_image_ref),
			blur_radius: snapshot.blur_radius.unwrap_or(defaults.blur_radius),
			contrast_factor: snapshot.contrast_factor.unwrap_or(defaults.contrast_factor),
		}
	}

	/// The image reference to paint for the given theme flavor.
	#[must_use]
	pub fn image_ref_for(&self, flavor: ThemeFlavor) -> &str {
		match flavor {
			ThemeFlavor::Light => &self.light_image_ref,
			ThemeFlavor::Dark => &self.dark_image_ref,
		}
	}
}
