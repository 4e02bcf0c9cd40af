//! Wire form of the persisted settings object.

use serde::Deserialize;

/// Snapshot as read from the host store: every field optional so that
/// partial objects written by earlier versions, or trimmed by hand, merge
/// cleanly over the defaults. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSnapshot {
	pub light_image_ref: Option<String>,
	pub dark_image_ref: Option<String>,
	pub blur_radius: Option<f64>,
	pub contrast_factor: Option<f64>,
}
