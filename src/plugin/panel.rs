//! Declarative settings page: the four controls and their change routing.
//!
//! Field ids double as the snapshot's wire keys, so a change report, the
//! persisted object and the settings model all speak the same names.

use backdrop_host_api::{FieldChange, FieldControl, FieldValue, PanelField, PluginError};

use crate::settings::BackgroundSettings;

/// Field id of the light theme image reference.
pub const FIELD_LIGHT_IMAGE: &str = "lightImageRef";
/// Field id of the dark theme image reference.
pub const FIELD_DARK_IMAGE: &str = "darkImageRef";
/// Field id of the blur radius slider.
pub const FIELD_BLUR: &str = "blurRadius";
/// Field id of the contrast slider.
pub const FIELD_CONTRAST: &str = "contrastFactor";

const IMAGE_PLACEHOLDER: &str = "https://…";
const IMAGE_DESCRIPTION: &str = "Public HTTPS link ending in .jpg/.png/.gif";

/// The settings page as presented to the host, current values filled in.
#[must_use]
pub fn fields(settings: &BackgroundSettings) -> Vec<PanelField> {
	vec![
		PanelField {
			id: FIELD_LIGHT_IMAGE,
			name: "Light-theme image URL",
			description: IMAGE_DESCRIPTION,
			control: FieldControl::Text {
				placeholder: IMAGE_PLACEHOLDER,
			},
			value: FieldValue::Text(settings.light_image_ref.clone()),
		},
		PanelField {
			id: FIELD_DARK_IMAGE,
			name: "Dark-theme image URL",
			description: IMAGE_DESCRIPTION,
			control: FieldControl::Text {
				placeholder: IMAGE_PLACEHOLDER,
			},
			value: FieldValue::Text(settings.dark_image_ref.clone()),
		},
		PanelField {
			id: FIELD_BLUR,
			name: "Background blur (px)",
			description: "How fuzzy the wallpaper is behind your text",
			control: FieldControl::Slider {
				min: 0.0,
				max: 20.0,
				step: 1.0,
			},
			value: FieldValue::Number(settings.blur_radius),
		},
		PanelField {
			id: FIELD_CONTRAST,
			name: "Text-area contrast",
			description: "Makes your text area stand out against the background",
			control: FieldControl::Slider {
				min: 0.5,
				max: 2.0,
				step: 0.1,
			},
			value: FieldValue::Number(settings.contrast_factor),
		},
	]
}

/// Apply one reported edit to the live settings value.
///
/// Only the field id and the value kind are checked, both against the
/// declared catalog; the value itself is taken as-is, including empty
/// strings and numbers outside the slider bounds.
pub fn apply_change(
	settings: &mut BackgroundSettings,
	change: &FieldChange,
) -> Result<(), PluginError> {
	let Some(field) = fields(settings)
		.into_iter()
		.find(|field| field.id == change.id)
	else {
		return Err(PluginError::UnknownField {
			id: change.id.clone(),
		});
	};

	match (change.id.as_str(), &change.value) {
		(FIELD_LIGHT_IMAGE, FieldValue::Text(value)) => settings.light_image_ref = value.clone(),
		(FIELD_DARK_IMAGE, FieldValue::Text(value)) => settings.dark_image_ref = value.clone(),
		(FIELD_BLUR, FieldValue::Number(value)) => settings.blur_radius = *value,
		(FIELD_CONTRAST, FieldValue::Number(value)) => settings.contrast_factor = *value,
		_ => {
			return Err(PluginError::ValueKind {
				id: change.id.clone(),
				expected: field.control.value_kind(),
			});
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn page_declares_the_four_fields_in_order() {
		let fields = fields(&BackgroundSettings::default());
		let ids: Vec<&str> = fields.iter().map(|field| field.id).collect();

		assert_eq!(
			ids,
			vec![FIELD_LIGHT_IMAGE, FIELD_DARK_IMAGE, FIELD_BLUR, FIELD_CONTRAST]
		);
	}

	#[test]
	fn fields_carry_current_values() {
		let settings = BackgroundSettings {
			dark_image_ref: "dark.png".into(),
			blur_radius: 6.0,
			..BackgroundSettings::default()
		};

		let fields = fields(&settings);
		assert_eq!(fields[1].value, FieldValue::Text("dark.png".into()));
		assert_eq!(fields[2].value, FieldValue::Number(6.0));
	}

	#[test]
	fn each_field_routes_to_its_setting() {
		let mut settings = BackgroundSettings::default();

		apply_change(&mut settings, &FieldChange::text(FIELD_LIGHT_IMAGE, "l.png"))
			.expect("light image");
		apply_change(&mut settings, &FieldChange::text(FIELD_DARK_IMAGE, "d.png"))
			.expect("dark image");
		apply_change(&mut settings, &FieldChange::number(FIELD_BLUR, 10.0)).expect("blur");
		apply_change(&mut settings, &FieldChange::number(FIELD_CONTRAST, 1.8)).expect("contrast");

		assert_eq!(settings.light_image_ref, "l.png");
		assert_eq!(settings.dark_image_ref, "d.png");
		assert_eq!(settings.blur_radius, 10.0);
		assert_eq!(settings.contrast_factor, 1.8);
	}

	#[test]
	fn values_outside_the_slider_bounds_are_accepted() {
		let mut settings = BackgroundSettings::default();

		apply_change(&mut settings, &FieldChange::number(FIELD_BLUR, -5.0)).expect("blur");
		apply_change(&mut settings, &FieldChange::number(FIELD_CONTRAST, 9.0)).expect("contrast");

		assert_eq!(settings.blur_radius, -5.0);
		assert_eq!(settings.contrast_factor, 9.0);
	}

	#[test]
	fn unknown_fields_are_rejected() {
		let mut settings = BackgroundSettings::default();
		let err = apply_change(&mut settings, &FieldChange::number("fontSize", 14.0))
			.expect_err("unknown field");

		assert!(matches!(err, PluginError::UnknownField { id } if id == "fontSize"));
	}

	#[test]
	fn mismatched_value_kinds_are_rejected() {
		let mut settings = BackgroundSettings::default();

		let err = apply_change(&mut settings, &FieldChange::number(FIELD_LIGHT_IMAGE, 1.0))
			.expect_err("number for text field");
		assert!(matches!(err, PluginError::ValueKind { expected: "text", .. }));

		let err = apply_change(&mut settings, &FieldChange::text(FIELD_BLUR, "soft"))
			.expect_err("text for slider field");
		assert!(matches!(err, PluginError::ValueKind { expected: "number", .. }));
		assert_eq!(settings, BackgroundSettings::default());
	}

	#[test]
	fn kind_errors_name_the_declared_control_kind() {
		let mut settings = BackgroundSettings::default();

		for field in fields(&BackgroundSettings::default()) {
			let wrong = match field.control {
				FieldControl::Text { .. } => FieldChange::number(field.id, 1.0),
				FieldControl::Slider { .. } => FieldChange::text(field.id, "oops"),
			};

			let err = apply_change(&mut settings, &wrong).expect_err("mismatched kind");
			assert!(matches!(
				err,
				PluginError::ValueKind { expected, .. } if expected == field.control.value_kind()
			));
		}
	}
}
