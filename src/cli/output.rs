//! Printing of rendered stylesheets and field listings.

use anyhow::Result;
use backdrop::BackgroundSettings;
use backdrop_host_api::{FieldControl, FieldValue, PanelField, ThemeFlavor};
use serde_json::json;

/// Print the rendered stylesheet exactly as it would be installed.
pub(crate) fn print_css_plain(css: &str) {
	print!("{css}");
}

/// Format the render result as a JSON string.
pub(crate) fn format_render_json(
	flavor: ThemeFlavor,
	settings: &BackgroundSettings,
	css: &str,
) -> Result<String> {
	let payload = json!({
		"theme": flavor.to_string(),
		"settings": settings,
		"css": css,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the render result.
pub(crate) fn print_render_json(
	flavor: ThemeFlavor,
	settings: &BackgroundSettings,
	css: &str,
) -> Result<()> {
	println!("{}", format_render_json(flavor, settings, css)?);
	Ok(())
}

/// Print one line per settings field: id, current value, control.
pub(crate) fn print_fields_plain(fields: &[PanelField]) {
	for field in fields {
		println!(
			"{} = {} ({})",
			field.id,
			format_value(&field.value),
			describe_control(&field.control)
		);
	}
}

/// Format the field listing as a JSON string.
pub(crate) fn format_fields_json(fields: &[PanelField]) -> Result<String> {
	let entries: Vec<serde_json::Value> = fields
		.iter()
		.map(|field| {
			json!({
				"id": field.id,
				"name": field.name,
				"description": field.description,
				"control": describe_control_json(&field.control),
				"value": match &field.value {
					FieldValue::Text(text) => json!(text),
					FieldValue::Number(number) => json!(number),
				},
			})
		})
		.collect();

	Ok(serde_json::to_string_pretty(&entries)?)
}

/// Print the JSON representation of the field listing.
pub(crate) fn print_fields_json(fields: &[PanelField]) -> Result<()> {
	println!("{}", format_fields_json(fields)?);
	Ok(())
}

fn format_value(value: &FieldValue) -> String {
	match value {
		FieldValue::Text(text) => format!("\"{text}\""),
		FieldValue::Number(number) => number.to_string(),
	}
}

fn describe_control(control: &FieldControl) -> String {
	match control {
		FieldControl::Text { .. } => "text".to_string(),
		FieldControl::Slider { min, max, step } => format!("slider {min}..{max} step {step}"),
	}
}

fn describe_control_json(control: &FieldControl) -> serde_json::Value {
	match control {
		FieldControl::Text { placeholder } => json!({
			"type": "text",
			"placeholder": placeholder,
		}),
		FieldControl::Slider { min, max, step } => json!({
			"type": "slider",
			"min": min,
			"max": max,
			"step": step,
		}),
	}
}

#[cfg(test)]
mod tests {
	use backdrop::plugin::panel;
	use serde_json::Value;

	use super::*;

	#[test]
	fn render_json_carries_theme_settings_and_css() {
		let settings = BackgroundSettings {
			dark_image_ref: "dark.png".into(),
			..BackgroundSettings::default()
		};

		let text = format_render_json(ThemeFlavor::Dark, &settings, ".cm-editor {}\n")
			.expect("format");
		let value: Value = serde_json::from_str(&text).expect("parse");

		assert_eq!(value["theme"], "dark");
		assert_eq!(value["settings"]["darkImageRef"], "dark.png");
		assert_eq!(value["settings"]["blurRadius"], 0.0);
		assert_eq!(value["css"], ".cm-editor {}\n");
	}

	#[test]
	fn fields_json_describes_every_control() {
		let fields = panel::fields(&BackgroundSettings::default());

		let text = format_fields_json(&fields).expect("format");
		let value: Value = serde_json::from_str(&text).expect("parse");
		let entries = value.as_array().expect("array");

		assert_eq!(entries.len(), 4);
		assert_eq!(entries[0]["id"], "lightImageRef");
		assert_eq!(entries[0]["control"]["type"], "text");
		assert_eq!(entries[2]["control"]["type"], "slider");
		assert_eq!(entries[2]["control"]["max"], 20.0);
		assert_eq!(entries[2]["value"], 0.0);
	}
}
