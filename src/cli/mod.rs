//! Command-line surface for the standalone preview binary.

mod args;
mod output;

pub(crate) use args::{OutputFormat, parse_cli, parse_set_arg};
pub(crate) use output::{print_css_plain, print_fields_json, print_fields_plain, print_render_json};
