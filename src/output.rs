//! @ai:module:intent Format annotation batches for different outputs (text, JSON)
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, format_annotations
//! @ai:module:depends_on annotation, wire
//! @ai:module:stateless true

use crate::annotation::Annotation;
use crate::wire::encode_batch;
use colored::Colorize;

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Format an already-sorted batch of annotations as a string
/// @ai:effects pure
pub fn format_annotations(annotations: &[Annotation], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string(&encode_batch(annotations)).unwrap_or_default()
        }
        OutputFormat::JsonPretty => {
            serde_json::to_string_pretty(&encode_batch(annotations)).unwrap_or_default()
        }
        OutputFormat::Text => format_annotations_text(annotations),
    }
}

/// @ai:intent Format annotations as human-readable text
/// @ai:effects pure
fn format_annotations_text(annotations: &[Annotation]) -> String {
    let mut output = String::new();

    for annotation in annotations {
        output.push_str(&format!("{}", annotation.rule_id().red().bold()));

        if let Some(location) = annotation.file_location() {
            output.push_str(&format!(" {}", location.to_string().dimmed()));
        }

        if !annotation.message().is_empty() {
            output.push_str(&format!(" - {}", annotation.message()));
        }

        if let Some(against) = annotation.against_file_location() {
            output.push_str(&format!(
                " ({} {})",
                "against:".cyan(),
                against.to_string().dimmed()
            ));
        }

        output.push('\n');
    }

    output.push('\n');
    if annotations.is_empty() {
        output.push_str(&format!("{} No failures\n", "OK".green().bold()));
    } else {
        output.push_str(&format!(
            "{} rule failures\n",
            annotations.len().to_string().red().bold()
        ));
    }

    output
}
