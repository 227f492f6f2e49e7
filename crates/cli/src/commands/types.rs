use numen_core::NumerologyType;

use super::print_json;
use crate::OutputFormat;

/// The nine types with their required input fields, as JSON.
pub(crate) fn types_json() -> serde_json::Value {
    NumerologyType::ALL
        .iter()
        .map(|t| {
            serde_json::json!({
                "type": t.as_str(),
                "requiredFields": t.required_fields(),
            })
        })
        .collect()
}

pub(crate) fn cmd_types(output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Json => print_json(&types_json()),
        OutputFormat::Text => {
            for t in NumerologyType::ALL {
                println!("{:<22} {}", t.as_str(), t.required_fields().join(", "));
            }
        }
    }
}
