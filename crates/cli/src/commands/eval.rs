use std::path::Path;
use std::process;

use numen_core::{evaluate, Meanings, NumerologyRequest, NumerologyResult};
use serde_json::Value;

use super::{format_result, print_json};
use crate::config::Settings;
use crate::{report_error, OutputFormat};

/// One request, or an array of them, as read from a JSON document.
#[derive(Debug)]
pub(crate) enum Batch {
    One(NumerologyRequest),
    Many(Vec<NumerologyRequest>),
}

impl Batch {
    /// Decode a request object or an array of request objects.
    pub(crate) fn from_json(value: Value) -> Result<Batch, String> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    serde_json::from_value(item)
                        .map_err(|e| format!("invalid request at index {}: {}", i, e))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Batch::Many),
            other => serde_json::from_value(other)
                .map(Batch::One)
                .map_err(|e| format!("invalid request: {}", e)),
        }
    }

    /// Evaluate every request in order, stopping at the first failure.
    pub(crate) fn evaluate(
        &self,
        meanings: &Meanings,
        locale: &str,
    ) -> Result<Vec<NumerologyResult>, String> {
        match self {
            Batch::One(req) => evaluate(req, meanings, locale)
                .map(|r| vec![r])
                .map_err(|e| e.to_string()),
            Batch::Many(reqs) => reqs
                .iter()
                .enumerate()
                .map(|(i, req)| {
                    evaluate(req, meanings, locale).map_err(|e| format!("request {}: {}", i, e))
                })
                .collect(),
        }
    }

    /// Shape the results the way the input was shaped.
    pub(crate) fn results_json(&self, results: Vec<NumerologyResult>) -> Value {
        match self {
            Batch::One(_) => results
                .into_iter()
                .next()
                .and_then(|r| serde_json::to_value(r).ok())
                .unwrap_or(Value::Null),
            Batch::Many(_) => serde_json::to_value(results).unwrap_or(Value::Null),
        }
    }
}

pub(crate) fn cmd_eval(path: &Path, settings: &Settings, output: OutputFormat, quiet: bool) {
    let content = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(_) => {
            let msg = format!("error: requests file not found: {}", path.display());
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let value: Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            let msg = format!("error: invalid JSON in {}: {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let batch = match Batch::from_json(value) {
        Ok(b) => b,
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    };

    match batch.evaluate(&settings.meanings, &settings.locale) {
        Ok(results) => {
            if quiet {
                return;
            }
            match output {
                OutputFormat::Json => print_json(&batch.results_json(results)),
                OutputFormat::Text => {
                    let blocks: Vec<String> = results.iter().map(format_result).collect();
                    println!("{}", blocks.join("\n\n"));
                }
            }
        }
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    }
}
