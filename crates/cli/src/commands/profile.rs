use std::process;

use numen_core::{profile, Person};

use super::{format_result, print_json};
use crate::config::Settings;
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_profile(
    name: &str,
    birth_date: &str,
    settings: &Settings,
    output: OutputFormat,
    quiet: bool,
) {
    let person = Person::new(name, birth_date);
    match profile(&person, &settings.meanings, &settings.locale) {
        Ok(p) => {
            if quiet {
                return;
            }
            match output {
                OutputFormat::Json => print_json(&p),
                OutputFormat::Text => {
                    println!("{} ({})", p.full_name, p.birth_date);
                    for r in p.results() {
                        println!("{}", format_result(r));
                    }
                }
            }
        }
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    }
}
