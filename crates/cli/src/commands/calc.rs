use std::process;

use numen_core::{calculate_numerology, NumerologyInput, NumerologyType, Person};
use time::macros::format_description;
use time::OffsetDateTime;

use super::{format_result, print_json};
use crate::config::Settings;
use crate::{report_error, OutputFormat};

/// Arguments of `numen calc`, as given on the command line.
pub(crate) struct CalcOptions<'a> {
    pub(crate) numerology_type: &'a str,
    pub(crate) name: Option<String>,
    pub(crate) birth_date: Option<String>,
    pub(crate) target_date: Option<String>,
    /// (full name, birth date)
    pub(crate) person_a: (Option<String>, Option<String>),
    pub(crate) person_b: (Option<String>, Option<String>),
}

pub(crate) fn cmd_calc(opts: CalcOptions, settings: &Settings, output: OutputFormat, quiet: bool) {
    let numerology_type: NumerologyType = match opts.numerology_type.parse() {
        Ok(t) => t,
        Err(e) => {
            let msg = format!("error: {} (run `numen types` for the list)", e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let input = match build_input(numerology_type, opts) {
        Ok(i) => i,
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    match calculate_numerology(numerology_type, &input, &settings.locale, &settings.meanings) {
        Ok(result) => {
            if !quiet {
                match output {
                    OutputFormat::Json => print_json(&result),
                    OutputFormat::Text => println!("{}", format_result(&result)),
                }
            }
        }
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    }
}

/// Assemble the input bag. The dispatcher still decides which fields are required.
fn build_input(
    numerology_type: NumerologyType,
    opts: CalcOptions,
) -> Result<NumerologyInput, String> {
    let target_date = match opts.target_date {
        Some(d) => Some(d),
        None if numerology_type == NumerologyType::PersonalCycles => Some(today_utc()?),
        None => None,
    };

    Ok(NumerologyInput {
        full_name: opts.name,
        birth_date: opts.birth_date,
        target_date,
        person_a: person_from_flags("person-a", opts.person_a)?,
        person_b: person_from_flags("person-b", opts.person_b)?,
    })
}

fn person_from_flags(
    prefix: &str,
    flags: (Option<String>, Option<String>),
) -> Result<Option<Person>, String> {
    match flags {
        (Some(name), Some(date)) => Ok(Some(Person::new(name, date))),
        (None, None) => Ok(None),
        _ => Err(format!(
            "error: --{p}-name and --{p}-birth-date must both be provided",
            p = prefix
        )),
    }
}

/// Today's date in UTC as `YYYY-MM-DD`.
pub(crate) fn today_utc() -> Result<String, String> {
    OffsetDateTime::now_utc()
        .date()
        .format(format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("error: could not format today's date: {}", e))
}
