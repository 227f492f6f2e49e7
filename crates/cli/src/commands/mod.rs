pub(crate) mod calc;
pub(crate) mod eval;
pub(crate) mod profile;
pub(crate) mod types;

use numen_core::NumerologyResult;

/// Pretty-print a JSON value to stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) {
    let pretty = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("serialization error: {}", e));
    println!("{}", pretty);
}

/// Render one result as indented text lines.
pub(crate) fn format_result(result: &NumerologyResult) -> String {
    let mut lines = Vec::new();

    match result.main_number() {
        Some(n) if result.is_master_number => {
            lines.push(format!("{}: {} (master number)", result.numerology_type, n))
        }
        Some(n) => lines.push(format!("{}: {}", result.numerology_type, n)),
        None => lines.push(format!("{}:", result.numerology_type)),
    }
    lines.push(format!("  {}", result.description));

    if let (Some(year), Some(month), Some(day)) = (
        result.personal_year,
        result.personal_month,
        result.personal_day,
    ) {
        lines.push(format!("  personal year {}, month {}, day {}", year, month, day));
    }
    for (label, periods) in [("pinnacles", &result.pinnacles), ("challenges", &result.challenges)] {
        if let Some(periods) = periods {
            lines.push(format!("  {}:", label));
            for p in periods {
                lines.push(format!("    {:<6} {:>2}  {}", p.period, p.number, p.description));
            }
        }
    }
    if let Some(score) = result.compatibility_score {
        lines.push(format!("  score: {}/100", score));
    }
    if let Some(notes) = &result.compatibility_notes {
        for note in notes {
            lines.push(format!("  - {}", note));
        }
    }

    lines.join("\n")
}
