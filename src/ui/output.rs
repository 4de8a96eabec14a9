//! Output formatting for the progress report.
//!
//! Every function here returns the text to print; printing is left to `main`.

use serde::Serialize;
use std::io::IsTerminal;

/// JSON shape of `--json` output.
#[derive(Debug, Serialize)]
pub struct ProgressReport {
    pub percentage: f64,
}

impl ProgressReport {
    /// Report with the percentage rounded to two decimals.
    pub fn new(percentage: f64) -> Self {
        ProgressReport {
            percentage: (percentage * 100.0).round() / 100.0,
        }
    }
}

/// Formats the bare percentage for `--percentage`.
///
/// # Arguments
/// * `percentage` - Elapsed share of the year
///
/// # Returns
/// The percentage with two decimals, e.g. `49.86`
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.2}", percentage)
}

/// Formats the `--json` report.
///
/// # Arguments
/// * `percentage` - Elapsed share of the year
///
/// # Returns
/// A single-line JSON object, e.g. `{"percentage":49.86}`
pub fn format_json(percentage: f64) -> String {
    // A struct with one f64 field always serializes; non-finite values become null.
    serde_json::to_string(&ProgressReport::new(percentage))
        .expect("ProgressReport serialization is infallible")
}

/// Formats the default labeled line with its bar.
///
/// # Arguments
/// * `percentage` - Elapsed share of the year
/// * `bar` - Rendered progress bar
///
/// # Returns
/// `Year Progress: <percentage>% <bar>`
pub fn format_progress_line(percentage: f64, bar: &str) -> String {
    format!("Year Progress: {:.2}% {}", percentage, bar)
}

/// Decides whether the bar should carry escape sequences.
///
/// `--no-color` wins, then `--force-color`, then `NO_COLOR`; otherwise colors
/// are only used when stdout is a terminal.
///
/// # Arguments
/// * `force_color` - `--force-color` was given
/// * `no_color` - `--no-color` was given
///
/// # Returns
/// `true` if the bar should be colored
pub fn resolve_color_setting(force_color: bool, no_color: bool) -> bool {
    color_enabled(
        force_color,
        no_color,
        std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty()),
        std::io::stdout().is_terminal(),
    )
}

fn color_enabled(force_color: bool, no_color: bool, no_color_env: bool, is_tty: bool) -> bool {
    if no_color {
        return false;
    }

    if force_color {
        return true;
    }

    !no_color_env && is_tty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_has_two_decimals() {
        assert_eq!(format_percentage(0.0), "0.00");
        assert_eq!(format_percentage(49.8634), "49.86");
        assert_eq!(format_percentage(99.999), "100.00");
    }

    #[test]
    fn json_report_is_rounded() {
        assert_eq!(format_json(49.8634), r#"{"percentage":49.86}"#);
        assert_eq!(format_json(0.0), r#"{"percentage":0.0}"#);
    }

    #[test]
    fn json_report_parses_back() {
        let json = format_json(12.3456);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["percentage"].as_f64(), Some(12.35));
    }

    #[test]
    fn json_report_handles_non_finite_values() {
        assert_eq!(format_json(f64::NAN), r#"{"percentage":null}"#);
        assert_eq!(format_json(f64::INFINITY), r#"{"percentage":null}"#);
    }

    #[test]
    fn progress_line_embeds_bar() {
        assert_eq!(
            format_progress_line(50.0, "[██░░]"),
            "Year Progress: 50.00% [██░░]"
        );
    }

    #[test]
    fn color_setting_precedence() {
        // (force, no_color, NO_COLOR env, tty) -> enabled
        let cases = [
            ((false, false, false, true), true),
            ((false, false, false, false), false),
            ((false, false, true, true), false),
            ((true, false, true, false), true),
            ((false, true, false, true), false),
            ((true, true, false, true), false),
        ];

        for ((force, no_color, env, tty), want) in cases {
            assert_eq!(
                color_enabled(force, no_color, env, tty),
                want,
                "force={force} no_color={no_color} env={env} tty={tty}"
            );
        }
    }
}
