use crate::config::Config;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;

/// Machine-readable report for an arithmetic operation, used by the
/// `--format json` output path.
#[derive(Serialize)]
pub struct OperationReport {
    pub operation: String,
    pub operands: Vec<f64>,
    pub result: f64,
}

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

/// Render a numeric result with at most `precision` fractional digits,
/// trimming trailing zeros so `5.0` prints as `5`.
pub fn format_number(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format!("{:.*}", precision, value);
    let trimmed = if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered.as_str()
    };

    // Rounding can leave a bare negative zero behind.
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Print an operation result as a plain number line.
pub fn print_result(report: &OperationReport, config: &Config) {
    println!("{}", format_number(report.result, config.general.precision));
}

/// Print an operation result as pretty JSON.
pub fn print_result_json(report: &OperationReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialize result to JSON")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_trims_trailing_zeros() {
        assert_eq!(format_number(5.0, 6), "5");
        assert_eq!(format_number(2.5, 6), "2.5");
        assert_eq!(format_number(-1.25, 6), "-1.25");
    }

    #[test]
    fn test_format_number_respects_precision() {
        assert_eq!(format_number(10.0 / 3.0, 6), "3.333333");
        assert_eq!(format_number(10.0 / 3.0, 2), "3.33");
        assert_eq!(format_number(2.7, 0), "3");
    }

    #[test]
    fn test_format_number_negative_zero() {
        assert_eq!(format_number(-0.0, 6), "0");
        assert_eq!(format_number(-0.0001, 2), "0");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::INFINITY, 6), "inf");
        assert_eq!(format_number(f64::NAN, 6), "NaN");
    }

    #[test]
    fn test_styles_wrap_text_unchanged() {
        colored::control::set_override(false);

        assert_eq!(OutputStyle::title("Tally Configuration").to_string(), "Tally Configuration");
        assert_eq!(OutputStyle::header("General:").to_string(), "General:");
        assert_eq!(OutputStyle::label("Precision").to_string(), "Precision");
        assert_eq!(OutputStyle::success("done").to_string(), "done");
        assert_eq!(OutputStyle::error("failed").to_string(), "failed");
        assert_eq!(OutputStyle::warning("careful").to_string(), "careful");
        assert_eq!(OutputStyle::muted("aside").to_string(), "aside");

        colored::control::unset_override();
    }

    #[test]
    fn test_operation_report_json_shape() {
        let report = OperationReport {
            operation: "divide".to_string(),
            operands: vec![10.0, 2.0],
            result: 5.0,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["operation"], "divide");
        assert_eq!(json["operands"][1], 2.0);
        assert_eq!(json["result"], 5.0);
    }
}
