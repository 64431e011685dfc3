//! Terminal and Markdown rendering of correlation matrices.

use crate::chart::format_value;
use hobart_ratios::CorrelationMatrix;

/// Format a correlation matrix as an ASCII table for terminal display.
pub fn correlation_to_ascii(matrix: &CorrelationMatrix, title: &str) -> String {
    let width = matrix
        .columns
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max(8);
    let rule = "-".repeat((width + 1) * (matrix.columns.len() + 1));

    let mut output = String::new();
    output.push_str(&format!("\n{title}\n"));
    output.push_str(&rule);
    output.push('\n');

    output.push_str(&format!("{:<width$}", ""));
    for column in &matrix.columns {
        output.push_str(&format!(" {column:>width$}"));
    }
    output.push('\n');

    for (name, row) in matrix.columns.iter().zip(&matrix.values) {
        output.push_str(&format!("{name:<width$}"));
        for value in row {
            output.push_str(&format!(" {:>width$}", format_value(Some(*value), 2)));
        }
        output.push('\n');
    }

    output.push_str(&rule);
    output.push('\n');
    output
}

/// Format a correlation matrix as a Markdown table.
pub fn correlation_to_markdown(matrix: &CorrelationMatrix, title: &str) -> String {
    let mut output = format!("## {title}\n\n|  |");
    for column in &matrix.columns {
        output.push_str(&format!(" {column} |"));
    }
    output.push_str("\n|---|");
    for _ in &matrix.columns {
        output.push_str("---:|");
    }
    output.push('\n');

    for (name, row) in matrix.columns.iter().zip(&matrix.values) {
        output.push_str(&format!("| **{name}** |"));
        for value in row {
            output.push_str(&format!(" {} |", format_value(Some(*value), 2)));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> CorrelationMatrix {
        CorrelationMatrix {
            columns: vec!["Sales".to_string(), "Operating Profit".to_string()],
            values: vec![vec![1.0, 0.8123], vec![0.8123, 1.0]],
        }
    }

    #[test]
    fn test_correlation_to_ascii() {
        let text = correlation_to_ascii(&matrix(), "Correlation Of Financial Metrics");
        assert!(text.contains("Correlation Of Financial Metrics"));
        assert!(text.contains("Operating Profit"));
        assert!(text.contains("0.81"));
        assert!(text.contains("1.00"));
    }

    #[test]
    fn test_correlation_to_markdown() {
        let markdown = correlation_to_markdown(&matrix(), "Correlation");
        assert!(markdown.contains("|  | Sales | Operating Profit |"));
        assert!(markdown.contains("| **Sales** | 1.00 | 0.81 |"));
    }

    #[test]
    fn test_nan_cells() {
        let matrix = CorrelationMatrix {
            columns: vec!["EPS".to_string()],
            values: vec![vec![f64::NAN]],
        };
        assert!(correlation_to_ascii(&matrix, "x").contains("NaN"));
    }
}
