//! Time-series charts of table columns.
//!
//! A [`Chart`] is a plain snapshot of one or more columns of a
//! [`CombinedTable`] against its fiscal-year index. Renderers are stateless and
//! never touch the table.

use crate::error::OutputError;
use chrono::{Datelike, NaiveDate};
use hobart_data::CombinedTable;
use hobart_ratios::{Ratio, RatioUnit};
use serde::{Deserialize, Serialize};

/// Color used for columns without a registered color.
pub const DEFAULT_COLOR: &str = "steelblue";

/// Chart color registered for a ratio or metric column.
pub fn default_color(column: &str) -> &'static str {
    match column {
        "debt_to_equity_ratio" | "operating_profit_margin" | "Sales" => "royalblue",
        "return_on_equity" => "turquoise",
        "return_on_capital_employed" => "purple",
        "debtor_days" => "#006400",
        "inventory_turnover" => "teal",
        "net_profit_margin" | "EPS" => "#B233FF",
        "interest_expense" => "#33FFA8",
        "Operating Profit" => "green",
        "Depreciation" => "#33FF57",
        _ => DEFAULT_COLOR,
    }
}

/// Presentation settings shared by every chart of one analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Company name appended to chart titles
    pub company: Option<String>,
    /// Overrides the registered series color
    pub color: Option<String>,
}

impl ChartStyle {
    /// Style for charts of one company.
    pub fn for_company(company: impl Into<String>) -> Self {
        Self {
            company: Some(company.into()),
            color: None,
        }
    }

    fn title(&self, label: &str) -> String {
        match &self.company {
            Some(company) if !company.is_empty() => format!("{label}: {company}"),
            _ => label.to_string(),
        }
    }

    fn color(&self, column: &str) -> String {
        self.color
            .clone()
            .unwrap_or_else(|| default_color(column).to_string())
    }
}

/// One observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Fiscal year-end key
    pub date: NaiveDate,
    /// Value; `None` is a gap
    pub value: Option<f64>,
}

/// One line on a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Source column
    pub column: String,
    /// Legend label
    pub label: String,
    /// Line color
    pub color: String,
    /// Observations in ascending date order
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    fn from_table(
        table: &CombinedTable,
        column: &str,
        label: &str,
        style: &ChartStyle,
    ) -> Result<Self, OutputError> {
        let points = table
            .series(column)?
            .into_iter()
            .map(|(date, value)| ChartPoint { date, value })
            .collect();
        Ok(Self {
            column: column.to_string(),
            label: label.to_string(),
            color: style.color(column),
            points,
        })
    }

    /// Largest absolute finite value, if any.
    pub fn max_abs(&self) -> Option<f64> {
        self.points
            .iter()
            .filter_map(|p| p.value)
            .filter(|v| v.is_finite())
            .map(f64::abs)
            .reduce(f64::max)
    }
}

/// A line chart with the fiscal year on the x-axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Chart title
    pub title: String,
    /// X-axis label
    pub x_label: String,
    /// Y-axis label
    pub y_label: String,
    /// Unit of the plotted values, when they are a ratio
    pub unit: Option<RatioUnit>,
    /// Plotted series
    pub series: Vec<ChartSeries>,
}

impl Chart {
    /// Chart of a ratio column previously attached to `table`.
    ///
    /// # Errors
    ///
    /// Fails if the ratio has not been computed on this table.
    pub fn for_ratio(
        table: &CombinedTable,
        ratio: &dyn Ratio,
        style: &ChartStyle,
    ) -> Result<Self, OutputError> {
        let series = ChartSeries::from_table(table, ratio.name(), ratio.label(), style)?;
        Ok(Self {
            title: style.title(ratio.label()),
            x_label: "Year".to_string(),
            y_label: ratio.label().to_string(),
            unit: Some(ratio.unit()),
            series: vec![series],
        })
    }

    /// Chart of one or more raw columns, labelled by column name.
    pub fn for_columns(
        table: &CombinedTable,
        title: &str,
        columns: &[&str],
        style: &ChartStyle,
    ) -> Result<Self, OutputError> {
        let series = columns
            .iter()
            .map(|column| ChartSeries::from_table(table, column, column, style))
            .collect::<Result<Vec<_>, _>>()?;
        let y_label = if columns.len() == 1 {
            columns[0].to_string()
        } else {
            "Value".to_string()
        };
        Ok(Self {
            title: style.title(title),
            x_label: "Year".to_string(),
            y_label,
            unit: None,
            series,
        })
    }

    /// Every date present in any series, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.date))
            .collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }

    /// Whether there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }
}

/// Renders a chart to text.
pub trait ChartRenderer {
    /// Render `chart` to a string.
    fn render(&self, chart: &Chart) -> String;
}

/// Format a value for display. Gaps render as `-`, non-finite values verbatim.
pub fn format_value(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.precision$}"))
}

fn value_at(series: &ChartSeries, date: NaiveDate) -> Option<f64> {
    series
        .points
        .iter()
        .find(|p| p.date == date)
        .and_then(|p| p.value)
}

/// Horizontal bar chart for terminals, one block per series.
#[derive(Debug, Clone, Copy)]
pub struct TextChartRenderer {
    /// Width of the longest bar in characters
    pub width: usize,
    /// Decimal places shown
    pub precision: usize,
}

impl Default for TextChartRenderer {
    fn default() -> Self {
        Self {
            width: 40,
            precision: 2,
        }
    }
}

impl TextChartRenderer {
    fn bar(&self, value: f64, max_abs: f64) -> String {
        if !value.is_finite() || value == 0.0 || max_abs <= 0.0 {
            return String::new();
        }
        let len = ((value.abs() / max_abs) * self.width as f64).round() as usize;
        let glyph = if value < 0.0 { '░' } else { '█' };
        std::iter::repeat_n(glyph, len.max(1)).collect()
    }
}

impl ChartRenderer for TextChartRenderer {
    fn render(&self, chart: &Chart) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", chart.title));
        output.push_str(&"=".repeat(self.width + 30));
        output.push('\n');

        if chart.is_empty() {
            output.push_str("  (no fiscal years to plot)\n");
            return output;
        }

        let suffix = chart.unit.map_or("", |u| u.suffix());
        for series in &chart.series {
            output.push_str(&format!("\n{} [{}]\n", series.label, series.color));
            output.push_str(&"-".repeat(self.width + 30));
            output.push('\n');

            let max_abs = series.max_abs().unwrap_or(0.0);
            for point in &series.points {
                let value = format_value(point.value, self.precision);
                let bar = point.value.map_or_else(String::new, |v| self.bar(v, max_abs));
                output.push_str(&format!(
                    "  {:<6} {:>14}{:<6} {}\n",
                    point.date.year(),
                    value,
                    if point.value.is_some() { suffix } else { "" },
                    bar
                ));
            }
        }

        output.push_str(&"=".repeat(self.width + 30));
        output.push('\n');
        output
    }
}

/// Markdown table with one column per series.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownChartRenderer {
    /// Decimal places shown
    pub precision: usize,
}

impl Default for MarkdownChartRenderer {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl ChartRenderer for MarkdownChartRenderer {
    fn render(&self, chart: &Chart) -> String {
        let mut output = String::new();

        output.push_str(&format!("## {}\n\n", chart.title));
        output.push_str(&format!("| {} |", chart.x_label));
        for series in &chart.series {
            output.push_str(&format!(" {} |", series.label));
        }
        output.push('\n');
        output.push_str("|------|");
        for _ in &chart.series {
            output.push_str("------:|");
        }
        output.push('\n');

        for date in chart.dates() {
            output.push_str(&format!("| {} |", date.year()));
            for series in &chart.series {
                output.push_str(&format!(
                    " {} |",
                    format_value(value_at(series, date), self.precision)
                ));
            }
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hobart_data::StatementTable;
    use hobart_ratios::{compute_ratio, efficiency::InventoryTurnover};
    use rstest::rstest;

    fn date(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 3, 1).unwrap()
    }

    fn table() -> CombinedTable {
        let statement = StatementTable::from_columns(
            vec![date(2014), date(2015), date(2016)],
            vec![
                ("Sales".to_string(), vec![100.0, 200.0, 300.0]),
                ("Inventory".to_string(), vec![50.0, 40.0, 0.0]),
                ("EPS".to_string(), vec![-1.0, 2.0, 4.0]),
            ],
        )
        .unwrap();
        let mut table = CombinedTable::from(statement);
        compute_ratio(&mut table, &InventoryTurnover).unwrap();
        table
    }

    #[test]
    fn test_chart_for_ratio() {
        let chart = Chart::for_ratio(
            &table(),
            &InventoryTurnover,
            &ChartStyle::for_company("Reliance Industries"),
        )
        .unwrap();

        assert_eq!(chart.title, "Inventory Turnover: Reliance Industries");
        assert_eq!(chart.unit, Some(RatioUnit::Multiple));
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].color, "teal");

        let values: Vec<_> = chart.series[0].points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![Some(2.0), Some(5.0), Some(f64::INFINITY)]);
        assert_eq!(chart.series[0].max_abs(), Some(5.0));
    }

    #[test]
    fn test_chart_for_uncomputed_ratio_fails() {
        let chart = Chart::for_ratio(
            &table(),
            &hobart_ratios::leverage::DebtToEquity,
            &ChartStyle::default(),
        );
        assert!(matches!(chart, Err(OutputError::Data(_))));
    }

    #[test]
    fn test_chart_for_columns() {
        let style = ChartStyle {
            company: None,
            color: Some("black".to_string()),
        };
        let chart = Chart::for_columns(&table(), "Sales Vs EPS", &["Sales", "EPS"], &style).unwrap();

        assert_eq!(chart.title, "Sales Vs EPS");
        assert_eq!(chart.y_label, "Value");
        assert_eq!(chart.series.len(), 2);
        assert!(chart.series.iter().all(|s| s.color == "black"));
        assert_eq!(chart.dates(), vec![date(2014), date(2015), date(2016)]);
    }

    #[rstest]
    #[case(None, "-")]
    #[case(Some(1.23456), "1.23")]
    #[case(Some(f64::INFINITY), "inf")]
    #[case(Some(f64::NEG_INFINITY), "-inf")]
    #[case(Some(f64::NAN), "NaN")]
    fn test_format_value(#[case] value: Option<f64>, #[case] expected: &str) {
        assert_eq!(format_value(value, 2), expected);
    }

    #[rstest]
    #[case("debt_to_equity_ratio", "royalblue")]
    #[case("debtor_days", "#006400")]
    #[case("Depreciation", "#33FF57")]
    #[case("Reserves", DEFAULT_COLOR)]
    fn test_default_color(#[case] column: &str, #[case] color: &str) {
        assert_eq!(default_color(column), color);
    }

    #[test]
    fn test_text_renderer() {
        let chart = Chart::for_ratio(&table(), &InventoryTurnover, &ChartStyle::default()).unwrap();
        let text = TextChartRenderer::default().render(&chart);

        assert!(text.contains("Inventory Turnover"));
        assert!(text.contains("2014"));
        assert!(text.contains("5.00"));
        assert!(text.contains("inf"));
        // Largest finite value gets the full-width bar
        assert!(text.contains(&"█".repeat(40)));
    }

    #[test]
    fn test_text_renderer_negative_and_empty() {
        let chart = Chart::for_columns(&table(), "EPS", &["EPS"], &ChartStyle::default()).unwrap();
        let text = TextChartRenderer::default().render(&chart);
        assert!(text.contains('░'));

        let empty = Chart {
            title: "Empty".to_string(),
            x_label: "Year".to_string(),
            y_label: "Value".to_string(),
            unit: None,
            series: vec![],
        };
        assert!(TextChartRenderer::default().render(&empty).contains("no fiscal years"));
    }

    #[test]
    fn test_text_renderer_zero_has_no_bar() {
        let renderer = TextChartRenderer::default();
        assert_eq!(renderer.bar(0.0, 5.0), "");
        assert_eq!(renderer.bar(0.01, 5.0), "█");
        assert_eq!(renderer.bar(-5.0, 5.0), "░".repeat(40));
    }

    #[test]
    fn test_markdown_renderer() {
        let chart = Chart::for_columns(&table(), "Sales", &["Sales", "Inventory"], &ChartStyle::default())
            .unwrap();
        let markdown = MarkdownChartRenderer::default().render(&chart);

        assert!(markdown.starts_with("## Sales\n"));
        assert!(markdown.contains("| Year | Sales | Inventory |"));
        assert!(markdown.contains("| 2016 | 300.00 | 0.00 |"));
    }
}
