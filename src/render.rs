//! Chart rendering into an xlsx workbook.

use crate::errors::{self, Result};
use crate::output::Output;
use rust_xlsxwriter::{
    Chart, ChartLegendPosition, ChartLine, ChartLineDashType, ChartMarker, ChartMarkerType,
    ChartType, Format, Workbook,
};

const SHEET: &str = "Curve";
const TITLE: &str = "Probability of Shared Birthday as a Function of Group Size (n)";
const X_AXIS: &str = "Number of People (n)";
const Y_AXIS: &str = "Probability P(n)";

/// Render the computed curve as a workbook with an embedded chart and
/// write it to `filename`.
pub fn render(output: &Output, filename: &str) -> Result<()> {
    let mut workbook = build_workbook(output)?;
    workbook
        .save(filename)
        .map_err(|e| errors::render_error(format!("cannot write {filename}: {e}")))?;
    Ok(())
}

/// Build the workbook: the raw curve and reference-line data on one
/// worksheet, with a line-and-marker chart of P(n) vs n next to it.
pub fn build_workbook(output: &Output) -> Result<Workbook> {
    if output.points.is_empty() {
        return Err(errors::render_error_ref("nothing to plot"));
    }
    let threshold_label = format!("{:.0}% Probability", 100.0 * output.threshold);
    let tipping_label = format!("n = {}", output.tipping_point);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET)?;

    let bold = Format::new().set_bold();
    worksheet.write_string_with_format(0, 0, "n", &bold)?;
    worksheet.write_string_with_format(0, 1, "P(n)", &bold)?;
    worksheet.write_string_with_format(0, 3, threshold_label.as_str(), &bold)?;
    worksheet.write_string_with_format(0, 6, tipping_label.as_str(), &bold)?;
    for (i, point) in output.points.iter().enumerate() {
        let row = 1 + i as u32;
        worksheet.write_number(row, 0, point.n as f64)?;
        worksheet.write_number(row, 1, point.probability)?;
    }
    // A horizontal segment across the full range at the threshold, and a
    // vertical segment from 0 to 1 at the tipping point.
    let last = output.points.len() as u32;
    worksheet.write_number(1, 3, output.range.0 as f64)?;
    worksheet.write_number(2, 3, output.range.1 as f64)?;
    worksheet.write_number(1, 4, output.threshold)?;
    worksheet.write_number(2, 4, output.threshold)?;
    worksheet.write_number(1, 6, output.tipping_point as f64)?;
    worksheet.write_number(2, 6, output.tipping_point as f64)?;
    worksheet.write_number(1, 7, 0.0)?;
    worksheet.write_number(2, 7, 1.0)?;
    worksheet.set_column_width(3, 16)?;
    worksheet.set_column_width(6, 10)?;

    let mut chart = Chart::new(ChartType::ScatterStraightWithMarkers);
    chart
        .add_series()
        .set_categories((SHEET, 1, 0, last, 0))
        .set_values((SHEET, 1, 1, last, 1))
        .set_name("P(n)")
        .set_format(ChartLine::new().set_color("#0000FF"))
        .set_marker(
            ChartMarker::new()
                .set_type(ChartMarkerType::Circle)
                .set_size(3),
        );
    chart
        .add_series()
        .set_categories((SHEET, 1, 3, 2, 3))
        .set_values((SHEET, 1, 4, 2, 4))
        .set_name(threshold_label.as_str())
        .set_format(
            ChartLine::new()
                .set_color("#FF0000")
                .set_dash_type(ChartLineDashType::Dash),
        )
        .set_marker(ChartMarker::new().set_none());
    chart
        .add_series()
        .set_categories((SHEET, 1, 6, 2, 6))
        .set_values((SHEET, 1, 7, 2, 7))
        .set_name(tipping_label.as_str())
        .set_format(
            ChartLine::new()
                .set_color("#008000")
                .set_dash_type(ChartLineDashType::Dash),
        )
        .set_marker(ChartMarker::new().set_none());
    chart.title().set_name(TITLE);
    chart.x_axis().set_name(X_AXIS);
    chart.x_axis().set_major_gridlines(true);
    chart.y_axis().set_name(Y_AXIS);
    chart.y_axis().set_major_gridlines(true);
    chart.y_axis().set_min(0.0);
    chart.y_axis().set_max(1.0);
    chart.legend().set_position(ChartLegendPosition::Bottom);
    chart.set_width(960);
    chart.set_height(576);
    worksheet.insert_chart(1, 9, &chart)?;

    Ok(workbook)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::driver::{self, DriverArgs};

    #[test]
    fn build_workbook_basic() {
        let output = driver::calc(&DriverArgs::default()).unwrap();
        let mut workbook = build_workbook(&output).unwrap();
        let buf = workbook.save_to_buffer().unwrap();
        assert!(!buf.is_empty());
    }

    #[test]
    fn build_workbook_rejects_empty_curve() {
        let output = Output {
            days: 365,
            range: (1, 100),
            threshold: 0.5,
            tipping_point: 23,
            first_above_threshold: None,
            points: vec![],
        };
        assert!(build_workbook(&output).is_err());
    }
}
