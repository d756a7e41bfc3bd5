//! Plotters rendering for the single-series line chart.
//!
//! [`generate_svg`] draws the chart into a string through `SVGBackend`; the
//! `LineChart` component injects that markup and lays a hover overlay on top
//! using the [`HoverColumn`]s returned alongside it.
//!
//! The x axis is categorical: year `i` sits at `x = i`, with half a slot of
//! room on either side. The y axis always includes zero.

use crate::theme::{hex_to_rgb, CHART_COLOR, FILL_ALPHA, LABEL_COLOR};
use azh_data::{Series, YearKey};
use azh_utils::fiscal::describe_fiscal_year;
use azh_utils::format::format_count;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;

/// Pixel size of the rendered chart.
pub const CHART_SIZE: (u32, u32) = (960, 360);

pub const X_AXIS_TITLE: &str = "Year";
pub const Y_AXIS_TITLE: &str = "Housing Units";

const FONT: &str = "sans-serif";

/// Space above the highest point, as a share of the value span, for the data labels.
const LABEL_HEADROOM: f64 = 0.15;

/// Content of the hover tooltip for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTooltip {
    /// Year label, e.g. "2015".
    pub title: String,
    /// Fiscal span, e.g. "July 1, 2014 - June 30, 2015". Empty for non-year labels.
    pub span: String,
    /// Series label and formatted value, e.g. "Maricopa: 28,850".
    pub body: String,
}

/// Hover target covering the full plot height of one year slot, in chart pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverColumn {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    /// Pixel position of the data point in this column.
    pub anchor: (i32, i32),
    pub tooltip: ChartTooltip,
}

pub fn tooltip_for(label: &str, year: &YearKey, value: f64) -> ChartTooltip {
    ChartTooltip {
        title: year.to_string(),
        span: year
            .fiscal_year()
            .and_then(describe_fiscal_year)
            .unwrap_or_default(),
        body: format!("{}: {}", label, format_count(value)),
    }
}

/// One tooltip per year, in year order.
pub fn tooltips(series: &Series, year_keys: &[YearKey]) -> Vec<ChartTooltip> {
    series
        .points(year_keys)
        .map(|(year, value)| tooltip_for(&series.label, year, value))
        .collect()
}

/// Y domain: always spans zero, with headroom above for the data labels.
pub fn value_range(values: &[f64]) -> Range<f64> {
    let lo = values.iter().copied().fold(0.0_f64, f64::min);
    let hi = values.iter().copied().fold(0.0_f64, f64::max);
    let span = hi - lo;
    if span <= 0.0 {
        return 0.0..1.0;
    }
    let bottom = if lo < 0.0 { lo - span * 0.05 } else { 0.0 };
    bottom..hi + span * LABEL_HEADROOM
}

/// Tick label for x position `x`; only whole slots carry a year.
pub fn year_label(year_keys: &[YearKey], x: f64) -> String {
    let slot = x.round();
    if (x - slot).abs() > 1e-6 || slot < 0.0 {
        return String::new();
    }
    year_keys
        .get(slot as usize)
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn rgb(hex: &str) -> RGBColor {
    hex_to_rgb(hex)
        .map(|(r, g, b)| RGBColor(r, g, b))
        .unwrap_or(BLACK)
}

/// Draw `series` against `year_keys` into `svg_inner_string` and return
/// the hover columns in year order.
pub fn generate_svg<'a>(
    series: &Series,
    year_keys: &[YearKey],
    size: (u32, u32),
    svg_inner_string: &'a mut String,
) -> DrawResult<Vec<HoverColumn>, SVGBackend<'a>> {
    let line_color = rgb(CHART_COLOR);
    let label_color = rgb(LABEL_COLOR);
    let slots = year_keys.len().max(1);

    let backend = SVGBackend::with_string(svg_inner_string, size);
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(16i32)
        .x_label_area_size(40u32)
        .y_label_area_size(72u32)
        .build_cartesian_2d(-0.5f64..slots as f64 - 0.5, value_range(&series.values))?;

    let x_formatter = |x: &f64| year_label(year_keys, *x);
    let y_formatter = |y: &f64| format_count(*y);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(WHITE)
        .x_labels(slots)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .x_desc(X_AXIS_TITLE)
        .y_desc(Y_AXIS_TITLE)
        .label_style((FONT, 11))
        .axis_desc_style((FONT, 12))
        .draw()?;

    let points: Vec<(f64, f64)> = series
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| (i as f64, *value))
        .collect();

    chart.draw_series(
        AreaSeries::new(points.iter().copied(), 0.0, line_color.mix(FILL_ALPHA))
            .border_style(line_color.stroke_width(3)),
    )?;

    let label_style = (FONT, 10)
        .into_font()
        .style(FontStyle::Bold)
        .color(&label_color)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(points.iter().map(|&(x, y)| {
        let text = format_count(y);
        let half_width = text.len() as i32 * 3 + 4;
        EmptyElement::at((x, y))
            + Circle::new((0, 0), 4, line_color.filled())
            + Rectangle::new([(-half_width, -26), (half_width, -10)], WHITE.mix(0.9).filled())
            + Rectangle::new([(-half_width, -26), (half_width, -10)], label_color.stroke_width(1))
            + Text::new(text, (0, -18), label_style.clone())
    }))?;

    let (x_pixels, y_pixels) = chart.plotting_area().get_pixel_range();
    let slot_width = (x_pixels.end - x_pixels.start) as f64 / slots as f64;
    let columns = points
        .iter()
        .zip(tooltips(series, year_keys))
        .enumerate()
        .map(|(i, (point, tooltip))| {
            let left = x_pixels.start + (i as f64 * slot_width).round() as i32;
            let right = x_pixels.start + ((i + 1) as f64 * slot_width).round() as i32;
            HoverColumn {
                left,
                top: y_pixels.start,
                width: right - left,
                height: y_pixels.end - y_pixels.start,
                anchor: chart.backend_coord(point),
                tooltip,
            }
        })
        .collect();

    root.present()?;
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(labels: &[&str]) -> Vec<YearKey> {
        labels.iter().copied().map(YearKey::from).collect()
    }

    fn series(label: &str, values: &[f64]) -> Series {
        Series {
            label: label.to_string(),
            values: values.to_vec(),
        }
    }

    #[test]
    fn test_tooltip_for_each_year() {
        let keys = years(&["2014", "2015", "2016"]);
        let tips = tooltips(&series("Maricopa", &[21_400.0, 28_850.0, 31_020.0]), &keys);

        assert_eq!(tips.len(), 3);
        assert_eq!(
            tips[0],
            ChartTooltip {
                title: "2014".to_string(),
                span: "July 1, 2013 - June 30, 2014".to_string(),
                body: "Maricopa: 21,400".to_string(),
            }
        );
        assert_eq!(tips[1].title, "2015");
        assert_eq!(tips[1].span, "July 1, 2014 - June 30, 2015");
        assert_eq!(tips[1].body, "Maricopa: 28,850");
        assert_eq!(tips[2].body, "Maricopa: 31,020");
    }

    #[test]
    fn test_generate_svg_columns_follow_years() {
        let keys = years(&["2014", "2015", "2016"]);
        let mut svg = String::new();
        let columns = generate_svg(
            &series("Maricopa", &[21_400.0, 28_850.0, 31_020.0]),
            &keys,
            CHART_SIZE,
            &mut svg,
        )
        .unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("28,850"));
        assert!(svg.contains(Y_AXIS_TITLE));

        assert_eq!(columns.len(), 3);
        assert_eq!(columns[1].tooltip.body, "Maricopa: 28,850");
        for pair in columns.windows(2) {
            assert_eq!(pair[0].left + pair[0].width, pair[1].left);
            assert!(pair[0].anchor.0 < pair[1].anchor.0);
        }
        // Larger values sit higher on the page.
        assert!(columns[2].anchor.1 < columns[0].anchor.1);
        for column in &columns {
            assert!(column.width > 0 && column.height > 0);
            assert!(column.anchor.0 >= column.left && column.anchor.0 < column.left + column.width);
        }
    }

    #[test]
    fn test_generate_svg_empty_series_draws_axes_only() {
        let mut svg = String::new();
        let columns =
            generate_svg(&Series::empty(), &years(&["2011"]), CHART_SIZE, &mut svg).unwrap();
        assert!(columns.is_empty());
        assert!(svg.contains(X_AXIS_TITLE));
    }

    #[test]
    fn test_tooltips_for_empty_series() {
        let keys = years(&["2011", "2012"]);
        assert!(tooltips(&Series::empty(), &keys).is_empty());
    }

    #[test]
    fn test_value_range_starts_at_zero() {
        let range = value_range(&[100.0, 400.0]);
        assert_eq!(range.start, 0.0);
        assert_eq!(range.end, 460.0);
    }

    #[test]
    fn test_value_range_extends_below_zero() {
        let range = value_range(&[-100.0, 300.0]);
        assert_eq!(range.start, -120.0);
        assert_eq!(range.end, 360.0);
    }

    #[test]
    fn test_value_range_degenerate() {
        assert_eq!(value_range(&[]), 0.0..1.0);
        assert_eq!(value_range(&[0.0, 0.0]), 0.0..1.0);
    }

    #[test]
    fn test_year_label_only_on_whole_slots() {
        let keys = years(&["2011", "2012"]);
        assert_eq!(year_label(&keys, 0.0), "2011");
        assert_eq!(year_label(&keys, 1.0), "2012");
        assert_eq!(year_label(&keys, 0.5), "");
        assert_eq!(year_label(&keys, -1.0), "");
        assert_eq!(year_label(&keys, 2.0), "");
    }
}
