//! Single-series line chart: plotters SVG plus a per-year hover overlay.

use crate::chart::{generate_svg, HoverColumn, CHART_SIZE};
use crate::components::ErrorDisplay;
use crate::theme::{chart_fill, CHART_COLOR, LABEL_COLOR};
use azh_data::{Series, YearKey};
use dioxus::prelude::*;

/// Offset of the tooltip box from the hovered point.
const TOOLTIP_OFFSET: i32 = 12;

#[derive(Props, Clone, PartialEq)]
pub struct LineChartProps {
    pub series: Series,
    pub year_keys: Vec<YearKey>,
}

/// Renders one series aligned to the year keys. Hovering anywhere in a
/// year's column shows that year's value.
#[component]
pub fn LineChart(props: LineChartProps) -> Element {
    let mut hovered = use_signal(|| None::<usize>);

    let mut svg_inner = String::new();
    let columns = match generate_svg(&props.series, &props.year_keys, CHART_SIZE, &mut svg_inner) {
        Ok(columns) => columns,
        Err(e) => {
            log::error!("Failed to draw chart for {}: {}", props.series.label, e);
            return rsx! {
                ErrorDisplay { message: format!("Failed to draw chart: {}", e) }
            };
        }
    };

    let (width, height) = CHART_SIZE;
    let view_box = format!("0 0 {} {}", width, height);
    let band = chart_fill();
    let active_index = hovered();
    let active: Option<HoverColumn> = active_index.and_then(|i| columns.get(i).cloned());

    rsx! {
        div {
            style: "width: 100%; height: 100%; overflow: auto;",
            div {
                style: "position: relative; width: {width}px; height: {height}px;",
                onmouseleave: move |_| hovered.set(None),

                div { dangerous_inner_html: "{svg_inner}" }

                svg {
                    view_box: "{view_box}",
                    width: "{width}",
                    height: "{height}",
                    style: "position: absolute; top: 0; left: 0;",
                    for (i, column) in columns.iter().enumerate() {
                        {
                            let fill = if active_index == Some(i) { band.as_str() } else { "rgba(0, 0, 0, 0)" };
                            rsx! {
                                rect {
                                    key: "{column.tooltip.title}",
                                    x: "{column.left}",
                                    y: "{column.top}",
                                    width: "{column.width}",
                                    height: "{column.height}",
                                    fill: "{fill}",
                                    onmouseenter: move |_| hovered.set(Some(i)),
                                }
                            }
                        }
                    }
                    if let Some(column) = active.as_ref() {
                        circle {
                            cx: "{column.anchor.0}",
                            cy: "{column.anchor.1}",
                            r: "6",
                            fill: "none",
                            stroke: CHART_COLOR,
                            stroke_width: "2",
                            pointer_events: "none",
                        }
                    }
                }

                if let Some(column) = active.as_ref() {
                    {
                        let left = column.anchor.0 + TOOLTIP_OFFSET;
                        let top = (column.anchor.1 - 4 * TOOLTIP_OFFSET).max(0);
                        rsx! {
                            div {
                                role: "tooltip",
                                style: "position: absolute; left: {left}px; top: {top}px; pointer-events: none; padding: 6px 10px; background: rgba(17, 24, 39, 0.9); color: #FFFFFF; border-radius: 4px; font-size: 12px; white-space: nowrap;",
                                div { style: "font-weight: 600;", "{column.tooltip.title}" }
                                if !column.tooltip.span.is_empty() {
                                    div { style: "color: #D1D5DB; font-size: 11px;", "{column.tooltip.span}" }
                                }
                                div {
                                    style: "margin-top: 2px;",
                                    span { style: "display: inline-block; width: 8px; height: 8px; margin-right: 6px; background: {LABEL_COLOR}; border-radius: 2px;" }
                                    "{column.tooltip.body}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
