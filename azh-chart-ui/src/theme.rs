//! Colours shared by the chart and table.

/// Series line colour (orange-500, matches the favicon).
pub const CHART_COLOR: &str = "#F97316";

/// Data label text and border colour.
pub const LABEL_COLOR: &str = "#C2410C";

/// Alpha of the area fill under the series line and the hover band.
pub const FILL_ALPHA: f64 = 0.1;

/// Background of the selected table row and its sticky cells.
pub const SELECTED_ROW_BG: &str = "#FFF7ED";

pub const ROW_BG: &str = "#FFFFFF";

pub const HEADER_BG: &str = "#F9FAFB";

/// Split `#RRGGBB` into its channels.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Convert `#RRGGBB` into a CSS `rgba(...)` string.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Option<String> {
    let (r, g, b) = hex_to_rgb(hex)?;
    Some(format!("rgba({}, {}, {}, {})", r, g, b, alpha))
}

/// Translucent series colour, used for the hovered year column.
pub fn chart_fill() -> String {
    hex_to_rgba(CHART_COLOR, FILL_ALPHA).unwrap_or_else(|| CHART_COLOR.to_string())
}
