//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The dashboard renders its chart and table as plain RSX; the only DOM
//! behaviour it cannot express declaratively is scrolling. These helpers
//! build small scripts and run them with `js_sys::eval`, wrapped in
//! try/catch so a missing element never panics the app.

use wasm_bindgen::JsValue;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('AZH JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log::warn!("[AZH] eval failed: {}", describe(&e));
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Whether an element with the given id is currently in the DOM.
pub fn element_exists(id: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .is_some()
}

/// Scroll a container fully to the right, revealing the trailing Total column.
///
/// Runs on the next animation frame so the table has been laid out.
pub fn scroll_to_right_edge(container_id: &str) {
    call_js(&format!(
        r#"
        requestAnimationFrame(function() {{
            var el = document.getElementById('{container_id}');
            if (el) {{ el.scrollLeft = el.scrollWidth; }}
        }});
        "#,
    ));
}

/// Smoothly scroll a table row to the vertical centre of its scroll container.
pub fn scroll_row_into_view(row_id: &str) {
    call_js(&format!(
        r#"
        requestAnimationFrame(function() {{
            var row = document.getElementById('{row_id}');
            if (row) {{ row.scrollIntoView({{ behavior: 'smooth', block: 'center', inline: 'nearest' }}); }}
        }});
        "#,
    ));
}

/// DOM id for the table row of a region.
///
/// Lowercase ASCII alphanumerics separated by single dashes, so the id is
/// safe to interpolate into the scripts above ("La Paz" -> "region-row-la-paz").
pub fn row_dom_id(region: &str) -> String {
    let mut slug = String::with_capacity(region.len());
    for ch in region.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    format!("region-row-{}", slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_dom_id() {
        assert_eq!(row_dom_id("Arizona"), "region-row-arizona");
        assert_eq!(row_dom_id("La Paz"), "region-row-la-paz");
        assert_eq!(row_dom_id("Santa  Cruz "), "region-row-santa-cruz");
    }

    #[test]
    fn test_row_dom_id_strips_quotes() {
        assert_eq!(row_dom_id("O'Brien's"), "region-row-o-brien-s");
        assert!(!row_dom_id("'); alert(1); ('").contains('\''));
    }
}
