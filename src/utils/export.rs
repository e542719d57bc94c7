//! Tree image export.
//!
//! Rasterizes the fetched tree onto an offscreen canvas and offers the
//! result as a PNG download. The drawing reproduces the rendered listing
//! row for row: one line per node, indented by depth, directories in bold.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlAnchorElement, HtmlCanvasElement};

use repotree_core::{PathTree, TreeRow};

use crate::config::export as cfg;
use crate::error::ExportError;
use crate::utils::dom;

/// Marker glyph prefixed to a row, matching the on-screen icons.
fn row_marker(row: &TreeRow<'_>) -> &'static str {
    if row.node.is_dir() { "\u{25b8} " } else { "  " }
}

/// Horizontal offset of a row's text, in pixels.
fn row_offset(row: &TreeRow<'_>) -> f64 {
    cfg::PADDING + row.depth as f64 * cfg::INDENT
}

/// Rasterize the tree and trigger a download under `cfg::FILENAME`.
pub fn export_tree_png(tree: &PathTree) -> Result<(), ExportError> {
    let rows = tree.rows();
    let document = dom::document().ok_or(ExportError::NoDocument)?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| ExportError::CanvasUnavailable)?
        .dyn_into()
        .map_err(|_| ExportError::CanvasUnavailable)?;

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .ok_or(ExportError::ContextUnavailable)?
        .dyn_into()
        .map_err(|_| ExportError::ContextUnavailable)?;

    // Measure first: resizing the canvas resets context state, so the
    // width pass runs before the size is fixed and fonts are re-applied.
    context.set_font(cfg::FONT_BOLD);
    let mut width: f64 = cfg::MIN_WIDTH;
    for row in &rows {
        let label = format!("{}{}", row_marker(row), row.node.name());
        let text_width = context
            .measure_text(&label)
            .map(|m| m.width())
            .unwrap_or(0.0);
        width = width.max(row_offset(row) + text_width + cfg::PADDING);
    }
    let height = rows.len() as f64 * cfg::LINE_HEIGHT + 2.0 * cfg::PADDING;

    canvas.set_width(width.ceil() as u32);
    canvas.set_height(height.ceil() as u32);

    context.set_fill_style_str(cfg::BACKGROUND);
    context.fill_rect(0.0, 0.0, width, height);
    context.set_fill_style_str(cfg::FOREGROUND);

    for (i, row) in rows.iter().enumerate() {
        let font = if row.node.is_dir() { cfg::FONT_BOLD } else { cfg::FONT };
        context.set_font(font);
        let label = format!("{}{}", row_marker(row), row.node.name());
        let y = cfg::PADDING + (i as f64 + 0.75) * cfg::LINE_HEIGHT;
        let _ = context.fill_text(&label, row_offset(row), y);
    }

    let url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|_| ExportError::EncodeFailed)?;

    trigger_download(&document, &url)
}

/// Click a transient anchor carrying the data URL and a download name.
fn trigger_download(document: &Document, url: &str) -> Result<(), ExportError> {
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| ExportError::DownloadFailed)?
        .dyn_into()
        .map_err(|_| ExportError::DownloadFailed)?;

    anchor.set_href(url);
    anchor.set_download(cfg::FILENAME);

    let body = document.body().ok_or(ExportError::NoDocument)?;
    body.append_child(&anchor)
        .map_err(|_| ExportError::DownloadFailed)?;
    anchor.click();
    anchor.remove();

    Ok(())
}
