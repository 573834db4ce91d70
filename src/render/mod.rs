//! Terminal Rendering
//!
//! Draws a [`PageView`] as plain text for the terminal dashboard.

mod chart;

pub use chart::{render_chart, ChartSize};

use std::fmt::{self, Write};

use crate::view::{
    AssetDetail, DashboardView, DetailView, PageView, CHART_TITLE, ERROR_TEXT, LOADING_TEXT,
    PAGE_TITLE,
};

/// Marker in front of the selected list entry
const SELECTED_MARKER: &str = ">";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub chart: ChartSize,
}

/// Render the whole page
pub fn render_page(page: &PageView, options: &RenderOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_page(&mut out, page, options);
    out
}

fn write_page(out: &mut impl Write, page: &PageView, options: &RenderOptions) -> fmt::Result {
    writeln!(out, "{}", PAGE_TITLE)?;
    writeln!(out, "{}", "=".repeat(PAGE_TITLE.len()))?;
    writeln!(out)?;

    match page {
        PageView::Loading => writeln!(out, "{}", LOADING_TEXT),
        PageView::Error { message } => {
            writeln!(out, "{}", ERROR_TEXT)?;
            writeln!(out, "  ({})", message)
        }
        PageView::Ready(view) => write_dashboard(out, view, options),
    }
}

fn write_dashboard(
    out: &mut impl Write,
    view: &DashboardView,
    options: &RenderOptions,
) -> fmt::Result {
    if let Some(error) = &view.stale_error {
        writeln!(out, "! {} ({}), showing last good data", ERROR_TEXT, error)?;
        writeln!(out)?;
    }

    writeln!(out, "{}", view.list_title)?;
    if view.entries.is_empty() {
        writeln!(out, "  (no assets)")?;
    }
    for entry in &view.entries {
        let marker = if entry.selected { SELECTED_MARKER } else { " " };
        writeln!(out, "{} {:>2}. {}", marker, entry.index + 1, entry.label)?;
    }
    writeln!(out)?;

    match &view.detail {
        DetailView::Empty => {}
        DetailView::Missing { name, symbol } => {
            writeln!(out, "{} ({}) is no longer in the list.", name, symbol)?;
            writeln!(out, "Pick another entry to see its details.")?;
        }
        DetailView::Asset(detail) => write_detail(out, detail, options)?,
    }

    if let Some(updated) = view.updated_at {
        writeln!(out)?;
        writeln!(out, "Updated {}", updated.format("%H:%M:%S UTC"))?;
    }
    Ok(())
}

fn write_detail(out: &mut impl Write, detail: &AssetDetail, options: &RenderOptions) -> fmt::Result {
    writeln!(out, "{}", detail.title)?;

    let left: Vec<String> = detail
        .primary_fields()
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect();
    let right: Vec<String> = detail
        .secondary_fields()
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect();
    let column = left.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 4;

    for (l, r) in left.iter().zip(&right) {
        writeln!(out, "  {:<column$}{}", l, r, column = column)?;
    }
    writeln!(out)?;

    writeln!(out, "{}", CHART_TITLE)?;
    for line in render_chart(&detail.trend, options.chart) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
