//! Chart Component
//!
//! Seven-day price line drawn on an HTML5 canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use coinwatch::view::format;
use coinwatch::{ChartScale, TrendPoint};

const SERIES_COLOR: &str = "#FF9800";

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Horizontal grid lines
const GRID_LINES: usize = 5;

/// Pixels outside the plot that still pick the edge point
const HOVER_SLACK: f64 = 10.0;

/// Plot area inside the canvas margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0),
            height: (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0),
        }
    }

    /// Canvas x for the i-th of `count` evenly spaced points
    pub fn x(&self, i: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + (i as f64 / (count - 1) as f64) * self.width
    }

    /// Canvas y for a value; canvas y grows downward
    pub fn y(&self, scale: &ChartScale, value: f64) -> f64 {
        self.top + (1.0 - scale.fraction(value)) * self.height
    }

    /// Index of the point nearest canvas `x`, or `None` off the plot
    pub fn nearest(&self, x: f64, count: usize) -> Option<usize> {
        if count == 0 || x < self.left - HOVER_SLACK || x > self.left + self.width + HOVER_SLACK {
            return None;
        }
        if count == 1 {
            return Some(0);
        }
        let step = self.width / (count - 1) as f64;
        let i = ((x - self.left) / step).round().clamp(0.0, (count - 1) as f64);
        Some(i as usize)
    }

    /// Canvas coordinates for every point
    pub fn plot(&self, scale: &ChartScale, points: &[TrendPoint]) -> Vec<(f64, f64)> {
        points
            .iter()
            .enumerate()
            .map(|(i, point)| (self.x(i, points.len()), self.y(scale, point.price)))
            .collect()
    }
}

/// Price chart for the selected asset, with a readout of the hovered day
#[component]
pub fn PriceChart(points: Vec<TrendPoint>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let hovered = create_rw_signal(None::<usize>);
    let count = points.len();
    let readout_points = points.clone();

    create_effect(move |_| {
        let highlight = hovered.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &points, highlight);
        }
    });

    let on_move = move |ev: ev::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let shown_width = canvas.client_width() as f64;
        if shown_width <= 0.0 {
            return;
        }
        // Mouse offset is in CSS pixels; the plot is in canvas pixels
        let x = ev.offset_x() as f64 * canvas.width() as f64 / shown_width;
        let area = PlotArea::for_canvas(canvas.width() as f64, canvas.height() as f64);
        hovered.set(area.nearest(x, count));
    };

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="300"
                class="w-full h-64 rounded-lg"
                on:mousemove=on_move
                on:mouseleave=move |_| hovered.set(None)
            />
            <div class="text-sm text-gray-300 mt-2 h-5">
                {move || {
                    hovered
                        .get()
                        .and_then(|i| readout_points.get(i))
                        .map(|point| format!("{}: {}", point.label, format::usd(Some(point.price))))
                }}
            </div>
        </div>
    }
}

fn draw_chart(canvas: &HtmlCanvasElement, points: &[TrendPoint], highlight: Option<usize>) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let area = PlotArea::for_canvas(width, height);
    let scale = ChartScale::from_points(points);

    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No price data", width / 2.0 - 50.0, height / 2.0);
        return;
    }

    // Grid and y labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=GRID_LINES {
        let fraction = i as f64 / GRID_LINES as f64;
        let y = area.top + fraction * area.height;
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.left + area.width, y);
        ctx.stroke();

        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&format!("{:.2}", scale.value_at(1.0 - fraction)), 5.0, y + 4.0);
    }

    let coords = area.plot(&scale, points);

    ctx.set_stroke_style(&SERIES_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, (x, y)) in coords.iter().enumerate() {
        if i == 0 {
            ctx.move_to(*x, *y);
        } else {
            ctx.line_to(*x, *y);
        }
    }
    ctx.stroke();

    if let Some((x, _)) = highlight.and_then(|i| coords.get(i)) {
        ctx.set_stroke_style(&"#6b7280".into()); // gray-500
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(*x, area.top);
        ctx.line_to(*x, area.top + area.height);
        ctx.stroke();
    }

    ctx.set_fill_style(&SERIES_COLOR.into());
    for (i, (x, y)) in coords.iter().enumerate() {
        let radius = if highlight == Some(i) { 5.0 } else { 3.0 };
        ctx.begin_path();
        let _ = ctx.arc(*x, *y, radius, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // Day labels
    ctx.set_fill_style(&"#9ca3af".into());
    for (point, (x, _)) in points.iter().zip(&coords) {
        let _ = ctx.fill_text(&point.label, x - 18.0, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinwatch::view::synthetic_trend;

    #[test]
    fn test_plot_area_margins() {
        let area = PlotArea::for_canvas(800.0, 300.0);
        assert_eq!(area.left, 80.0);
        assert_eq!(area.width, 700.0);
        assert_eq!(area.height, 240.0);
    }

    #[test]
    fn test_plot_spans_width() {
        let area = PlotArea::for_canvas(800.0, 300.0);
        let points = synthetic_trend(100.0);
        let coords = area.plot(&ChartScale::from_points(&points), &points);

        assert_eq!(coords.len(), 7);
        assert_eq!(coords[0].0, area.left);
        assert_eq!(coords[6].0, area.left + area.width);
    }

    #[test]
    fn test_nearest_point() {
        let area = PlotArea::for_canvas(800.0, 300.0);
        let step = area.width / 6.0;

        assert_eq!(area.nearest(area.left, 7), Some(0));
        assert_eq!(area.nearest(area.left + 2.0 * step + step * 0.4, 7), Some(2));
        assert_eq!(area.nearest(area.left + 2.0 * step + step * 0.6, 7), Some(3));
        assert_eq!(area.nearest(area.left + area.width + 5.0, 7), Some(6));

        assert_eq!(area.nearest(0.0, 7), None);
        assert_eq!(area.nearest(799.0, 7), None);
        assert_eq!(area.nearest(area.left, 0), None);
        assert_eq!(area.nearest(400.0, 1), Some(0));
    }

    #[test]
    fn test_higher_price_plots_higher() {
        let area = PlotArea::for_canvas(800.0, 300.0);
        let points = synthetic_trend(100.0);
        let coords = area.plot(&ChartScale::from_points(&points), &points);

        // Day 5 (1.03) is the peak, Day 1 (0.95) the low
        assert!(coords[4].1 < coords[0].1);
        for (_, y) in &coords {
            assert!(*y >= area.top && *y <= area.top + area.height);
        }
    }
}
