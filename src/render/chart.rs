//! Text Chart
//!
//! Line chart of the trend series drawn with box characters: Y-axis labels on
//! the left, day labels under the points.

use crate::view::{ChartScale, TrendPoint};

const POINT: char = '●';
const LINE: char = '·';
const GRID: char = '┄';

/// Chart dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSize {
    /// Plot rows, not counting the axis and label lines
    pub height: usize,
    /// Columns between neighbouring points
    pub spacing: usize,
}

impl ChartSize {
    pub const MAX_HEIGHT: usize = 60;
    pub const MAX_SPACING: usize = 24;

    /// Height within 2..=MAX_HEIGHT and spacing within 1..=MAX_SPACING
    pub fn bounded(self) -> Self {
        Self {
            height: self.height.clamp(2, Self::MAX_HEIGHT),
            spacing: self.spacing.clamp(1, Self::MAX_SPACING),
        }
    }
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            height: 10,
            spacing: 8,
        }
    }
}

/// Draw `points` as lines of text.
///
/// Returns a single placeholder line when there is nothing to plot.
pub fn render_chart(points: &[TrendPoint], size: ChartSize) -> Vec<String> {
    if points.is_empty() {
        return vec!["  No price data".to_string()];
    }

    let ChartSize { height, spacing } = size.bounded();
    let width = (points.len() - 1) * spacing + 1;
    let scale = ChartScale::from_points(points);

    let row_of = |value: f64| -> usize {
        let from_top = (1.0 - scale.fraction(value)) * (height - 1) as f64;
        (from_top.round().max(0.0) as usize).min(height - 1)
    };

    let mut grid = vec![vec![' '; width]; height];

    // Horizontal grid lines, 5 bands like the canvas chart
    let grid_rows: Vec<usize> = (0..=4).map(|i| i * (height - 1) / 4).collect();
    for &row in &grid_rows {
        for cell in grid[row].iter_mut() {
            *cell = GRID;
        }
    }

    // Interpolated segments between neighbouring points
    for (i, pair) in points.windows(2).enumerate() {
        let x0 = i * spacing;
        for step in 1..spacing {
            let t = step as f64 / spacing as f64;
            let value = pair[0].price + (pair[1].price - pair[0].price) * t;
            grid[row_of(value)][x0 + step] = LINE;
        }
    }

    for (i, point) in points.iter().enumerate() {
        grid[row_of(point.price)][i * spacing] = POINT;
    }

    let labels: Vec<String> = (0..height)
        .map(|row| {
            if grid_rows.contains(&row) {
                let fraction = 1.0 - row as f64 / (height - 1) as f64;
                format!("{:.2}", scale.value_at(fraction))
            } else {
                String::new()
            }
        })
        .collect();
    let label_width = labels.iter().map(String::len).max().unwrap_or(0);

    let mut lines: Vec<String> = grid
        .into_iter()
        .zip(&labels)
        .map(|(cells, label)| {
            let row: String = cells.into_iter().collect();
            format!("{:>w$} │{}", label, row.trim_end(), w = label_width)
        })
        .collect();

    lines.push(format!("{:>w$} └{}", "", "─".repeat(width + 1), w = label_width));

    let mut x_axis = vec![' '; width + 8];
    for (i, point) in points.iter().enumerate() {
        let center = i * spacing;
        let start = center.saturating_sub(point.label.chars().count() / 2);
        for (offset, ch) in point.label.chars().enumerate() {
            if let Some(cell) = x_axis.get_mut(start + offset) {
                *cell = ch;
            }
        }
    }
    let x_axis: String = x_axis.into_iter().collect();
    lines.push(format!("{:>w$}  {}", "", x_axis.trim_end(), w = label_width));

    lines
}
