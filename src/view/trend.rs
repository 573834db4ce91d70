//! Synthetic price trend
//!
//! The "last 7 days" chart is not historical data: it is the current price
//! scaled by fixed multipliers.

use serde::Serialize;

use crate::market::AssetRecord;

/// Multipliers applied to the current price, Day 1 through Day 7
pub const TREND_MULTIPLIERS: [f64; 7] = [0.95, 0.98, 1.02, 1.01, 1.03, 0.99, 1.00];

/// One chart point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// "Day 1".."Day 7"
    pub label: String,
    pub price: f64,
}

/// Build the 7-point series for `price`
pub fn synthetic_trend(price: f64) -> Vec<TrendPoint> {
    TREND_MULTIPLIERS
        .iter()
        .enumerate()
        .map(|(i, m)| TrendPoint {
            label: format!("Day {}", i + 1),
            price: price * m,
        })
        .collect()
}

/// Series for an asset, or an empty series when its price does not parse
pub fn trend_for(asset: &AssetRecord) -> Vec<TrendPoint> {
    asset.price_value().map(synthetic_trend).unwrap_or_default()
}

/// Y-axis range for a chart, padded 10% on each side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    pub min: f64,
    pub max: f64,
}

impl ChartScale {
    pub fn from_points(points: &[TrendPoint]) -> Self {
        let mut min = points.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
        let mut max = points.iter().map(|p| p.price).fold(f64::NEG_INFINITY, f64::max);

        if !min.is_finite() || !max.is_finite() {
            return Self { min: 0.0, max: 1.0 };
        }

        let range = max - min;
        let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
        min -= padding;
        max += padding;

        Self { min, max }
    }

    /// Position of `value` between the bottom (0.0) and the top (1.0)
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// Value at a fraction of the height, 0.0 bottom to 1.0 top
    pub fn value_at(&self, fraction: f64) -> f64 {
        self.min + fraction * (self.max - self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_trend_from_hundred() {
        let trend = synthetic_trend(100.0);
        let expected = [95.0, 98.0, 102.0, 101.0, 103.0, 99.0, 100.0];

        assert_eq!(trend.len(), 7);
        for (i, (point, want)) in trend.iter().zip(expected).enumerate() {
            assert_eq!(point.label, format!("Day {}", i + 1));
            assert!(approx(point.price, want), "{} != {}", point.price, want);
        }
    }

    #[test]
    fn test_last_point_is_current_price() {
        let trend = synthetic_trend(66_000.123);
        assert_eq!(trend.last().map(|p| p.price), Some(66_000.123));
    }

    #[test]
    fn test_trend_for_unparsable_price_is_empty() {
        let asset = AssetRecord::new("x", "X", "X").price("not-a-number");
        assert!(trend_for(&asset).is_empty());

        let asset = AssetRecord::new("y", "Y", "Y").price("100.00");
        assert_eq!(trend_for(&asset).len(), 7);
    }

    #[test]
    fn test_scale_padding() {
        let scale = ChartScale::from_points(&synthetic_trend(100.0));
        assert!(approx(scale.min, 94.2));
        assert!(approx(scale.max, 103.8));
        assert!(approx(scale.fraction(scale.value_at(0.25)), 0.25));
    }

    #[test]
    fn test_scale_flat_and_empty() {
        let scale = ChartScale::from_points(&synthetic_trend(0.0));
        assert!(approx(scale.min, -1.0));
        assert!(approx(scale.max, 1.0));

        let scale = ChartScale::from_points(&[]);
        assert_eq!(scale, ChartScale { min: 0.0, max: 1.0 });
    }
}
