use itertools::Itertools;

use crate::{
    generator::{Point, Sample},
    DISPLAY_MAX, DISPLAY_MIN,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegression {
    pub slope: f64,
    pub y_offset: f64,
}

impl LinearRegression {
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.y_offset
    }

    /// The fitted line evaluated at both ends of the display range.
    pub fn line(&self) -> RegressionLine {
        RegressionLine {
            start: Point::new(DISPLAY_MIN, self.at(DISPLAY_MIN)),
            end: Point::new(DISPLAY_MAX, self.at(DISPLAY_MAX)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionLine {
    pub start: Point,
    pub end: Point,
}

impl RegressionLine {
    pub fn to_plot(self) -> [[f64; 2]; 2] {
        [self.start.to_plot(), self.end.to_plot()]
    }
}

/// Ordinary least squares through `points`.
///
/// Returns `None` when the slope is undefined: no points, or every point
/// sharing the same x.
pub fn lin_reg(points: &[Point]) -> Option<LinearRegression> {
    if points.is_empty() || points.iter().map(|p| p.x).all_equal() {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;

    let dev_xs = points.iter().map(|p| p.x - mean_x);
    let dev_ys = points.iter().map(|p| p.y - mean_y);

    let x_squared = dev_xs.clone().fold(0.0, |acc, x| acc + x * x);

    let slope = dev_ys.zip(dev_xs).fold(0.0, |acc, (y, x)| acc + x * y) / x_squared;
    if !slope.is_finite() {
        return None;
    }
    let y_offset = mean_y - slope * mean_x;
    Some(LinearRegression { slope, y_offset })
}

/// The best-fit segment across the display range, `None` for a degenerate
/// sample.
pub fn fit(sample: &Sample) -> Option<RegressionLine> {
    lin_reg(sample.points()).map(|regression| regression.line())
}
