use rand::Rng;

use crate::{coefficient::CorrelationCoefficient, DISPLAY_MAX};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_plot(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// The generated point cloud, in generation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    points: Vec<Point>,
}

impl Sample {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl FromIterator<Point> for Sample {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sample {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Draws `n` points whose correlation is roughly `coefficient`.
///
/// x is uniform on `[0, 1)`, y scatters around the line
/// `0.5 + c * (x - 0.5)` with spread `sqrt(1 - c^2)` and is saturated into
/// `[0, 1]`. Both are scaled to display units before being stored.
/// The achieved correlation is approximate, the clamping and the bounded
/// noise both pull it away from the requested value.
pub fn generate<R>(coefficient: CorrelationCoefficient, n: usize, rng: &mut R) -> Sample
where
    R: Rng + ?Sized,
{
    let c = coefficient.value();
    let y_std = (1.0 - c * c).max(0.0).sqrt();
    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let x: f64 = rng.gen();
        let y_mean = 0.5 + c * (x - 0.5);
        let y = (y_mean + y_std * irwin_hall_noise(rng)).clamp(0.0, 1.0);
        points.push(Point::new(x * DISPLAY_MAX, y * DISPLAY_MAX));
    }
    Sample::new(points)
}

/// Sum of three uniforms, centred and scaled. Bounded to `±1.5 / 2.1`.
fn irwin_hall_noise<R>(rng: &mut R) -> f64
where
    R: Rng + ?Sized,
{
    let sum: f64 = (0..3).map(|_| rng.gen::<f64>()).sum();
    (sum - 1.5) / 2.1
}
