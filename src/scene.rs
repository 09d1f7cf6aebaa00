use log::debug;
use rand::Rng;

use crate::{
    coefficient::{Correlation, CorrelationCoefficient},
    generator::{self, Sample},
    lin_reg::{self, RegressionLine},
    SAMPLE_SIZE,
};

/// Everything the plot needs for one coefficient.
///
/// A scene is rebuilt from scratch whenever the coefficient changes and is
/// never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub coefficient: CorrelationCoefficient,
    pub sample: Sample,
    pub line: Option<RegressionLine>,
    pub description: Correlation,
}

impl Scene {
    pub fn regenerate<R>(coefficient: CorrelationCoefficient, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::with_size(coefficient, SAMPLE_SIZE, rng)
    }

    pub fn with_size<R>(coefficient: CorrelationCoefficient, n: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let sample = generator::generate(coefficient, n, rng);
        let line = lin_reg::fit(&sample);
        if line.is_none() {
            debug!("no regression line for {} points", sample.len());
        }
        Self {
            coefficient,
            sample,
            line,
            description: coefficient.describe(),
        }
    }
}
