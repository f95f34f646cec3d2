use boxopt_core::{DimensionMismatch, Vector};

use super::Config;

/// Exponentially decayed gradient moments for one run.
#[derive(Debug, Clone)]
pub(super) struct Moments {
    /// First moment, the running mean of the gradient.
    mean: Vec<f64>,

    /// Second moment, the running mean of the squared gradient.
    square: Vec<f64>,

    /// Number of updates so far.
    t: i32,
}

impl Moments {
    pub(super) fn new(dimension: usize) -> Self {
        Self {
            mean: vec![0.0; dimension],
            square: vec![0.0; dimension],
            t: 0,
        }
    }

    /// Folds in a gradient and returns the bias-corrected step direction.
    ///
    /// Each component is `m̂_i / (sqrt(v̂_i) + epsilon)`. A component whose
    /// corrected first moment is exactly zero has direction zero.
    pub(super) fn update(
        &mut self,
        gradient: &Vector,
        config: &Config,
    ) -> Result<Vector, DimensionMismatch> {
        DimensionMismatch::check(self.mean.len(), gradient.len())?;

        self.t = self.t.saturating_add(1);
        let (beta1, beta2) = (config.beta1(), config.beta2());
        let mean_correction = 1.0 - beta1.powi(self.t);
        let square_correction = 1.0 - beta2.powi(self.t);

        Ok(self
            .mean
            .iter_mut()
            .zip(self.square.iter_mut())
            .zip(gradient.iter())
            .map(|((m, v), &g)| {
                *m = beta1 * *m + (1.0 - beta1) * g;
                *v = beta2 * *v + (1.0 - beta2) * g * g;
                let m_hat = *m / mean_correction;
                let v_hat = *v / square_correction;
                if m_hat == 0.0 {
                    0.0
                } else {
                    m_hat / (v_hat.sqrt() + config.epsilon())
                }
            })
            .collect())
    }
}
