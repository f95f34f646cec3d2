use super::LineSearch;

/// Ternary search bracket over step lengths `[left, right]`.
///
/// The two probes sit at one and two thirds of the width. Each shrink drops
/// the outer third on the side of the worse probe.
#[derive(Debug, Clone, Copy)]
struct Bracket {
    left: f64,
    right: f64,
}

impl Bracket {
    fn new(max_step: f64) -> Self {
        Self {
            left: 0.0,
            right: max_step,
        }
    }

    fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the probe at `left + width / 3`.
    fn inner_left(&self) -> f64 {
        (2.0 * self.left + self.right) / 3.0
    }

    /// Returns the probe at `left + 2 * width / 3`.
    fn inner_right(&self) -> f64 {
        (self.left + 2.0 * self.right) / 3.0
    }

    /// Shrinks the bracket to `[left, inner_right]`.
    fn shrink_right(&mut self) {
        self.right = self.inner_right();
    }

    /// Shrinks the bracket to `[inner_left, right]`.
    fn shrink_left(&mut self) {
        self.left = self.inner_left();
    }

    fn midpoint(&self) -> f64 {
        (self.left + self.right) / 2.0
    }
}

/// Minimizes `line` over `[0, max_step]` by ternary search.
///
/// Ties move the left edge, so a flat line drifts toward `max_step`.
/// Errors from `line` are returned as-is.
pub(super) fn minimize<F, E>(line: F, max_step: f64, limits: &LineSearch) -> Result<f64, E>
where
    F: Fn(f64) -> Result<f64, E>,
{
    let mut bracket = Bracket::new(max_step);

    for _ in 0..limits.max_iters() {
        if bracket.width() <= limits.tolerance() {
            break;
        }
        if line(bracket.inner_left())? < line(bracket.inner_right())? {
            bracket.shrink_right();
        } else {
            bracket.shrink_left();
        }
    }

    Ok(bracket.midpoint())
}
