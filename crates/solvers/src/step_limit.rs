use boxopt_core::{DimensionMismatch, Region, Vector};

/// Returns the largest `s >= 0` such that `x - s * direction` stays in `region`.
///
/// For each coordinate with a nonzero direction component the limit is the
/// larger of `(x_i - lower_i) / d_i` and `(x_i - upper_i) / d_i`; the result
/// is the smallest limit across coordinates. Coordinates with `d_i == 0`
/// impose no limit, and `None` means no coordinate does.
///
/// A point already outside the region yields a limit of zero on the violated
/// axis rather than a negative scale.
pub(crate) fn max_step(
    region: &Region,
    x: &Vector,
    direction: &Vector,
) -> Result<Option<f64>, DimensionMismatch> {
    DimensionMismatch::check(region.dimension(), x.len())?;
    DimensionMismatch::check(x.len(), direction.len())?;

    let limit = region
        .bounds()
        .iter()
        .zip(x.iter().zip(direction.iter()))
        .filter(|(_, (_, d))| **d != 0.0)
        .map(|(&[lower, upper], (&xi, &di))| ((xi - lower) / di).max((xi - upper) / di))
        .reduce(f64::min);

    Ok(limit.map(|s| s.max(0.0)))
}
