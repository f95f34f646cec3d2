use thiserror::Error;

/// A vector length disagreed with the dimension an operation expected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("dimension mismatch: expected {expected}, got {actual}")]
pub struct DimensionMismatch {
    /// The dimension the operation required.
    pub expected: usize,

    /// The length that was supplied.
    pub actual: usize,
}

impl DimensionMismatch {
    /// Returns an error unless `actual == expected`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] when the two lengths differ.
    pub fn check(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self { expected, actual })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_passes_on_equal_lengths() {
        assert_eq!(DimensionMismatch::check(3, 3), Ok(()));
    }

    #[test]
    fn check_reports_both_lengths() {
        let err = DimensionMismatch::check(2, 5).unwrap_err();
        assert_eq!(err.expected, 2);
        assert_eq!(err.actual, 5);
        assert_eq!(err.to_string(), "dimension mismatch: expected 2, got 5");
    }
}
