use crate::TlError;

/// Floating point type used throughout the analyzer
pub type Real = f64;

/// Absolute + relative comparison tolerance
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TlError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TlError::NonFinite { what, value: v })
    }
}

/// Largest finite value in `values`, or `None` if there is none.
pub fn finite_max(values: &[Real]) -> Option<Real> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| Some(acc.map_or(v, |m: Real| m.max(v))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances::default();
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        assert!(err.to_string().contains("Non-finite"));
    }

    #[test]
    fn finite_max_skips_non_finite() {
        assert_eq!(finite_max(&[1.0, Real::NAN, 3.0, Real::INFINITY]), Some(3.0));
        assert_eq!(finite_max(&[]), None);
        assert_eq!(finite_max(&[Real::NAN]), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn finite_max_bounds_every_element(values in prop::collection::vec(-1e6_f64..1e6_f64, 1..64)) {
            let m = finite_max(&values).unwrap();
            prop_assert!(values.iter().all(|v| *v <= m));
            prop_assert!(values.contains(&m));
        }
    }
}
