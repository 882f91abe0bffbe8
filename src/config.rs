// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Tolerance settings for segment intersection.
//!
//! [`IntersectConfig::default()`] reproduces the classic behaviour: a single
//! `1e-5` tolerance and closest-approach parameters rounded to six decimal
//! digits. [`IntersectConfig::legacy()`] additionally restores the sharp
//! collinearity test (any non-zero line distance rejects).
//!
//! # Example
//!
//! ```
//! use segment3d::IntersectConfig;
//!
//! let config = IntersectConfig::<f64>::default()
//!     .with_epsilon(1e-7)
//!     .without_rounding();
//! assert!(config.validate().is_ok());
//! ```

use num_traits::ToPrimitive;

use crate::{
    error::{IntersectError, IntersectResult},
    numeric::scalar::Scalar,
};

/// Largest accepted value for [`IntersectConfig::parameter_digits`].
pub const MAX_PARAMETER_DIGITS: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectConfig<T: Scalar> {
    /// Tolerance for the parallel test and for the closest-approach gap.
    pub epsilon: T,

    /// Largest distance between two parallel lines still treated as
    /// collinear. `0` keeps only numerically exact collinearity.
    pub collinear_tolerance: T,

    /// Decimal digits the first closest-approach parameter is rounded to
    /// before the boundary checks. `None` disables rounding.
    ///
    /// Rounding to 6 digits snaps parameters such as `0.9999999` onto the
    /// segment end so touching endpoints are reported consistently.
    pub parameter_digits: Option<u32>,
}

impl<T: Scalar> Default for IntersectConfig<T> {
    fn default() -> Self {
        Self {
            epsilon: T::TOLERANCE,
            collinear_tolerance: T::TOLERANCE,
            parameter_digits: Some(6),
        }
    }
}

impl<T: Scalar> IntersectConfig<T> {
    /// Default settings with the unguarded collinearity check.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            collinear_tolerance: T::zero(),
            ..Self::default()
        }
    }

    /// Sets both the general tolerance and the collinear tolerance.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = epsilon;
        self.collinear_tolerance = epsilon;
        self
    }

    #[must_use]
    pub fn with_collinear_tolerance(mut self, tolerance: T) -> Self {
        self.collinear_tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_parameter_digits(mut self, digits: u32) -> Self {
        self.parameter_digits = Some(digits);
        self
    }

    #[must_use]
    pub fn without_rounding(mut self) -> Self {
        self.parameter_digits = None;
        self
    }

    /// Checks that tolerances are finite and non-negative and that the
    /// rounding precision is representable.
    ///
    /// # Errors
    ///
    /// Returns [`IntersectError::InvalidTolerance`] or
    /// [`IntersectError::InvalidDigits`].
    pub fn validate(&self) -> IntersectResult<()> {
        check_tolerance("epsilon", self.epsilon)?;
        check_tolerance("collinear tolerance", self.collinear_tolerance)?;

        if let Some(digits) = self.parameter_digits {
            if digits > MAX_PARAMETER_DIGITS {
                return Err(IntersectError::InvalidDigits {
                    digits,
                    max: MAX_PARAMETER_DIGITS,
                });
            }
        }
        Ok(())
    }
}

fn check_tolerance<T: Scalar>(name: &'static str, value: T) -> IntersectResult<()> {
    if value.is_finite() && value >= T::zero() {
        return Ok(());
    }
    Err(IntersectError::InvalidTolerance {
        name,
        value: value.to_f64().unwrap_or(f64::NAN),
    })
}

#[cfg(test)]
mod tests {
    use super::{IntersectConfig, MAX_PARAMETER_DIGITS};
    use crate::error::IntersectError;

    #[test]
    fn default_matches_classic_settings() {
        let config = IntersectConfig::<f64>::default();
        assert_eq!(config.epsilon, 1e-5);
        assert_eq!(config.collinear_tolerance, 1e-5);
        assert_eq!(config.parameter_digits, Some(6));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn legacy_uses_sharp_collinear_check() {
        let config = IntersectConfig::<f64>::legacy();
        assert_eq!(config.collinear_tolerance, 0.0);
        assert_eq!(config.epsilon, 1e-5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders() {
        let config = IntersectConfig::<f64>::default()
            .with_epsilon(1e-3)
            .with_collinear_tolerance(1e-4)
            .with_parameter_digits(9);
        assert_eq!(config.epsilon, 1e-3);
        assert_eq!(config.collinear_tolerance, 1e-4);
        assert_eq!(config.parameter_digits, Some(9));
        assert_eq!(config.without_rounding().parameter_digits, None);
    }

    #[test]
    fn rejects_negative_epsilon() {
        let err = IntersectConfig::<f64>::default()
            .with_epsilon(-1.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            IntersectError::InvalidTolerance {
                name: "epsilon",
                value: -1.0
            }
        );
    }

    #[test]
    fn rejects_nan_collinear_tolerance() {
        let err = IntersectConfig::<f64>::default()
            .with_collinear_tolerance(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            IntersectError::InvalidTolerance {
                name: "collinear tolerance",
                ..
            }
        ));
    }

    #[test]
    fn rejects_too_many_digits() {
        let err = IntersectConfig::<f32>::default()
            .with_parameter_digits(MAX_PARAMETER_DIGITS + 1)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid parameter rounding: 16 digits (at most 15)"
        );
    }
}
