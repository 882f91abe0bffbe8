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

use num_traits::Float;

use std::fmt::{Debug, Display};

/// Coordinate type used by vectors, segments and the intersection routine.
pub trait Scalar: Float + Debug + Display + Default + Send + Sync + 'static {
    /// Default "near enough" tolerance, `1e-5` (written `10e-6` historically).
    const TOLERANCE: Self;
    const TEN: Self;

    /// Rounds to `digits` decimal places, half away from zero.
    fn round_to_digits(self, digits: u32) -> Self {
        let exponent = i32::try_from(digits).unwrap_or(i32::MAX);
        let factor = Self::TEN.powi(exponent);
        (self * factor).round() / factor
    }

    fn approx_eq(&self, other: &Self, eps: &Self) -> bool {
        (*other - *self).abs() <= *eps
    }

    fn in_unit_interval(&self) -> bool {
        *self >= Self::zero() && *self <= Self::one()
    }
}

impl Scalar for f64 {
    const TOLERANCE: f64 = 10e-6;
    const TEN: f64 = 10.0;
}

impl Scalar for f32 {
    const TOLERANCE: f32 = 10e-6;
    const TEN: f32 = 10.0;
}
