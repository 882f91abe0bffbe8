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

//! Error types for checked intersection queries.

use thiserror::Error;

/// Errors reported by [`crate::try_segment_segment_intersection_3`] and
/// [`crate::IntersectConfig::validate`].
///
/// The unchecked routine never fails; "no intersection" is an ordinary
/// [`crate::SegmentIntersection3::None`] outcome, not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntersectError {
    /// A tolerance is negative, infinite or NaN.
    #[error("invalid {name}: {value} (must be finite and non-negative)")]
    InvalidTolerance {
        /// Which configuration field.
        name: &'static str,
        /// The rejected value, widened to `f64`.
        value: f64,
    },

    /// Parameter rounding asks for more digits than the scalar can hold.
    #[error("invalid parameter rounding: {digits} digits (at most {max})")]
    InvalidDigits {
        /// Requested decimal digits.
        digits: u32,
        /// Largest accepted value.
        max: u32,
    },

    /// An input endpoint has a NaN or infinite coordinate.
    #[error("non-finite coordinate in {segment} segment at its {endpoint} point")]
    NonFiniteCoordinate {
        /// "first" or "second".
        segment: &'static str,
        /// "start" or "end".
        endpoint: &'static str,
    },
}

/// Result type for checked intersection queries.
pub type IntersectResult<T> = Result<T, IntersectError>;
