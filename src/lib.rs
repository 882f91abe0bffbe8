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

//! Intersection of two line segments in 3D.
//!
//! Segments are classified by the closest approach of their supporting lines
//! under a fixed tolerance: parallel (disjoint or collinear), skew, or
//! crossing. A collinear overlap reports its first point along the first
//! segment.
//!
//! ```
//! use segment3d::{Point3, Segment3, SegmentIntersection3};
//!
//! let s1 = Segment3::new(&Point3::new(1.0, 0.0, 0.0), &Point3::new(-1.0, 0.0, 0.0));
//! let s2 = Segment3::new(&Point3::new(0.0, 1.0, 0.0), &Point3::new(0.0, -1.0, 0.0));
//! assert_eq!(s1.intersect(&s2), SegmentIntersection3::Point(Point3::new(0.0, 0.0, 0.0)));
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod numeric;

pub use config::{IntersectConfig, MAX_PARAMETER_DIGITS};
pub use error::{IntersectError, IntersectResult};
pub use geometry::{
    Point3, Segment3, SegmentIntersection3, SegmentOps, Vector3, VectorOps, intersect_sentinel,
    segment_segment_intersection_3, try_segment_segment_intersection_3,
};
pub use numeric::Scalar;
