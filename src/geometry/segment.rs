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

use crate::{
    config::IntersectConfig,
    geometry::{
        intersection::{SegmentIntersection3, segment_segment_intersection_3},
        vector_3::{Point3, Vector3, VectorOps},
    },
    numeric::scalar::Scalar,
};

pub trait SegmentOps<T: Scalar>: Sized {
    fn a(&self) -> &Point3<T>;
    fn b(&self) -> &Point3<T>;

    fn direction(&self) -> Vector3<T> {
        self.b() - self.a()
    }

    fn length(&self) -> T {
        self.direction().norm()
    }

    /// `a + (b - a) * t`; `t` in `[0, 1]` stays on the segment.
    fn point_at(&self, t: T) -> Point3<T> {
        *self.a() + self.direction() * t
    }

    fn midpoint(&self) -> Point3<T>;
    fn is_degenerate(&self, eps: T) -> bool;
    fn is_point_on(&self, p: &Point3<T>, eps: T) -> bool;

    fn inverse(&self) -> Self;
}

/// Directed segment from `a` to `b`. `a == b` is allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment3<T: Scalar> {
    pub a: Point3<T>,
    pub b: Point3<T>,
}

impl<T: Scalar> Segment3<T> {
    pub fn new(a: &Point3<T>, b: &Point3<T>) -> Self {
        Self { a: *a, b: *b }
    }

    /// Intersection under [`IntersectConfig::default`].
    pub fn intersect(&self, other: &Self) -> SegmentIntersection3<T> {
        segment_segment_intersection_3(self, other, &IntersectConfig::default())
    }

    pub fn intersect_with(
        &self,
        other: &Self,
        config: &IntersectConfig<T>,
    ) -> SegmentIntersection3<T> {
        segment_segment_intersection_3(self, other, config)
    }
}

impl<T: Scalar> From<([T; 3], [T; 3])> for Segment3<T> {
    fn from((a, b): ([T; 3], [T; 3])) -> Self {
        Self {
            a: Point3::from(a),
            b: Point3::from(b),
        }
    }
}

impl<T: Scalar> SegmentOps<T> for Segment3<T> {
    fn a(&self) -> &Point3<T> {
        &self.a
    }

    fn b(&self) -> &Point3<T> {
        &self.b
    }

    fn midpoint(&self) -> Point3<T> {
        let two = T::one() + T::one();
        (self.a + self.b) * (T::one() / two)
    }

    fn is_degenerate(&self, eps: T) -> bool {
        self.length() <= eps
    }

    fn is_point_on(&self, p: &Point3<T>, eps: T) -> bool {
        let d = self.direction();
        let len2 = d.norm_squared();
        if len2.is_zero() {
            // a == b; degenerate segment
            return self.a.approx_eq(p, eps);
        }

        let t = (p - &self.a).dot(&d) / len2;
        if !t.in_unit_interval() {
            return false;
        }
        (p - &self.point_at(t)).norm() <= eps
    }

    fn inverse(&self) -> Self {
        Self::new(self.b(), self.a())
    }
}
