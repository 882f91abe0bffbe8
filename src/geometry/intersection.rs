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

use tracing::{debug, trace, warn};

use crate::{
    config::IntersectConfig,
    error::{IntersectError, IntersectResult},
    geometry::{
        segment::{Segment3, SegmentOps},
        vector_3::{Point3, Vector3, VectorOps},
    },
    numeric::scalar::Scalar,
};

/// Outcome of intersecting two segments.
///
/// Collinear overlaps report a single point, the first point of the overlap
/// along the first segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection3<T: Scalar> {
    None,
    Point(Point3<T>),
}

impl<T: Scalar> SegmentIntersection3<T> {
    pub fn is_none(&self) -> bool {
        matches!(self, SegmentIntersection3::None)
    }

    pub fn is_point(&self) -> bool {
        !self.is_none()
    }

    pub fn point(&self) -> Option<Point3<T>> {
        match self {
            SegmentIntersection3::None => None,
            SegmentIntersection3::Point(p) => Some(*p),
        }
    }

    /// Flattens to a vector, with the all-NaN vector standing for `None`.
    pub fn to_sentinel(&self) -> Vector3<T> {
        self.point().unwrap_or_else(Vector3::nan)
    }

    /// Inverse of [`Self::to_sentinel`]: any vector with a NaN coordinate
    /// reads as `None`.
    pub fn from_sentinel(v: Vector3<T>) -> Self {
        if v.is_nan() {
            SegmentIntersection3::None
        } else {
            SegmentIntersection3::Point(v)
        }
    }
}

impl<T: Scalar> From<SegmentIntersection3<T>> for Option<Point3<T>> {
    fn from(value: SegmentIntersection3<T>) -> Self {
        value.point()
    }
}

/// Intersects `seg1` and `seg2` by closest approach of their supporting lines.
///
/// With `u = seg1.b - seg1.a`, `v = seg2.b - seg2.a` and `w0 = seg1.a - seg2.a`:
///
/// - `|v × u| < epsilon`: the lines are parallel. They intersect only when
///   collinear (line distance within `collinear_tolerance`) and the parameter
///   ranges overlap; the first overlap point along `seg1` is returned.
/// - otherwise the closest-approach parameters `t` (on `seg1`, rounded to
///   `parameter_digits`) and `s` (on `seg2`) are solved from the normal
///   equations. The segments intersect when the closest points are within
///   `epsilon` of each other and both parameters lie in `[0, 1]`.
///
/// Zero-length segments are accepted. Non-finite input yields `None`.
pub fn segment_segment_intersection_3<T: Scalar>(
    seg1: &Segment3<T>,
    seg2: &Segment3<T>,
    config: &IntersectConfig<T>,
) -> SegmentIntersection3<T> {
    let u = seg1.direction();
    let v = seg2.direction();
    let w0 = seg1.a - seg2.a;

    if v.cross(&u).norm() < config.epsilon {
        return parallel_intersection(seg1, seg2, config);
    }

    let a = u.dot(&u);
    let b = v.dot(&u);
    let c = v.dot(&v);
    let d = u.dot(&w0);
    let e = v.dot(&w0);

    let denominator = a * c - b * b;
    let mut t = (-(d * c) + b * e) / denominator;
    if let Some(digits) = config.parameter_digits {
        t = t.round_to_digits(digits);
    }
    let s = (e + b * t) / c;

    let pt = seg1.point_at(t);
    let qs = seg2.point_at(s);

    let gap = (pt - qs).norm();
    if gap.is_nan() || gap > config.epsilon {
        trace!(?t, ?s, ?gap, "skew lines");
        return SegmentIntersection3::None;
    }

    if !t.in_unit_interval() || !s.in_unit_interval() {
        trace!(?t, ?s, "lines meet outside the segments");
        return SegmentIntersection3::None;
    }

    trace!(?t, ?s, "segments cross");
    SegmentIntersection3::Point(pt)
}

fn parallel_intersection<T: Scalar>(
    seg1: &Segment3<T>,
    seg2: &Segment3<T>,
    config: &IntersectConfig<T>,
) -> SegmentIntersection3<T> {
    let u = seg1.direction();
    let a = u.norm_squared();

    if a.is_zero() {
        return point_intersection(&seg1.a, seg2, config);
    }

    let w0 = seg1.a - seg2.a;
    let distance = u.cross(&w0).norm() / u.norm();
    if distance.is_nan() || distance > config.collinear_tolerance {
        trace!(?distance, "parallel lines apart");
        return SegmentIntersection3::None;
    }

    let mut t0 = (seg2.a - seg1.a).dot(&u) / a;
    let mut t1 = (seg2.b - seg1.a).dot(&u) / a;
    if t0.is_nan() || t1.is_nan() {
        return SegmentIntersection3::None;
    }
    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }

    let t_start = t0.max(T::zero());
    let t_end = t1.min(T::one());
    if t_start > t_end {
        trace!(?t0, ?t1, "collinear without overlap");
        return SegmentIntersection3::None;
    }

    trace!(?t_start, ?t_end, "collinear overlap");
    SegmentIntersection3::Point(seg1.point_at(t_start))
}

/// `p` is a zero-length first segment.
fn point_intersection<T: Scalar>(
    p: &Point3<T>,
    seg2: &Segment3<T>,
    config: &IntersectConfig<T>,
) -> SegmentIntersection3<T> {
    if seg2.direction().norm_squared().is_zero() {
        debug!("both segments are points");
        return if p.approx_eq(&seg2.a, config.epsilon) {
            SegmentIntersection3::Point(*p)
        } else {
            SegmentIntersection3::None
        };
    }

    debug!("first segment is a point; testing it against the second");
    let degenerate = Segment3::new(p, p);
    match parallel_intersection(seg2, &degenerate, config) {
        SegmentIntersection3::None => SegmentIntersection3::None,
        SegmentIntersection3::Point(_) => SegmentIntersection3::Point(*p),
    }
}

/// [`segment_segment_intersection_3`] with default settings, flattened to the
/// NaN-vector convention.
pub fn intersect_sentinel<T: Scalar>(seg1: &Segment3<T>, seg2: &Segment3<T>) -> Vector3<T> {
    seg1.intersect(seg2).to_sentinel()
}

/// Checked variant of [`segment_segment_intersection_3`].
///
/// # Errors
///
/// Returns an error if `config` fails [`IntersectConfig::validate`] or any
/// endpoint has a non-finite coordinate, so that NaN input is never confused
/// with "no intersection".
pub fn try_segment_segment_intersection_3<T: Scalar>(
    seg1: &Segment3<T>,
    seg2: &Segment3<T>,
    config: &IntersectConfig<T>,
) -> IntersectResult<SegmentIntersection3<T>> {
    config.validate()?;
    check_finite("first", seg1)?;
    check_finite("second", seg2)?;
    Ok(segment_segment_intersection_3(seg1, seg2, config))
}

fn check_finite<T: Scalar>(segment: &'static str, seg: &Segment3<T>) -> IntersectResult<()> {
    for (endpoint, p) in [("start", &seg.a), ("end", &seg.b)] {
        if !p.is_finite() {
            warn!(segment, endpoint, point = %p, "rejecting non-finite segment");
            return Err(IntersectError::NonFiniteCoordinate { segment, endpoint });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{SegmentIntersection3, segment_segment_intersection_3};
    use crate::{
        config::IntersectConfig,
        geometry::{segment::Segment3, vector_3::Vector3},
    };

    fn seg(a: [f64; 3], b: [f64; 3]) -> Segment3<f64> {
        Segment3::from((a, b))
    }

    #[test]
    fn sentinel_conversions() {
        let none = SegmentIntersection3::<f64>::None;
        assert!(none.to_sentinel().is_nan());
        assert_eq!(SegmentIntersection3::from_sentinel(Vector3::<f64>::nan()), none);

        let p = Vector3::new(1.0, 2.0, 3.0);
        let hit = SegmentIntersection3::Point(p);
        assert_eq!(hit.to_sentinel(), p);
        assert_eq!(SegmentIntersection3::from_sentinel(p), hit);
        let opt: Option<Vector3<f64>> = hit.into();
        assert_eq!(opt, Some(p));
    }

    #[test]
    fn nan_input_is_no_intersection() {
        let s1 = seg([f64::NAN, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let s2 = seg([0.0, 1.0, 0.0], [0.0, -1.0, 0.0]);
        let config = IntersectConfig::default();
        assert!(segment_segment_intersection_3(&s1, &s2, &config).is_none());
        assert!(segment_segment_intersection_3(&s2, &s1, &config).is_none());
    }

    #[test]
    fn nan_input_against_point_segment() {
        let s1 = seg([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
        let s2 = seg([f64::NAN, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let config = IntersectConfig::default();
        assert!(segment_segment_intersection_3(&s1, &s2, &config).is_none());
    }

    #[test]
    fn rounding_snaps_parameter_to_segment_end() {
        // Crossing sits 4e-7 past the end of the first segment.
        let s1 = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let s2 = seg([1.000_000_4, 1.0, 0.0], [1.000_000_4, -1.0, 0.0]);

        let rounded = segment_segment_intersection_3(&s1, &s2, &IntersectConfig::default());
        assert_eq!(rounded, SegmentIntersection3::Point(Vector3::new(1.0, 0.0, 0.0)));

        let exact = IntersectConfig::default().without_rounding();
        assert!(segment_segment_intersection_3(&s1, &s2, &exact).is_none());
    }
}
