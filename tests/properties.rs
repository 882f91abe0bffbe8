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

//! Randomized checks of the intersection invariants.
//!
//! All generators are seeded so failures reproduce.

use rand::{Rng, SeedableRng, rngs::StdRng};
use segment3d::{Point3, Segment3, SegmentIntersection3, Vector3, VectorOps};

const ROUNDS: usize = 500;

fn random_vector(rng: &mut StdRng, range: f64) -> Vector3<f64> {
    Vector3::new(
        rng.random_range(-range..range),
        rng.random_range(-range..range),
        rng.random_range(-range..range),
    )
}

fn random_int_vector(rng: &mut StdRng, range: i32) -> Vector3<f64> {
    Vector3::new(
        f64::from(rng.random_range(-range..=range)),
        f64::from(rng.random_range(-range..=range)),
        f64::from(rng.random_range(-range..=range)),
    )
}

/// Direction with length at least 0.3.
fn random_direction(rng: &mut StdRng) -> Vector3<f64> {
    loop {
        let v = random_vector(rng, 1.0);
        if v.norm() >= 0.3 {
            return v;
        }
    }
}

/// Two segments through a common point `x`, meeting well inside both.
fn crossing_pair(rng: &mut StdRng) -> (Segment3<f64>, Segment3<f64>, Point3<f64>) {
    let x = random_vector(rng, 1.0);
    loop {
        let u = random_direction(rng);
        let v = random_direction(rng);
        if u.cross(&v).norm() < 0.1 {
            continue;
        }
        let t: f64 = rng.random_range(0.1..0.9);
        let s: f64 = rng.random_range(0.1..0.9);
        let a1 = x - u * t;
        let a2 = x - v * s;
        let seg1 = Segment3::new(&a1, &(a1 + u));
        let seg2 = Segment3::new(&a2, &(a2 + v));
        return (seg1, seg2, x);
    }
}

fn agree(r1: &SegmentIntersection3<f64>, r2: &SegmentIntersection3<f64>) -> bool {
    r1.is_none() == r2.is_none()
}

#[test]
fn test_crossing_pairs_are_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let (s1, s2, x) = crossing_pair(&mut rng);
        let r12 = s1.intersect(&s2);
        let r21 = s2.intersect(&s1);

        let p = r12.point().expect("crossing pair must intersect");
        let q = r21.point().expect("crossing pair must intersect");
        assert!(p.approx_eq(&x, 1e-5), "{p} vs {x}");
        assert!(q.approx_eq(&x, 1e-5), "{q} vs {x}");
    }
}

#[test]
fn test_lifted_pairs_never_intersect() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..ROUNDS {
        let (s1, s2, _) = crossing_pair(&mut rng);
        let u = s1.b - s1.a;
        let v = s2.b - s2.a;
        let n = u.cross(&v);
        let lift = n * (0.5 / n.norm());
        let lifted = Segment3::new(&(s2.a + lift), &(s2.b + lift));

        assert!(s1.intersect(&lifted).is_none());
        assert!(lifted.intersect(&s1).is_none());
    }
}

#[test]
fn test_arbitrary_pairs_agree_both_ways() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..ROUNDS {
        let s1 = Segment3::new(&random_vector(&mut rng, 2.0), &random_vector(&mut rng, 2.0));
        let s2 = Segment3::new(&random_vector(&mut rng, 2.0), &random_vector(&mut rng, 2.0));
        assert!(agree(&s1.intersect(&s2), &s2.intersect(&s1)));
    }
}

#[test]
fn test_collinear_pairs_agree_both_ways() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..ROUNDS {
        let origin = random_int_vector(&mut rng, 5);
        let dir = loop {
            let d = random_int_vector(&mut rng, 3);
            if !d.is_zero() {
                break d;
            }
        };
        let mut params: Vec<i32> = (0..4).map(|_| rng.random_range(-6..=6)).collect();
        if params[0] == params[1] || params[2] == params[3] {
            continue;
        }
        params[..2].sort_unstable();
        params[2..].sort_unstable();

        let at = |k: i32| origin + dir * f64::from(k);
        let s1 = Segment3::new(&at(params[0]), &at(params[1]));
        let s2 = Segment3::new(&at(params[3]), &at(params[2]));
        let overlaps = params[0].max(params[2]) <= params[1].min(params[3]);

        let r12 = s1.intersect(&s2);
        let r21 = s2.intersect(&s1);
        assert_eq!(r12.is_point(), overlaps, "{params:?}");
        assert!(agree(&r12, &r21), "{params:?}");
    }
}

#[test]
fn test_self_intersection_reports_start() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..ROUNDS {
        let a = random_vector(&mut rng, 10.0);
        let s = Segment3::new(&a, &(a + random_direction(&mut rng)));
        assert_eq!(s.intersect(&s), SegmentIntersection3::Point(s.a));
    }
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..ROUNDS {
        let (s1, s2, _) = crossing_pair(&mut rng);
        let first = s1.intersect(&s2).to_sentinel();
        let second = s1.intersect(&s2).to_sentinel();
        assert_eq!(first.x.to_bits(), second.x.to_bits());
        assert_eq!(first.y.to_bits(), second.y.to_bits());
        assert_eq!(first.z.to_bits(), second.z.to_bits());
    }
}

#[test]
fn test_shared_endpoint_is_reported() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..ROUNDS {
        let x = random_int_vector(&mut rng, 5);
        let dir = random_int_vector(&mut rng, 3);
        if dir.is_zero() {
            continue;
        }
        let k = f64::from(rng.random_range(1..=3));
        let before = Segment3::new(&(x - dir), &x);
        let after = Segment3::new(&x, &(x + dir * k));

        assert_eq!(before.intersect(&after), SegmentIntersection3::Point(x));
        assert_eq!(after.intersect(&before), SegmentIntersection3::Point(x));
    }
}
