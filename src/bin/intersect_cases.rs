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

//! Runs the reference segment pairs and reports mismatches.

use std::process::ExitCode;

use segment3d::{Point3, Scalar, Segment3, SegmentIntersection3};

struct Case {
    name: &'static str,
    first: Segment3<f64>,
    second: Segment3<f64>,
    expected: SegmentIntersection3<f64>,
}

fn case(
    name: &'static str,
    first: ([f64; 3], [f64; 3]),
    second: ([f64; 3], [f64; 3]),
    expected: Option<[f64; 3]>,
) -> Case {
    Case {
        name,
        first: Segment3::from(first),
        second: Segment3::from(second),
        expected: match expected {
            Some(p) => SegmentIntersection3::Point(Point3::from(p)),
            None => SegmentIntersection3::None,
        },
    }
}

fn reference_cases() -> Vec<Case> {
    vec![
        case(
            "perpendicular crossing at origin",
            ([1.0, 0.0, 0.0], [-1.0, 0.0, 0.0]),
            ([0.0, 1.0, 0.0], [0.0, -1.0, 0.0]),
            Some([0.0, 0.0, 0.0]),
        ),
        case(
            "tilted crossing at origin",
            ([1.0, 0.0, -1.0], [-1.0, 0.0, 1.0]),
            ([0.0, 1.0, 0.0], [0.0, -1.0, 0.0]),
            Some([0.0, 0.0, 0.0]),
        ),
        case(
            "both tilted, crossing at origin",
            ([1.0, 0.0, -1.0], [-1.0, 0.0, 1.0]),
            ([0.0, 1.0, 1.0], [0.0, -1.0, -1.0]),
            Some([0.0, 0.0, 0.0]),
        ),
        case(
            "offset in z",
            ([1.0, 0.0, 2.0], [-1.0, 0.0, 2.0]),
            ([0.0, 1.0, 0.0], [0.0, -1.0, 0.0]),
            None,
        ),
        case(
            "parallel, coplanar, apart",
            ([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            ([0.0, 1.0, 0.0], [1.0, 1.0, 0.0]),
            None,
        ),
        case(
            "lines meet beyond both segments",
            ([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
            ([2.0, 0.0, 0.0], [2.0, 1.0, 1.0]),
            None,
        ),
        case(
            "identical segments",
            ([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
            ([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
            Some([0.0, 0.0, 0.0]),
        ),
        case(
            "collinear, disjoint",
            ([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
            ([2.0, 2.0, 2.0], [3.0, 3.0, 3.0]),
            None,
        ),
        case(
            "collinear, touching ends",
            ([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
            ([1.0, 1.0, 1.0], [2.0, 2.0, 2.0]),
            Some([1.0, 1.0, 1.0]),
        ),
        case(
            "diagonals crossing at midpoint",
            ([-1.0, -1.0, 0.0], [1.0, 1.0, 0.0]),
            ([-1.0, 1.0, 0.0], [1.0, -1.0, 0.0]),
            Some([0.0, 0.0, 0.0]),
        ),
    ]
}

fn matches(result: &SegmentIntersection3<f64>, expected: &SegmentIntersection3<f64>) -> bool {
    match (result, expected) {
        (SegmentIntersection3::None, SegmentIntersection3::None) => true,
        (SegmentIntersection3::Point(p), SegmentIntersection3::Point(q)) => {
            p.approx_eq(q, <f64 as Scalar>::TOLERANCE)
        }
        _ => false,
    }
}

fn main() -> ExitCode {
    let mut passed = 0;
    let mut failed = 0;

    for (i, case) in reference_cases().iter().enumerate() {
        let result = case.first.intersect(&case.second);
        if matches(&result, &case.expected) {
            passed += 1;
            continue;
        }
        failed += 1;
        println!(
            "{i} ({}) failed\n Expected {} but got {}",
            case.name,
            case.expected.to_sentinel(),
            result.to_sentinel()
        );
    }

    println!("Testing ended. Tests passed: {passed}, Tests failed: {failed}");
    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
