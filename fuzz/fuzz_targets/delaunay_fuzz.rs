#![no_main]
mod fuzz_shared;
use std::collections::HashSet;

use fuzz_shared::{is_well_shaped, position, relative_intrusion, FuzzPoint};
use libfuzzer_sys::fuzz_target;

/// Bound for points intruding circumcircles of well shaped triangles, relative to the
/// circumradius. Only cocircular points within the tolerance band may intrude at all.
const MAX_RELATIVE_INTRUSION: f64 = 1.0e-3;

fuzz_target!(|data: Vec<FuzzPoint>| {
    let triangles = delahull::delaunay(&data);
    assert_eq!(triangles, delahull::delaunay(&data));

    let valid: Vec<u32> = (0..data.len() as u32)
        .filter(|index| delahull::validate_vertex(&position(&data, *index)).is_ok())
        .collect();

    let mut directed_edges = HashSet::new();
    for triangle in &triangles {
        assert!(triangle.iter().all(|index| (*index as usize) < data.len()));
        assert!(triangle[0] < triangle[1] && triangle[0] < triangle[2]);

        let corners = triangle.map(|index| position(&data, index));
        let [v0, v1, v2] = corners;
        assert!(delahull::side_query(v0, v1, v2).is_on_left_side());

        for i in 0..3 {
            assert!(directed_edges.insert((triangle[i], triangle[(i + 1) % 3])));
        }

        if !is_well_shaped(corners) {
            continue;
        }
        for index in &valid {
            let point = position(&data, *index);
            if corners.contains(&point) {
                continue;
            }
            let intrusion = relative_intrusion(corners, point);
            assert!(
                intrusion <= MAX_RELATIVE_INTRUSION,
                "{:?} lies {} circumradii inside the circumcircle of {:?}",
                point,
                intrusion,
                triangle
            );
        }
    }
});
