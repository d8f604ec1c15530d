#![no_main]
mod fuzz_shared;
use fuzz_shared::{position, FuzzPoint};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<FuzzPoint>| {
    let hull = delahull::hull(&data);

    let mut distinct = hull.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(distinct.len(), hull.len());

    for index in &hull {
        assert!((*index as usize) < data.len());
        assert!(delahull::validate_vertex(&position(&data, *index)).is_ok());
    }

    if hull.len() < 3 {
        return;
    }

    for (i, from) in hull.iter().enumerate() {
        let from = position(&data, *from);
        let to = position(&data, hull[(i + 1) % hull.len()]);
        let after = position(&data, hull[(i + 2) % hull.len()]);
        assert!(delahull::side_query(from, to, after).is_on_left_side());

        for index in 0..data.len() as u32 {
            let point = position(&data, index);
            if delahull::validate_vertex(&point).is_err() {
                continue;
            }
            assert!(delahull::side_query(from, to, point).is_on_left_side_or_on_line());
        }
    }
});
