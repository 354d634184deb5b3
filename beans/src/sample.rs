use crate::bean::{DataBean, Inner};
use crate::geometry::{point_f, rect};

/// How many rows the demonstration jagged array gets. Row `r` holds
/// `r + 1` values so no two rows share a length.
const GRID_ROWS: usize = 3;

/// Builds a fully-populated demonstration bean. Deterministic: the same
/// arguments always produce the same bean.
pub fn sample_bean(point_count: usize, message: &str) -> DataBean {
    let points = (0..point_count)
        .map(|i| point_f(i as f32, i as f32 * 0.5))
        .collect();

    let data = (0..point_count).map(|i| i as u8).collect();

    let double_dimension_array = (0..GRID_ROWS)
        .map(|row| (0..=row).map(|col| (row * 10 + col) as i32).collect())
        .collect();

    DataBean {
        rectangle: rect(0, 0, 128, 72),
        points: Some(points),
        inner: Inner {
            message: Some(String::from(message)),
        },
        id: 1,
        score: 0.5,
        data,
        double_dimension_array,
    }
}
