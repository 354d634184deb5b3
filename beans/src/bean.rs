use crate::geometry::{PointF, Rect};

/// Plain bundle of heterogeneous sample values. All fields are public and
/// independently mutable; the struct itself enforces nothing and computes
/// nothing. Downstream display and comparison code owns any interpretation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataBean {
    pub rectangle: Rect,
    /// `None` models the not-yet-populated state, distinct from an empty list.
    pub points: Option<Vec<PointF>>,
    pub inner: Inner,
    pub id: i32,
    pub score: f32,
    pub data: Vec<u8>,
    /// Jagged: rows vary in length independently.
    pub double_dimension_array: Vec<Vec<i32>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inner {
    pub message: Option<String>,
}
