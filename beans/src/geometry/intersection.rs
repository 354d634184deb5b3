use super::{PointF, Rect};

pub fn point_is_inside_rect(point: PointF, rect: Rect) -> bool {
    let horizontal_overlap = rect.left as f32 <= point.x && point.x <= rect.right as f32;
    let vertical_overlap = rect.top as f32 <= point.y && point.y <= rect.bottom as f32;

    horizontal_overlap && vertical_overlap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{point_f, rect};

    #[test]
    fn point_outside_rect() {
        //   0 1 2 3
        // 0 ┌───┐
        // 1 │   │ o
        // 2 └───┘
        let rect = rect(0, 0, 2, 2);
        let point = point_f(3.0, 1.0);
        assert!(!point_is_inside_rect(point, rect))
    }

    #[test]
    fn point_on_rect_side() {
        //   0 1 2 3
        // 0 ┌───┐
        // 1 │   o
        // 2 └───┘
        let rect = rect(0, 0, 2, 2);
        let point = point_f(2.0, 1.0);
        assert!(point_is_inside_rect(point, rect))
    }

    #[test]
    fn point_inside_rect() {
        //   0 1 2 3
        // 0 ┌───┐
        // 1 │ o │
        // 2 └───┘
        let rect = rect(0, 0, 2, 2);
        let point = point_f(1.0, 1.0);
        assert!(point_is_inside_rect(point, rect))
    }
}
