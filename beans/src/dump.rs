use itertools::Itertools;

use crate::bean::DataBean;

/// One human-readable line per bean field, in declaration order.
pub fn field_summary(bean: &DataBean) -> Vec<String> {
    let rect = bean.rectangle;
    let points = match &bean.points {
        Some(points) => format!("{} point(s)", points.len()),
        None => String::from("unset"),
    };
    let message = match &bean.inner.message {
        Some(message) => format!("\"{}\"", message),
        None => String::from("unset"),
    };
    let row_lengths = bean
        .double_dimension_array
        .iter()
        .map(|row| row.len())
        .join(", ");

    vec![
        format!(
            "rectangle: [{}, {}, {}, {}] ({}x{})",
            rect.left,
            rect.top,
            rect.right,
            rect.bottom,
            rect.width(),
            rect.height()
        ),
        format!("points: {}", points),
        format!("inner.message: {}", message),
        format!("id: {}", bean.id),
        format!("score: {}", bean.score),
        format!("data: {} byte(s)", bean.data.len()),
        format!("double_dimension_array: row lengths [{}]", row_lengths),
    ]
}

pub fn log_bean(bean: &DataBean) {
    for line in field_summary(bean) {
        log::debug!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_bean;

    #[test]
    fn summary_covers_every_field() {
        let lines = field_summary(&sample_bean(3, "hi"));

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "rectangle: [0, 0, 128, 72] (128x72)");
        assert_eq!(lines[1], "points: 3 point(s)");
        assert_eq!(lines[2], "inner.message: \"hi\"");
        assert_eq!(lines[3], "id: 1");
        assert_eq!(lines[4], "score: 0.5");
        assert_eq!(lines[5], "data: 3 byte(s)");
        assert_eq!(lines[6], "double_dimension_array: row lengths [1, 2, 3]");
    }

    #[test]
    fn unset_fields_are_reported_as_unset() {
        let lines = field_summary(&DataBean::default());

        assert_eq!(lines[1], "points: unset");
        assert_eq!(lines[2], "inner.message: unset");
        assert_eq!(lines[6], "double_dimension_array: row lengths []");
    }
}
