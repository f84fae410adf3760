use crate::core::points::Point;

/// `inside` copies of the centre followed by `outside` copies of a corner.
pub fn inside_outside_script(inside: usize, outside: usize) -> Vec<Point> {
    let mut points = vec![Point::new(0.5, 0.5); inside];
    points.extend(std::iter::repeat_n(Point::new(0.0, 0.0), outside));
    points
}
