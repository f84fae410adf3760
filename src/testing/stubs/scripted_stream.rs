use crate::core::points::Point;
use crate::streams::Stream;

/// Replays a fixed list of points, then runs dry.
pub struct ScriptedStream {
    pub points: Vec<Point>,
    idx: usize,
}

impl ScriptedStream {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points, idx: 0 }
    }
}

impl Stream for ScriptedStream {
    fn has_more_points(&self) -> bool {
        self.idx < self.points.len()
    }

    fn next_point(&mut self) -> Option<Point> {
        let p = self.points.get(self.idx).copied()?;
        self.idx += 1;
        Some(p)
    }

    fn restart(&mut self) {
        self.idx = 0;
    }
}
