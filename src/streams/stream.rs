use crate::core::points::Point;

/// Pull-based source of sample points.
///
/// Implementations may be finite (scripted sequences) or unbounded random
/// generators. Pulling a point has no side effect other than advancing the
/// source.
pub trait Stream {
    /// Indicates whether the stream *may* produce more points.
    ///
    /// Unbounded generators return `true` always. If this returns `false`,
    /// a subsequent call to [`next_point`](Stream::next_point) must return
    /// `None`.
    fn has_more_points(&self) -> bool;

    /// Produces the next point, or `None` if the stream is exhausted.
    fn next_point(&mut self) -> Option<Point>;

    /// Rewinds the stream to its initial state.
    ///
    /// Generators re-seed their RNG, so the same sequence is produced again.
    fn restart(&mut self);
}

impl<S: Stream + ?Sized> Stream for Box<S> {
    fn has_more_points(&self) -> bool {
        (**self).has_more_points()
    }

    fn next_point(&mut self) -> Option<Point> {
        (**self).next_point()
    }

    fn restart(&mut self) {
        (**self).restart()
    }
}
