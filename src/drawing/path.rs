use crate::math::Point2;

/// Receiver of drawing-plane path commands.
///
/// Implemented by the rendering backend; the engine only emits geometry.
pub trait PathSink {
    fn move_to(&mut self, p: Point2);
    fn line_to(&mut self, p: Point2);
    fn close_path(&mut self);
}

/// A single path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point2),
    LineTo(Point2),
    ClosePath,
}

/// A [`PathSink`] that records every command.
#[derive(Debug, Clone, Default)]
pub struct PathRecorder {
    pub commands: Vec<PathCommand>,
}

impl PathRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sub-paths (one per `move_to`).
    #[must_use]
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count()
    }
}

impl PathSink for PathRecorder {
    fn move_to(&mut self, p: Point2) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point2) {
        self.commands.push(PathCommand::LineTo(p));
    }

    fn close_path(&mut self) {
        self.commands.push(PathCommand::ClosePath);
    }
}

/// An ordered drawing-plane path, open or closed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectedPath {
    pub points: Vec<Point2>,
    pub closed: bool,
}

impl ProjectedPath {
    #[must_use]
    pub fn open(points: Vec<Point2>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    #[must_use]
    pub fn closed(points: Vec<Point2>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Returns `true` if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.len() < 2
    }

    /// Emits the path as one sub-path. Empty paths emit nothing.
    pub fn emit(&self, sink: &mut dyn PathSink) {
        if self.is_empty() {
            return;
        }
        let mut points = self.points.iter().copied();
        if let Some(first) = points.next() {
            sink.move_to(first);
        }
        for p in points {
            sink.line_to(p);
        }
        if self.closed {
            sink.close_path();
        }
    }
}

/// Emits every path in order.
pub fn emit_all(paths: &[ProjectedPath], sink: &mut dyn PathSink) {
    for path in paths {
        path.emit(sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn closed_path_emits_close() {
        let path = ProjectedPath::closed(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);
        let mut rec = PathRecorder::new();
        path.emit(&mut rec);
        assert_eq!(
            rec.commands,
            vec![
                PathCommand::MoveTo(p(0.0, 0.0)),
                PathCommand::LineTo(p(1.0, 0.0)),
                PathCommand::LineTo(p(1.0, 1.0)),
                PathCommand::ClosePath,
            ]
        );
    }

    #[test]
    fn empty_paths_are_skipped() {
        let mut rec = PathRecorder::new();
        emit_all(
            &[
                ProjectedPath::open(vec![p(0.0, 0.0)]),
                ProjectedPath::open(vec![p(0.0, 0.0), p(2.0, 2.0)]),
            ],
            &mut rec,
        );
        assert_eq!(rec.subpath_count(), 1);
        assert_eq!(rec.commands.len(), 2);
    }
}
