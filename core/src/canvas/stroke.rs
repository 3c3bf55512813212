use crate::canvas::mapper::Point;

/// One committed line segment of a stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Press/move/release stroke capture.
///
/// The last committed point only exists while a stroke is in progress, so it
/// lives inside the `Drawing` variant and cannot be observed from `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeTracker {
    #[default]
    Idle,
    Drawing {
        last: Point,
    },
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self::Idle
    }

    /// Starts a stroke at `point`. A press that arrives mid-stroke
    /// re-anchors without committing a segment, matching a re-acquired
    /// pointer capture.
    pub fn press(&mut self, point: Point) {
        *self = Self::Drawing { last: point };
    }

    /// Advances the stroke by one sample. Returns the segment to commit, or
    /// `None` when no stroke is in progress. Each call commits exactly one
    /// segment; samples are not interpolated or smoothed.
    pub fn motion(&mut self, point: Point) -> Option<Segment> {
        match *self {
            Self::Idle => None,
            Self::Drawing { last } => {
                *self = Self::Drawing { last: point };
                Some(Segment {
                    from: last,
                    to: point,
                })
            }
        }
    }

    /// Ends the stroke. Covers both a pointer release and the pointer
    /// leaving the surface without one; either way a later motion commits
    /// nothing until the next press.
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn motion_while_idle_commits_nothing() {
        let mut tracker = StrokeTracker::new();
        assert_eq!(tracker.motion(p(10.0, 10.0)), None);
        assert!(!tracker.is_drawing());
    }

    #[test]
    fn each_motion_commits_exactly_one_segment() {
        let mut tracker = StrokeTracker::new();
        tracker.press(p(0.0, 0.0));

        let first = tracker.motion(p(3.0, 4.0)).unwrap();
        assert_eq!(first.from, p(0.0, 0.0));
        assert_eq!(first.to, p(3.0, 4.0));

        let second = tracker.motion(p(5.0, 5.0)).unwrap();
        assert_eq!(second.from, p(3.0, 4.0));
        assert_eq!(second.to, p(5.0, 5.0));
    }

    #[test]
    fn no_segments_after_finish_until_next_press() {
        let mut tracker = StrokeTracker::new();
        tracker.press(p(1.0, 1.0));
        assert!(tracker.motion(p(2.0, 2.0)).is_some());

        tracker.finish();
        assert_eq!(tracker.motion(p(3.0, 3.0)), None);

        tracker.press(p(7.0, 7.0));
        let segment = tracker.motion(p(8.0, 8.0)).unwrap();
        assert_eq!(segment.from, p(7.0, 7.0));
    }

    #[test]
    fn press_mid_stroke_reanchors_without_a_segment() {
        let mut tracker = StrokeTracker::new();
        tracker.press(p(0.0, 0.0));
        assert!(tracker.motion(p(10.0, 0.0)).is_some());

        tracker.press(p(100.0, 100.0));
        assert!(tracker.is_drawing());

        let segment = tracker.motion(p(101.0, 101.0)).unwrap();
        assert_eq!(segment.from, p(100.0, 100.0));
    }

    #[test]
    fn leave_without_release_goes_idle() {
        let mut tracker = StrokeTracker::new();
        tracker.press(p(0.0, 0.0));
        tracker.finish();
        assert!(!tracker.is_drawing());
        assert_eq!(tracker.motion(p(1.0, 1.0)), None);
    }
}
