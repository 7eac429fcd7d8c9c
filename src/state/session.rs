// Pinch session state
use crate::geometry::Point;

/// Whether a pinch is in progress, and the baseline it is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Session {
    #[default]
    Idle,
    Pinching {
        /// Finger separation when the session opened.
        baseline_distance: f64,
        /// Finger midpoint when the session opened.
        baseline_midpoint: Point,
        /// Scale reported by the latest move; committed when the session closes.
        last_scale: f64,
    },
}

impl Session {
    pub fn is_pinching(&self) -> bool {
        matches!(self, Session::Pinching { .. })
    }

    pub fn baseline_distance(&self) -> Option<f64> {
        match self {
            Session::Pinching {
                baseline_distance, ..
            } => Some(*baseline_distance),
            Session::Idle => None,
        }
    }

    pub fn baseline_midpoint(&self) -> Option<Point> {
        match self {
            Session::Pinching {
                baseline_midpoint, ..
            } => Some(*baseline_midpoint),
            Session::Idle => None,
        }
    }
}
