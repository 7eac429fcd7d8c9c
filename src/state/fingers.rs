// Finger positions tracked between touch frames
use std::collections::BTreeMap;

use crate::event::{TouchId, TouchPoint};
use crate::geometry::Point;

/// Last known position of every finger the recognizer believes is down.
///
/// Ordered by identifier so the pair used for geometry is stable across frames.
#[derive(Default, Debug, Clone)]
pub struct FingerMap {
    fingers: BTreeMap<TouchId, Point>,
}

impl FingerMap {
    pub fn len(&self) -> usize {
        self.fingers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fingers.is_empty()
    }

    pub fn contains(&self, id: TouchId) -> bool {
        self.fingers.contains_key(&id)
    }

    pub fn get(&self, id: TouchId) -> Option<Point> {
        self.fingers.get(&id).copied()
    }

    /// Records (or overwrites) a finger's position.
    pub fn insert(&mut self, touch: &TouchPoint) {
        self.fingers.insert(touch.id, touch.position());
    }

    /// Updates a finger that is already tracked. Unknown ids are ignored.
    pub fn update(&mut self, touch: &TouchPoint) -> bool {
        match self.fingers.get_mut(&touch.id) {
            Some(pos) => {
                *pos = touch.position();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: TouchId) -> Option<Point> {
        self.fingers.remove(&id)
    }

    /// Drops every finger whose id is absent from `down`, returning how many went.
    pub fn retain_down(&mut self, down: &[TouchPoint]) -> usize {
        let before = self.fingers.len();
        self.fingers
            .retain(|id, _| down.iter().any(|t| t.id == *id));
        before - self.fingers.len()
    }

    /// The two tracked positions, only when exactly two fingers are tracked.
    pub fn pair(&self) -> Option<(Point, Point)> {
        if self.fingers.len() != 2 {
            return None;
        }
        let mut it = self.fingers.values().copied();
        Some((it.next()?, it.next()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tp(id: TouchId, x: f64, y: f64) -> TouchPoint {
        TouchPoint { id, x, y }
    }

    #[test]
    fn pair_requires_exactly_two() {
        let mut map = FingerMap::default();
        assert!(map.pair().is_none());
        map.insert(&tp(4, 1.0, 1.0));
        assert!(map.pair().is_none());
        map.insert(&tp(2, 9.0, 9.0));
        assert_eq!(map.pair(), Some((Point::new(9.0, 9.0), Point::new(1.0, 1.0))));
        map.insert(&tp(7, 0.0, 0.0));
        assert!(map.pair().is_none());
    }

    #[test]
    fn update_skips_unknown_fingers() {
        let mut map = FingerMap::default();
        map.insert(&tp(1, 0.0, 0.0));
        assert!(!map.update(&tp(5, 3.0, 3.0)));
        assert!(map.update(&tp(1, 2.0, 2.0)));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(1), Some(Point::new(2.0, 2.0)));
    }

    #[test]
    fn retain_down_purges_stale_entries() {
        let mut map = FingerMap::default();
        map.insert(&tp(1, 0.0, 0.0));
        map.insert(&tp(2, 5.0, 0.0));
        map.insert(&tp(3, 9.0, 0.0));
        let purged = map.retain_down(&[tp(2, 5.0, 0.0)]);
        assert_eq!(purged, 2);
        assert!(map.contains(2));
        assert!(!map.contains(1));
    }
}
