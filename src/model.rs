//! Demo state: what the pinch stage last reported.

use std::collections::VecDeque;
use std::rc::Rc;
use yew::Reducible;

const HISTORY_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct Readout {
    pub scale: f64,
    pub x: f64,
    pub y: f64,
    pub moves: u32,
    /// Most recent scales, newest last.
    pub history: VecDeque<f64>,
}

impl Default for Readout {
    fn default() -> Self {
        Self {
            scale: 1.0,
            x: 0.0,
            y: 0.0,
            moves: 0,
            history: VecDeque::with_capacity(HISTORY_LEN),
        }
    }
}

pub enum ReadoutAction {
    Gesture { scale: f64, x: f64, y: f64 },
    Clear,
}

impl Reducible for Readout {
    type Action = ReadoutAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ReadoutAction::*;
        match action {
            Gesture { scale, x, y } => {
                let mut new = (*self).clone();
                new.scale = scale;
                new.x = x;
                new.y = y;
                new.moves = new.moves.saturating_add(1);
                if new.history.len() == HISTORY_LEN {
                    new.history.pop_front();
                }
                new.history.push_back(scale);
                Rc::new(new)
            }
            Clear => Rc::new(Readout::default()),
        }
    }
}
