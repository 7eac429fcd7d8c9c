use std::cell::RefCell;
use std::rc::Rc;

use touch_pinch::{
    PinchConfig, PinchEvent, PinchRecognizer, Point, SessionEnd, SessionStart, TouchFrame,
    TouchPoint,
};

#[derive(Debug, Default)]
struct MoveEvent {
    timestamp: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Seen {
    scale: f64,
    x: f64,
    y: f64,
    timestamp: u64,
}

type Log = Rc<RefCell<Vec<Seen>>>;

fn recognizer(config: PinchConfig) -> (PinchRecognizer<MoveEvent>, Log) {
    let log: Log = Rc::default();
    let sink = log.clone();
    let r = PinchRecognizer::with_config(config, move |e: &PinchEvent<'_, MoveEvent>| {
        sink.borrow_mut().push(Seen {
            scale: e.scale,
            x: e.x,
            y: e.y,
            timestamp: e.timestamp,
        });
    });
    (r, log)
}

fn tp(id: i32, x: f64, y: f64) -> TouchPoint {
    TouchPoint::new(id, x, y)
}

fn frame(touches: &[TouchPoint], changed: &[TouchPoint]) -> TouchFrame {
    TouchFrame::new(touches.to_vec(), changed.to_vec())
}

/// Two fingers down at (0,0) and (width,0).
fn open(r: &mut PinchRecognizer<MoveEvent>, width: f64) {
    let both = [tp(0, 0.0, 0.0), tp(1, width, 0.0)];
    assert!(r.touch_start(&frame(&both, &both)));
    assert!(r.is_pinching());
}

fn spread(r: &mut PinchRecognizer<MoveEvent>, width: f64) -> Option<f64> {
    let both = [tp(0, 0.0, 0.0), tp(1, width, 0.0)];
    r.touch_move(&frame(&both, &both[1..]), &MoveEvent { timestamp: 7 })
}

fn lift_all(r: &mut PinchRecognizer<MoveEvent>) {
    let both = [tp(0, 0.0, 0.0), tp(1, 0.0, 0.0)];
    r.touch_end(&frame(&[], &both));
}

#[test]
fn pinch_out_reports_scale_and_midpoint() {
    let (mut r, log) = recognizer(PinchConfig::default());
    open(&mut r, 10.0);
    assert_eq!(r.session().baseline_distance(), Some(10.0));
    assert_eq!(r.session().baseline_midpoint(), Some(Point::new(5.0, 0.0)));

    assert_eq!(spread(&mut r, 20.0), Some(2.0));
    assert_eq!(
        log.borrow().as_slice(),
        &[Seen {
            scale: 2.0,
            x: 10.0,
            y: 0.0,
            timestamp: 7
        }]
    );
    // Not committed until the session closes.
    assert_eq!(r.scale(), 1.0);
}

#[test]
fn closing_commits_and_next_session_composes() {
    let (mut r, log) = recognizer(PinchConfig::default());
    open(&mut r, 10.0);
    spread(&mut r, 20.0);
    lift_all(&mut r);
    assert!(!r.is_pinching());
    assert_eq!(r.finger_count(), 0);
    assert_eq!(r.scale(), 2.0);

    open(&mut r, 10.0);
    assert_eq!(spread(&mut r, 15.0), Some(3.0));
    lift_all(&mut r);
    assert_eq!(r.scale(), 3.0);

    // Pinch in: 3.0 * 0.5
    open(&mut r, 10.0);
    assert_eq!(spread(&mut r, 5.0), Some(1.5));
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn last_move_is_what_gets_committed() {
    let (mut r, _log) = recognizer(PinchConfig::default());
    open(&mut r, 10.0);
    spread(&mut r, 30.0);
    spread(&mut r, 25.0);
    let one_left = [tp(0, 0.0, 0.0)];
    r.touch_end(&frame(&one_left, &[tp(1, 25.0, 0.0)]));
    assert!(!r.is_pinching());
    assert_eq!(r.scale(), 2.5);
}

#[test]
fn move_without_session_is_ignored() {
    let (mut r, log) = recognizer(PinchConfig::default());
    let both = [tp(0, 0.0, 0.0), tp(1, 10.0, 0.0)];
    assert_eq!(r.touch_move(&frame(&both, &both), &MoveEvent::default()), None);
    assert!(log.borrow().is_empty());
    assert_eq!(r.finger_count(), 0);
    assert_eq!(r.scale(), 1.0);
}

#[test]
fn move_with_one_finger_is_ignored() {
    let (mut r, log) = recognizer(PinchConfig::default());
    let one = [tp(0, 3.0, 4.0)];
    r.touch_start(&frame(&one, &one));
    let moved = [tp(0, 8.0, 8.0)];
    assert_eq!(r.touch_move(&frame(&moved, &moved), &MoveEvent::default()), None);
    assert!(log.borrow().is_empty());
    assert_eq!(r.fingers().get(0), Some(Point::new(3.0, 4.0)));
}

#[test]
fn three_finger_start_does_not_open() {
    let (mut r, log) = recognizer(PinchConfig::default());
    let three = [tp(0, 0.0, 0.0), tp(1, 10.0, 0.0), tp(2, 0.0, 10.0)];
    r.touch_start(&frame(&three, &three));
    assert!(!r.is_pinching());
    assert_eq!(r.finger_count(), 3);
    assert_eq!(r.touch_move(&frame(&three, &three), &MoveEvent::default()), None);
    assert!(log.borrow().is_empty());
}

#[test]
fn third_finger_closes_running_session() {
    let (mut r, _log) = recognizer(PinchConfig::default());
    open(&mut r, 10.0);
    spread(&mut r, 40.0);
    let three = [tp(0, 0.0, 0.0), tp(1, 40.0, 0.0), tp(2, 5.0, 5.0)];
    r.touch_start(&frame(&three, &three[2..]));
    assert!(!r.is_pinching());
    assert_eq!(r.scale(), 4.0);
}

#[test]
fn fingers_arriving_one_at_a_time_open_a_session() {
    let (mut r, log) = recognizer(PinchConfig::default());
    let first = [tp(3, 0.0, 0.0)];
    assert!(!r.touch_start(&frame(&first, &first)));
    let both = [tp(3, 0.0, 0.0), tp(8, 0.0, 10.0)];
    assert!(r.touch_start(&frame(&both, &both[1..])));
    assert!(r.is_pinching());

    let moved = [tp(3, 0.0, 0.0), tp(8, 0.0, 30.0)];
    assert_eq!(r.touch_move(&frame(&moved, &moved[1..]), &MoveEvent::default()), Some(3.0));
    assert_eq!((log.borrow()[0].x, log.borrow()[0].y), (0.0, 15.0));
}

#[test]
fn stale_fingers_are_purged_on_start() {
    let (mut r, _log) = recognizer(PinchConfig::default());
    // Finger 5's end frame never arrived.
    let lost = [tp(5, 50.0, 50.0)];
    r.touch_start(&frame(&lost, &lost));
    let both = [tp(0, 0.0, 0.0), tp(1, 10.0, 0.0)];
    r.touch_start(&frame(&both, &both));
    assert_eq!(r.finger_count(), 2);
    assert!(!r.fingers().contains(5));
    assert!(r.is_pinching());
}

#[test]
fn unknown_changed_fingers_are_skipped_on_move() {
    let (mut r, _log) = recognizer(PinchConfig::default());
    open(&mut r, 10.0);
    let moved = [tp(0, 0.0, 0.0), tp(1, 20.0, 0.0)];
    let changed = [tp(1, 20.0, 0.0), tp(42, 99.0, 99.0)];
    assert_eq!(r.touch_move(&frame(&moved, &changed), &MoveEvent::default()), Some(2.0));
    assert!(!r.fingers().contains(42));
}

#[test]
fn coincident_fingers_give_non_finite_scale() {
    let (mut r, log) = recognizer(PinchConfig::default());
    let same = [tp(0, 4.0, 4.0), tp(1, 4.0, 4.0)];
    r.touch_start(&frame(&same, &same));
    assert_eq!(r.session().baseline_distance(), Some(0.0));

    let apart = [tp(0, 4.0, 4.0), tp(1, 9.0, 4.0)];
    let scale = r.touch_move(&frame(&apart, &apart), &MoveEvent::default());
    assert!(scale.is_some_and(|s| !s.is_finite()));
    assert_eq!(log.borrow().len(), 1);
}

// Finger 9 is down on another element: present in `touches` but never tracked.

#[test]
fn leaves_pair_keeps_session_when_untracked_finger_lifts() {
    let (mut r, _log) = recognizer(PinchConfig::default());
    let with_foreign = [tp(0, 0.0, 0.0), tp(1, 10.0, 0.0), tp(9, 300.0, 300.0)];
    r.touch_start(&frame(&with_foreign, &with_foreign[..2]));
    // Three native touches: no session under the default start policy.
    assert!(!r.is_pinching());

    let config = PinchConfig::default().with_session_start(SessionStart::TrackedPair);
    let (mut r, _log) = recognizer(config);
    r.touch_start(&frame(&with_foreign, &with_foreign[..2]));
    assert!(r.is_pinching());
    r.touch_end(&frame(&with_foreign[..2], &with_foreign[2..]));
    assert!(r.is_pinching());
}

#[test]
fn any_lift_closes_on_every_end_frame() {
    let config = PinchConfig::default()
        .with_session_start(SessionStart::TrackedPair)
        .with_session_end(SessionEnd::AnyLift);
    let (mut r, _log) = recognizer(config);
    let with_foreign = [tp(0, 0.0, 0.0), tp(1, 10.0, 0.0), tp(9, 300.0, 300.0)];
    r.touch_start(&frame(&with_foreign, &with_foreign[..2]));
    assert!(r.is_pinching());
    let moved = [tp(0, 0.0, 0.0), tp(1, 15.0, 0.0), tp(9, 300.0, 300.0)];
    assert_eq!(r.touch_move(&frame(&moved, &moved[1..2]), &MoveEvent::default()), Some(1.5));

    r.touch_end(&frame(&moved[..2], &moved[2..]));
    assert!(!r.is_pinching());
    assert_eq!(r.finger_count(), 2);
    assert_eq!(r.scale(), 1.5);
}

#[test]
fn cancel_closes_like_end() {
    let (mut r, _log) = recognizer(PinchConfig::default());
    open(&mut r, 10.0);
    spread(&mut r, 20.0);
    let both = [tp(0, 0.0, 0.0), tp(1, 20.0, 0.0)];
    r.touch_cancel(&frame(&[], &both));
    assert!(!r.is_pinching());
    assert_eq!(r.scale(), 2.0);
}

#[test]
fn empty_end_frame_is_harmless() {
    let (mut r, _log) = recognizer(PinchConfig::default());
    r.touch_end(&TouchFrame::default());
    assert!(!r.is_pinching());
    assert_eq!(r.scale(), 1.0);
}
