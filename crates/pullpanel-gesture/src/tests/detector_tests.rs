use super::*;
use crate::constants::TOUCH_SLOP;

fn sample(action: PointerAction, y: f32, time: i64) -> PointerSample {
    PointerSample::new(action, 100.0, y, time)
}

fn detector_with(conditions: ScrollConditions, ignore_slop: bool) -> SwipeDetector {
    let mut detector = SwipeDetector::default();
    detector.set_scroll_conditions(conditions, ignore_slop);
    detector
}

fn feed(detector: &mut SwipeDetector, queue: &mut DragEventQueue, samples: &[PointerSample]) {
    for sample in samples {
        assert!(detector.on_pointer_event(sample, queue));
    }
}

fn drag_displacements(queue: &DragEventQueue) -> Vec<f32> {
    queue
        .events()
        .iter()
        .filter_map(|event| match event {
            DragEvent::Drag { displacement, .. } => Some(*displacement),
            _ => None,
        })
        .collect()
}

#[test]
fn starts_idle() {
    let detector = SwipeDetector::default();
    assert!(detector.is_idle());
    assert!(!detector.is_dragging_or_settling());
    assert_eq!(detector.active_pointer(), None);
}

#[test]
fn movement_within_slop_stays_idle() {
    let mut detector = detector_with(ScrollConditions::BOTH, false);
    let mut queue = DragEventQueue::new();

    feed(
        &mut detector,
        &mut queue,
        &[
            sample(PointerAction::Down, 500.0, 0),
            sample(PointerAction::Move, 506.0, 100),
            sample(PointerAction::Move, 500.0 - TOUCH_SLOP, 200),
        ],
    );

    assert!(detector.is_idle());
    assert!(queue.is_empty());
}

#[test]
fn upward_drag_past_slop_starts_dragging() {
    let mut detector = detector_with(ScrollConditions::POSITIVE, false);
    let mut queue = DragEventQueue::new();

    feed(
        &mut detector,
        &mut queue,
        &[
            sample(PointerAction::Down, 500.0, 0),
            sample(PointerAction::Move, 480.0, 100),
        ],
    );

    assert!(detector.is_dragging());
    assert_eq!(
        queue.events()[0],
        DragEvent::DragStart { is_new_drag: true }
    );
    // Slop is removed so the consumer starts close to zero.
    assert_eq!(drag_displacements(&queue), vec![-20.0 + TOUCH_SLOP]);
}

#[test]
fn disallowed_direction_does_not_start() {
    let mut detector = detector_with(ScrollConditions::POSITIVE, false);
    let mut queue = DragEventQueue::new();

    feed(
        &mut detector,
        &mut queue,
        &[
            sample(PointerAction::Down, 500.0, 0),
            sample(PointerAction::Move, 530.0, 200),
        ],
    );

    assert!(!detector.is_dragging());
    assert!(!queue
        .events()
        .iter()
        .any(|event| matches!(event, DragEvent::DragStart { .. })));
}

#[test]
fn cross_axis_wander_raises_slop() {
    let mut detector = detector_with(ScrollConditions::POSITIVE, false);
    let mut queue = DragEventQueue::new();

    feed(
        &mut detector,
        &mut queue,
        &[
            PointerSample::new(PointerAction::Down, 100.0, 500.0, 0),
            PointerSample::new(PointerAction::Move, 140.0, 480.0, 100),
        ],
    );
    assert!(detector.is_idle());

    feed(
        &mut detector,
        &mut queue,
        &[PointerSample::new(PointerAction::Move, 140.0, 450.0, 200)],
    );
    assert!(detector.is_dragging());
}

#[test]
fn unchanged_displacement_is_not_reported_twice() {
    let mut detector = detector_with(ScrollConditions::POSITIVE, false);
    let mut queue = DragEventQueue::new();

    feed(
        &mut detector,
        &mut queue,
        &[
            sample(PointerAction::Down, 500.0, 0),
            sample(PointerAction::Move, 470.0, 16),
            sample(PointerAction::Move, 470.0, 32),
            sample(PointerAction::Move, 460.0, 48),
        ],
    );

    assert_eq!(drag_displacements(&queue).len(), 2);
}

#[test]
fn down_resets_displacement_and_velocity() {
    let mut detector = detector_with(ScrollConditions::POSITIVE, false);
    let mut queue = DragEventQueue::new();

    feed(
        &mut detector,
        &mut queue,
        &[
            sample(PointerAction::Down, 500.0, 0),
            sample(PointerAction::Move, 400.0, 16),
            sample(PointerAction::Up, 400.0, 32),
        ],
    );
    assert!(detector.velocity() != 0.0);
    detector.finished_scrolling();

    feed(
        &mut detector,
        &mut queue,
        &[sample(PointerAction::Down, 300.0, 1_000)],
    );

    assert_eq!(detector.displacement(), 0.0);
    assert_eq!(detector.velocity(), 0.0);
}

#[test]
fn release_reports_end_and_settles() {
    let mut detector = detector_with(ScrollConditions::POSITIVE, false);
    let mut queue = DragEventQueue::new();

    feed(
        &mut detector,
        &mut queue,
        &[
            sample(PointerAction::Down, 500.0, 0),
            sample(PointerAction::Move, 480.0, 100),
            sample(PointerAction::Move, 470.0, 200),
            sample(PointerAction::Up, 470.0, 210),
        ],
    );

    assert!(detector.is_settling());
    match queue.events().last() {
        Some(DragEvent::DragEnd { velocity, is_fling }) => {
            assert!(*velocity < 0.0);
            assert!(!is_fling);
        }
        other => panic!("expected drag end, got {other:?}"),
    }

    detector.finished_scrolling();
    assert!(detector.is_idle());
    detector.finished_scrolling();
    assert!(detector.is_idle());
}

#[test]
fn fast_release_is_a_fling() {
    let mut detector = detector_with(ScrollConditions::POSITIVE, false);
    let mut queue = DragEventQueue::new();

    feed(
        &mut detector,
        &mut queue,
        &[
            sample(PointerAction::Down, 800.0, 0),
            sample(PointerAction::Move, 760.0, 16),
            sample(PointerAction::Move, 720.0, 32),
            sample(PointerAction::Cancel, 720.0, 40),
        ],
    );

    assert!(matches!(
        queue.events().last(),
        Some(DragEvent::DragEnd { is_fling: true, .. })
    ));
}

#[test]
fn release_at_exactly_threshold_is_not_a_fling() {
    let mut detector = detector_with(ScrollConditions::POSITIVE, false);
    let mut queue = DragEventQueue::new();

    // A single move: the cold start takes -16px / 16ms = -1.0 px/ms exactly.
    feed(
        &mut detector,
        &mut queue,
        &[
            sample(PointerAction::Down, 500.0, 0),
            sample(PointerAction::Move, 484.0, 16),
            sample(PointerAction::Up, 484.0, 20),
        ],
    );

    assert_eq!(
        queue.events().last(),
        Some(&DragEvent::DragEnd {
            velocity: -1.0,
            is_fling: false
        })
    );
}

#[test]
fn recatch_on_down_while_settling() {
    let mut detector = detector_with(ScrollConditions::POSITIVE, false);
    let mut queue = DragEventQueue::new();

    feed(
        &mut detector,
        &mut queue,
        &[
            sample(PointerAction::Down, 500.0, 0),
            sample(PointerAction::Move, 450.0, 100),
            sample(PointerAction::Up, 450.0, 110),
        ],
    );
    assert!(detector.is_settling());

    detector.set_scroll_conditions(ScrollConditions::BOTH, true);
    queue.drain().for_each(drop);
    feed(
        &mut detector,
        &mut queue,
        &[sample(PointerAction::Down, 300.0, 200)],
    );

    assert!(detector.is_dragging());
    assert_eq!(
        queue.events(),
        &[DragEvent::DragStart { is_new_drag: false }]
    );

    // No slop was consumed, so motion is reported from zero.
    feed(
        &mut detector,
        &mut queue,
        &[sample(PointerAction::Move, 295.0, 216)],
    );
    assert_eq!(drag_displacements(&queue), vec![-5.0]);
}

#[test]
fn down_while_settling_without_ignore_slop_waits_for_gate() {
    let mut detector = detector_with(ScrollConditions::POSITIVE, false);
    let mut queue = DragEventQueue::new();

    feed(
        &mut detector,
        &mut queue,
        &[
            sample(PointerAction::Down, 500.0, 0),
            sample(PointerAction::Move, 450.0, 100),
            sample(PointerAction::Up, 450.0, 110),
            sample(PointerAction::Down, 450.0, 200),
        ],
    );
    assert!(detector.is_settling());

    queue.drain().for_each(drop);
    feed(
        &mut detector,
        &mut queue,
        &[sample(PointerAction::Move, 420.0, 300)],
    );
    assert!(detector.is_dragging());
    assert_eq!(
        queue.events()[0],
        DragEvent::DragStart { is_new_drag: false }
    );
}

#[test]
fn two_direction_mode_enters_dragging_down() {
    let mut detector = detector_with(ScrollConditions::POSITIVE, false);
    detector.set_two_direction(true);
    let mut queue = DragEventQueue::new();

    feed(
        &mut detector,
        &mut queue,
        &[
            sample(PointerAction::Down, 500.0, 0),
            sample(PointerAction::Move, 540.0, 100),
            sample(PointerAction::Move, 560.0, 200),
            sample(PointerAction::Up, 560.0, 210),
        ],
    );

    assert!(detector.is_settling());
    let events = queue.events();
    assert_eq!(events[0], DragEvent::DragStartDown { is_new_drag: true });
    assert!(matches!(
        events[1],
        DragEvent::DragDown { displacement, .. } if displacement == 40.0 - TOUCH_SLOP
    ));
    assert!(matches!(events.last(), Some(DragEvent::DragEndDown { .. })));
}

#[test]
fn fast_downward_motion_starts_downward_drag_without_slop() {
    let mut detector = detector_with(ScrollConditions::POSITIVE, false);
    let mut queue = DragEventQueue::new();

    // 6px in 4ms is 1.5 px/ms, below the slop distance.
    feed(
        &mut detector,
        &mut queue,
        &[
            sample(PointerAction::Down, 500.0, 0),
            sample(PointerAction::Move, 506.0, 4),
        ],
    );

    assert!(detector.is_dragging_down());
    assert_eq!(
        queue.events(),
        &[DragEvent::DragStartDown { is_new_drag: true }]
    );

    // Downward drags are not reported outside two-direction mode.
    feed(
        &mut detector,
        &mut queue,
        &[
            sample(PointerAction::Move, 520.0, 8),
            sample(PointerAction::Up, 520.0, 12),
        ],
    );
    assert!(detector.is_settling());
    assert!(matches!(
        queue.events().last(),
        Some(DragEvent::DragEndDown { .. })
    ));
    assert!(!queue
        .events()
        .iter()
        .any(|event| matches!(event, DragEvent::DragDown { .. })));
}

#[test]
fn pointer_hand_off_keeps_displacement_continuous() {
    let mut detector = detector_with(ScrollConditions::POSITIVE, false);
    let mut queue = DragEventQueue::new();

    feed(
        &mut detector,
        &mut queue,
        &[
            sample(PointerAction::Down, 500.0, 0),
            sample(PointerAction::PointerDown, 700.0, 10).with_pointer(1),
            sample(PointerAction::Move, 460.0, 16),
            sample(PointerAction::Move, 690.0, 20).with_pointer(1),
            sample(PointerAction::PointerUp, 460.0, 30),
        ],
    );
    assert_eq!(detector.active_pointer(), Some(1));
    assert_eq!(detector.displacement(), -40.0);

    feed(
        &mut detector,
        &mut queue,
        &[sample(PointerAction::Move, 680.0, 40).with_pointer(1)],
    );

    assert!(detector.is_dragging());
    assert_eq!(detector.displacement(), -50.0);
    assert_eq!(
        drag_displacements(&queue),
        vec![-40.0 + TOUCH_SLOP, -50.0 + TOUCH_SLOP]
    );
}

#[test]
fn moves_from_untracked_pointers_are_ignored() {
    let mut detector = detector_with(ScrollConditions::POSITIVE, false);
    let mut queue = DragEventQueue::new();

    feed(
        &mut detector,
        &mut queue,
        &[
            sample(PointerAction::Down, 500.0, 0),
            sample(PointerAction::Move, 100.0, 16).with_pointer(7),
        ],
    );

    assert!(detector.is_idle());
    assert_eq!(detector.displacement(), 0.0);
    assert!(queue.is_empty());
}

#[test]
fn horizontal_axis_uses_x() {
    let mut detector = SwipeDetector::new(SwipeConfig::default().with_axis(Axis::Horizontal));
    detector.set_scroll_conditions(ScrollConditions::NEGATIVE, false);
    let mut queue = DragEventQueue::new();

    feed(
        &mut detector,
        &mut queue,
        &[
            PointerSample::new(PointerAction::Down, 100.0, 300.0, 0),
            PointerSample::new(PointerAction::Move, 130.0, 302.0, 100),
        ],
    );

    assert!(detector.is_dragging());
    assert_eq!(drag_displacements(&queue), vec![30.0 - TOUCH_SLOP]);
}
