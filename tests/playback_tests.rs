// Integration tests for the playback controller

use algoscope::algorithms::{build_history, InvalidInputError};
use algoscope::config::tick_delay;
use algoscope::input::{AlgorithmInput, Family, Graph};
use algoscope::playback::{Controller, PlaybackState};
use algoscope::snapshot::{Highlights, History, Outcome, Recorder};
use std::time::{Duration, Instant};

const DELAY: Duration = Duration::from_millis(10);

fn bubble_history() -> History {
    build_history(Family::Bubble, &AlgorithmInput::Sequence(vec![3, 1, 2])).unwrap()
}

fn ready_controller() -> Controller {
    let mut controller = Controller::seeded(Family::Bubble, 7).with_delay(DELAY);
    controller.initialize(bubble_history());
    controller
}

#[test]
fn test_new_controller_is_idle() {
    let mut controller = Controller::seeded(Family::Bubble, 1);

    assert_eq!(controller.current_state(), PlaybackState::Idle);
    assert!(controller.current_snapshot().is_none());
    assert!(!controller.step());
    assert!(!controller.start(Instant::now()));
    assert!(!controller.pause());
    assert_eq!(controller.delay(), Duration::from_millis(100));
}

#[test]
fn test_initialize_goes_ready_at_first_snapshot() {
    let controller = ready_controller();

    assert_eq!(controller.current_state(), PlaybackState::Ready);
    assert_eq!(controller.cursor(), Some(0));
    assert_eq!(
        controller.current_snapshot(),
        Some(bubble_history().first())
    );
}

#[test]
fn test_step_from_ready_pauses_and_concludes_at_end() {
    let mut controller = ready_controller();
    let total = bubble_history().len();

    assert!(controller.step());
    assert_eq!(controller.current_state(), PlaybackState::Paused);
    assert_eq!(controller.cursor(), Some(1));

    while controller.step() {}
    assert_eq!(controller.current_state(), PlaybackState::Concluded);
    assert_eq!(controller.cursor(), Some(total - 1));

    // Concluded never advances
    assert!(!controller.step());
    assert_eq!(controller.cursor(), Some(total - 1));
    assert!(controller.current_snapshot().unwrap().is_complete());
}

#[test]
fn test_stepping_reproduces_history_exactly() {
    let expected = bubble_history();
    let mut controller = ready_controller();

    let mut seen = vec![controller.current_snapshot().unwrap().clone()];
    while controller.step() {
        seen.push(controller.current_snapshot().unwrap().clone());
    }
    assert_eq!(seen.as_slice(), expected.snapshots());
}

#[test]
fn test_step_is_a_no_op_while_playing() {
    let mut controller = ready_controller();
    let now = Instant::now();

    assert!(controller.start(now));
    assert_eq!(controller.current_state(), PlaybackState::Playing);
    assert!(!controller.step());
    assert_eq!(controller.cursor(), Some(0));
    assert!(!controller.start(now));
}

#[test]
fn test_ticks_fire_only_when_due() {
    let mut controller = ready_controller();
    let now = Instant::now();
    controller.start(now);

    assert_eq!(controller.time_until_tick(now), Some(DELAY));
    assert!(!controller.poll(now));
    assert!(!controller.poll(now + DELAY / 2));
    assert!(controller.poll(now + DELAY));
    assert_eq!(controller.cursor(), Some(1));

    // The next tick is scheduled relative to the one that fired
    assert!(!controller.poll(now + DELAY + DELAY / 2));
    assert!(controller.poll(now + DELAY * 2));
    assert_eq!(controller.cursor(), Some(2));
}

#[test]
fn test_playback_visits_every_index_once() {
    let mut controller = ready_controller();
    let total = bubble_history().len();
    let mut now = Instant::now();
    controller.start(now);

    let mut visited = vec![controller.cursor().unwrap()];
    while controller.current_state() == PlaybackState::Playing {
        now += DELAY;
        assert!(controller.poll(now));
        visited.push(controller.cursor().unwrap());
    }

    assert_eq!(visited, (0..total).collect::<Vec<_>>());
    assert_eq!(controller.current_state(), PlaybackState::Concluded);
    assert!(controller.pending_tick().is_none());

    // Nothing moves once concluded
    assert!(!controller.poll(now + DELAY * 10));
    assert_eq!(controller.cursor(), Some(total - 1));
}

#[test]
fn test_rapid_pause_resume_never_skips() {
    let mut controller = ready_controller();
    let mut now = Instant::now();
    let mut visited = vec![0];

    while controller.current_state() != PlaybackState::Concluded {
        assert!(controller.start(now));
        assert!(controller.pause());
        assert!(controller.start(now));
        now += DELAY;
        if controller.poll(now) {
            visited.push(controller.cursor().unwrap());
        }
        controller.pause();
    }

    let total = bubble_history().len();
    assert_eq!(visited, (0..total).collect::<Vec<_>>());
}

#[test]
fn test_pause_cancels_pending_tick() {
    let mut controller = ready_controller();
    let now = Instant::now();
    controller.start(now);
    let handle = controller.pending_tick().unwrap();

    assert!(controller.pause());
    assert_eq!(controller.current_state(), PlaybackState::Paused);
    assert!(controller.pending_tick().is_none());
    assert!(!controller.pause());

    // A stale handle cannot advance the cursor after resuming
    controller.start(now);
    assert!(!controller.fire(handle, now + DELAY));
    assert_eq!(controller.cursor(), Some(0));

    let fresh = controller.pending_tick().unwrap();
    assert_ne!(fresh, handle);
    assert!(controller.fire(fresh, now + DELAY));
    assert_eq!(controller.cursor(), Some(1));
}

#[test]
fn test_regenerate_discards_ghost_tick() {
    let mut controller = Controller::seeded(Family::Quick, 3).with_delay(DELAY);
    controller.regenerate().unwrap();
    let now = Instant::now();
    controller.start(now);
    let old = controller.pending_tick().unwrap();

    controller.regenerate().unwrap();
    assert_eq!(controller.current_state(), PlaybackState::Ready);
    assert!(controller.pending_tick().is_none());

    controller.start(now);
    assert!(!controller.fire(old, now + DELAY));
    assert_eq!(controller.cursor(), Some(0));
    assert_ne!(controller.pending_tick().unwrap().session(), old.session());
}

#[test]
fn test_reset_reruns_same_input() {
    let mut controller = Controller::seeded(Family::Merge, 9).with_delay(DELAY);
    controller.regenerate().unwrap();
    let input = controller.input().cloned();
    let history = controller.history().cloned();

    controller.step();
    controller.step();
    controller.start(Instant::now());
    controller.reset().unwrap();

    assert_eq!(controller.current_state(), PlaybackState::Ready);
    assert_eq!(controller.cursor(), Some(0));
    assert!(controller.pending_tick().is_none());
    assert_eq!(controller.input().cloned(), input);
    assert_eq!(controller.history().cloned(), history);
}

#[test]
fn test_reset_rewinds_an_initialized_history() {
    let mut controller = ready_controller();
    while controller.step() {}

    controller.reset().unwrap();
    assert_eq!(controller.current_state(), PlaybackState::Ready);
    assert_eq!(controller.cursor(), Some(0));
    assert_eq!(controller.history(), Some(&bubble_history()));
}

#[test]
fn test_start_after_conclusion_draws_a_fresh_run() {
    let mut controller = ready_controller();
    while controller.step() {}
    assert_eq!(controller.current_state(), PlaybackState::Concluded);

    assert!(controller.start(Instant::now()));
    assert_eq!(controller.current_state(), PlaybackState::Playing);
    assert_eq!(controller.cursor(), Some(0));
    assert!(controller.input().is_some());
}

#[test]
fn test_single_snapshot_history_concludes_immediately() {
    let history = Recorder::new(Family::Bubble).finish_sequence(
        &[],
        None,
        Highlights::new(),
        "Array is empty",
        Outcome::Sorted,
    );
    let mut controller = Controller::seeded(Family::Bubble, 2);
    controller.initialize(history);

    assert!(!controller.step());
    assert_eq!(controller.current_state(), PlaybackState::Concluded);
    assert_eq!(controller.cursor(), Some(0));
}

#[test]
fn test_initialize_adopts_the_history_family() {
    let graph = Graph::with_edges(3, &[(0, 1), (1, 2)]);
    let dfs = build_history(Family::Dfs, &AlgorithmInput::Graph(graph)).unwrap();
    let mut controller = Controller::seeded(Family::Bubble, 6);
    controller.initialize(dfs);

    assert_eq!(controller.family(), Family::Dfs);
    assert_eq!(controller.delay(), tick_delay(Family::Dfs));

    // A fresh run after the end stays on the same algorithm
    while controller.step() {}
    assert!(controller.start(Instant::now()));
    assert_eq!(controller.history().unwrap().family(), Family::Dfs);
    assert!(matches!(controller.input(), Some(AlgorithmInput::Graph(_))));
}

#[test]
fn test_initialize_same_family_keeps_custom_delay() {
    let controller = ready_controller();
    assert_eq!(controller.family(), Family::Bubble);
    assert_eq!(controller.delay(), DELAY);
}

#[test]
fn test_invalid_input_leaves_controller_untouched() {
    let mut controller = Controller::seeded(Family::Binary, 4);
    let unsorted = AlgorithmInput::Search {
        values: vec![9, 2, 5],
        target: 5,
    };

    let err = controller.load(unsorted).unwrap_err();
    assert!(matches!(err, InvalidInputError::UnsortedSequence { .. }));
    assert_eq!(controller.current_state(), PlaybackState::Idle);
    assert!(controller.history().is_none());
}

#[test]
fn test_set_family_switches_delay_and_input() {
    let mut controller = Controller::seeded(Family::Bubble, 5);
    controller.regenerate().unwrap();

    controller.set_family(Family::Bfs).unwrap();
    assert_eq!(controller.family(), Family::Bfs);
    assert_eq!(controller.delay(), Duration::from_millis(500));
    assert!(matches!(controller.input(), Some(AlgorithmInput::Graph(_))));
    assert_eq!(controller.current_state(), PlaybackState::Ready);
}

#[test]
fn test_size_hint_applies_on_regenerate() {
    let mut controller = Controller::seeded(Family::Counting, 8);
    controller.set_size_hint(Some(4));
    controller.regenerate().unwrap();

    let values = controller.input().and_then(AlgorithmInput::values).unwrap();
    assert_eq!(values.len(), 4);
}
