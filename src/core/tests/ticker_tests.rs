use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use super::support::{saturday_afternoon, ManualScheduler};
use crate::core::{watch, ClockState, ClockWatch, ManualClock, Ticker, TICK_PERIOD};

/// Helper: ticker on a manual scheduler that records every published state
fn create_test_ticker() -> (
    Ticker<ManualScheduler, Rc<ManualClock>>,
    ManualScheduler,
    Rc<ManualClock>,
    Rc<RefCell<Vec<ClockState>>>,
) {
    let scheduler = ManualScheduler::new();
    let clock = Rc::new(ManualClock::new(saturday_afternoon()));
    let published = Rc::new(RefCell::new(Vec::new()));

    let sink = published.clone();
    let ticker = Ticker::new(scheduler.clone(), clock.clone(), move |state: &ClockState| {
        sink.borrow_mut().push(state.clone());
    });

    (ticker, scheduler, clock, published)
}

/// Advances wall clock and scheduler together
fn advance(scheduler: &ManualScheduler, clock: &ManualClock, by: Duration) {
    clock.advance(by);
    scheduler.advance(by);
}

#[test]
fn test_ticker_is_idle_until_started() {
    let (ticker, scheduler, _clock, published) = create_test_ticker();

    assert!(!ticker.is_running());
    assert!(ticker.state().is_none());
    assert_eq!(scheduler.active_timers(), 0);
    assert!(published.borrow().is_empty());
}

#[test]
fn test_start_publishes_immediately() {
    let (ticker, scheduler, _clock, published) = create_test_ticker();

    ticker.start();

    // Published before any simulated time passes
    assert_eq!(published.borrow().len(), 1);
    let state = ticker.state().unwrap();
    assert_eq!(state.time_text, "03:04:05 PM");
    assert_eq!(state.date_text, "Saturday, March 15, 2025");
    assert_eq!(scheduler.active_timers(), 1);
}

#[test]
fn test_ticker_updates_every_second() {
    let (ticker, scheduler, clock, published) = create_test_ticker();
    ticker.start();

    advance(&scheduler, &clock, TICK_PERIOD);
    assert_eq!(published.borrow().len(), 2);
    assert_eq!(ticker.state().unwrap().time_text, "03:04:06 PM");

    advance(&scheduler, &clock, TICK_PERIOD);
    assert_eq!(published.borrow().len(), 3);
    assert_eq!(ticker.state().unwrap().time_text, "03:04:07 PM");
}

#[test]
fn test_no_tick_before_period_elapses() {
    let (ticker, scheduler, clock, published) = create_test_ticker();
    ticker.start();

    advance(&scheduler, &clock, Duration::from_millis(999));
    assert_eq!(published.borrow().len(), 1);

    advance(&scheduler, &clock, Duration::from_millis(1));
    assert_eq!(published.borrow().len(), 2);
}

#[test]
fn test_stop_halts_updates() {
    let (ticker, scheduler, clock, published) = create_test_ticker();
    ticker.start();
    advance(&scheduler, &clock, TICK_PERIOD);

    ticker.stop();
    let before = ticker.state();

    advance(&scheduler, &clock, Duration::from_secs(5));

    assert!(!ticker.is_running());
    assert_eq!(scheduler.active_timers(), 0);
    assert_eq!(published.borrow().len(), 2);
    assert_eq!(ticker.state(), before);
}

#[test]
fn test_stop_is_idempotent() {
    let (ticker, scheduler, clock, published) = create_test_ticker();
    ticker.start();

    ticker.stop();
    let after_first_stop = ticker.state();
    ticker.stop();

    advance(&scheduler, &clock, Duration::from_secs(3));

    assert_eq!(ticker.state(), after_first_stop);
    assert_eq!(published.borrow().len(), 1);
}

#[test]
fn test_stop_without_start_is_harmless() {
    let (ticker, scheduler, _clock, published) = create_test_ticker();

    ticker.stop();

    assert!(ticker.state().is_none());
    assert_eq!(scheduler.active_timers(), 0);
    assert!(published.borrow().is_empty());
}

#[test]
fn test_double_start_schedules_once() {
    let (ticker, scheduler, clock, published) = create_test_ticker();

    ticker.start();
    ticker.start();
    assert_eq!(scheduler.active_timers(), 1);
    assert_eq!(published.borrow().len(), 1);

    advance(&scheduler, &clock, TICK_PERIOD);
    assert_eq!(published.borrow().len(), 2);
}

#[test]
fn test_restart_after_stop() {
    let (ticker, scheduler, clock, published) = create_test_ticker();
    ticker.start();
    ticker.stop();

    advance(&scheduler, &clock, Duration::from_secs(10));
    ticker.start();

    // Re-mount publishes the current reading straight away
    assert_eq!(published.borrow().len(), 2);
    assert_eq!(ticker.state().unwrap().time_text, "03:04:15 PM");

    advance(&scheduler, &clock, TICK_PERIOD);
    assert_eq!(ticker.state().unwrap().time_text, "03:04:16 PM");
}

#[test]
fn test_drop_cancels_schedule() {
    let (ticker, scheduler, clock, published) = create_test_ticker();
    ticker.start();
    assert_eq!(scheduler.active_timers(), 1);

    drop(ticker);

    assert_eq!(scheduler.active_timers(), 0);
    advance(&scheduler, &clock, Duration::from_secs(3));
    assert_eq!(published.borrow().len(), 1);
}

#[test]
fn test_each_tick_replaces_state() {
    let (ticker, scheduler, clock, published) = create_test_ticker();
    ticker.start();
    advance(&scheduler, &clock, TICK_PERIOD);

    let states = published.borrow();
    assert_ne!(states[0], states[1]);
    assert_eq!(ticker.state().as_ref(), states.last());
}

/// Helper: clock watch on a manual scheduler, recording ticks and finishes
fn create_test_watch(
    limit: Option<u32>,
) -> (
    ClockWatch<ManualScheduler, Rc<ManualClock>>,
    ManualScheduler,
    Rc<ManualClock>,
    Rc<RefCell<Vec<ClockState>>>,
    Rc<Cell<u32>>,
) {
    let scheduler = ManualScheduler::new();
    let clock = Rc::new(ManualClock::new(saturday_afternoon()));
    let published = Rc::new(RefCell::new(Vec::new()));
    let finishes = Rc::new(Cell::new(0u32));

    let sink = published.clone();
    let finish_count = finishes.clone();
    let clock_watch = watch(
        scheduler.clone(),
        clock.clone(),
        limit,
        move |state: &ClockState| sink.borrow_mut().push(state.clone()),
        move || finish_count.set(finish_count.get() + 1),
    );

    (clock_watch, scheduler, clock, published, finishes)
}

#[test]
fn test_watch_limit_one_finishes_on_start() {
    let (clock_watch, scheduler, clock, published, finishes) = create_test_watch(Some(1));

    // Finished before the scheduler ever fires
    assert!(clock_watch.is_finished());
    assert!(!clock_watch.is_running());
    assert_eq!(clock_watch.published(), 1);
    assert_eq!(scheduler.active_timers(), 0);
    assert_eq!(finishes.get(), 1);

    advance(&scheduler, &clock, Duration::from_secs(5));

    assert_eq!(published.borrow().len(), 1);
    assert_eq!(published.borrow()[0].time_text, "03:04:05 PM");
    assert_eq!(finishes.get(), 1);
}

#[test]
fn test_watch_limit_three_stops_after_third_update() {
    let (clock_watch, scheduler, clock, published, finishes) = create_test_watch(Some(3));

    advance(&scheduler, &clock, TICK_PERIOD);
    assert_eq!(clock_watch.published(), 2);
    assert!(!clock_watch.is_finished());
    assert_eq!(scheduler.active_timers(), 1);
    assert_eq!(finishes.get(), 0);

    advance(&scheduler, &clock, TICK_PERIOD);
    assert_eq!(clock_watch.published(), 3);
    assert!(clock_watch.is_finished());
    assert_eq!(scheduler.active_timers(), 0);
    assert_eq!(finishes.get(), 1);

    advance(&scheduler, &clock, Duration::from_secs(5));

    let texts: Vec<String> = published
        .borrow()
        .iter()
        .map(|state| state.time_text.clone())
        .collect();
    assert_eq!(texts, ["03:04:05 PM", "03:04:06 PM", "03:04:07 PM"]);
    assert_eq!(finishes.get(), 1);
}

#[test]
fn test_watch_without_limit_runs_until_stopped() {
    let (clock_watch, scheduler, clock, published, finishes) = create_test_watch(None);

    for _ in 0..10 {
        advance(&scheduler, &clock, TICK_PERIOD);
    }

    assert_eq!(clock_watch.published(), 11);
    assert!(!clock_watch.is_finished());
    assert_eq!(scheduler.active_timers(), 1);

    clock_watch.stop();
    advance(&scheduler, &clock, Duration::from_secs(3));

    assert_eq!(published.borrow().len(), 11);
    assert_eq!(scheduler.active_timers(), 0);
    assert_eq!(finishes.get(), 0);
}

#[test]
fn test_dropping_watch_cancels_schedule() {
    let (clock_watch, scheduler, clock, published, _finishes) = create_test_watch(None);
    assert_eq!(scheduler.active_timers(), 1);

    drop(clock_watch);

    assert_eq!(scheduler.active_timers(), 0);
    advance(&scheduler, &clock, Duration::from_secs(3));
    assert_eq!(published.borrow().len(), 1);
}
