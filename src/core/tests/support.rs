//! Test doubles shared by the core test suites

use std::{cell::RefCell, rc::Rc, time::Duration};

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::{ExternalOpener, LauncherError, Scheduler};

/// Saturday, March 15, 2025 at 15:04:05
pub fn saturday_afternoon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 15)
        .unwrap()
        .and_hms_opt(15, 4, 5)
        .unwrap()
}

struct Timer {
    id: usize,
    period: Duration,
    next_due: Duration,
    tick: Option<Box<dyn FnMut()>>,
}

#[derive(Default)]
struct Inner {
    next_id: usize,
    elapsed: Duration,
    timers: Vec<Timer>,
}

/// Deterministic scheduler: timers only fire inside `advance`
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<Inner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (not cancelled) timers
    pub fn active_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Moves simulated time forward, firing every timer that falls due
    pub fn advance(&self, by: Duration) {
        let target = self.inner.borrow().elapsed + by;

        loop {
            // Pick the earliest due timer and take its callback out so it can
            // run without holding the borrow.
            let due = {
                let mut inner = self.inner.borrow_mut();
                let next = inner
                    .timers
                    .iter_mut()
                    .filter(|timer| timer.next_due <= target)
                    .min_by_key(|timer| timer.next_due);

                match next {
                    Some(timer) => {
                        let id = timer.id;
                        let at = timer.next_due;
                        timer.next_due += timer.period;
                        let tick = timer.tick.take();
                        inner.elapsed = at;
                        Some((id, tick))
                    }
                    None => None,
                }
            };

            let Some((id, tick)) = due else { break };
            let Some(mut tick) = tick else { continue };

            tick();

            // Put the callback back unless the timer was cancelled meanwhile
            let mut inner = self.inner.borrow_mut();
            if let Some(timer) = inner.timers.iter_mut().find(|timer| timer.id == id) {
                timer.tick = Some(tick);
            }
        }

        self.inner.borrow_mut().elapsed = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = usize;

    fn schedule_repeating(&self, period: Duration, tick: Box<dyn FnMut()>) -> usize {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;

        let next_due = inner.elapsed + period;
        inner.timers.push(Timer {
            id,
            period,
            next_due,
            tick: Some(tick),
        });

        id
    }

    fn cancel(&self, handle: usize) {
        self.inner
            .borrow_mut()
            .timers
            .retain(|timer| timer.id != handle);
    }
}

/// Opener that records every URL instead of launching a browser
#[derive(Clone, Default)]
pub struct RecordingOpener {
    pub opened: Rc<RefCell<Vec<String>>>,
    pub fail: bool,
}

impl ExternalOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), LauncherError> {
        self.opened.borrow_mut().push(url.to_string());

        if self.fail {
            Err(LauncherError::OpenFailed {
                url: url.to_string(),
                reason: "no browser available".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
