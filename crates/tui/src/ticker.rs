//! Per-card countdown timers.
//!
//! Every card on screen gets its own repeating timer. A timer recomputes its
//! card's [`Countdown`] once per interval and sends it back to the app as a
//! [`Message::Tick`]; it never touches the task store. Timers are started
//! when a card becomes visible and cancelled when it leaves the screen, so
//! there is exactly one live timer per displayed card.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use prodx_protocol::{Countdown, Message, ReferenceWindow, TaskId};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// A running timer for one card.
#[derive(Debug)]
struct CardTimer {
    deadline: DateTime<Utc>,
    cancel: CancellationToken,
}

/// Owns the countdown timers of all visible cards.
///
/// Timers are spawned onto the current tokio runtime, so [`start`] and
/// [`reconcile`] must be called from within one. Dropping the ticker
/// cancels every timer.
///
/// [`start`]: CountdownTicker::start
/// [`reconcile`]: CountdownTicker::reconcile
#[derive(Debug)]
pub struct CountdownTicker {
    timers: HashMap<TaskId, CardTimer>,
    tx: UnboundedSender<Message>,
    period: Duration,
    window: ReferenceWindow,
}

impl CountdownTicker {
    /// Creates a ticker that reports on `tx` every `period`.
    #[must_use]
    pub fn new(tx: UnboundedSender<Message>, period: Duration, window: ReferenceWindow) -> Self {
        Self {
            timers: HashMap::new(),
            tx,
            period,
            window,
        }
    }

    /// Starts the timer for a card.
    ///
    /// The first countdown is sent immediately. Starting a card that already
    /// has a timer for the same deadline does nothing.
    pub fn start(&mut self, id: TaskId, deadline: DateTime<Utc>) {
        if self
            .timers
            .get(&id)
            .is_some_and(|timer| timer.deadline == deadline)
        {
            return;
        }
        self.stop(id);

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let tx = self.tx.clone();
        let period = self.period;
        let window = self.window;

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    _ = interval.tick() => {
                        let countdown = Countdown::with_window(deadline, Utc::now(), window);
                        if tx.send(Message::Tick { id, countdown }).is_err() {
                            // App is gone
                            break;
                        }
                    }
                }
            }
            trace!(task_id = %id, "countdown timer finished");
        });

        debug!(task_id = %id, "countdown timer started");
        self.timers.insert(id, CardTimer { deadline, cancel });
    }

    /// Cancels the timer for a card.
    ///
    /// Returns `true` if a timer was running.
    pub fn stop(&mut self, id: TaskId) -> bool {
        match self.timers.remove(&id) {
            Some(timer) => {
                timer.cancel.cancel();
                debug!(task_id = %id, "countdown timer stopped");
                true
            }
            None => false,
        }
    }

    /// Makes the running timers match the visible cards.
    ///
    /// Cards that left the screen lose their timer; newly shown cards get one.
    pub fn reconcile(&mut self, visible: &[(TaskId, DateTime<Utc>)]) {
        let gone: Vec<TaskId> = self
            .timers
            .keys()
            .filter(|id| !visible.iter().any(|(v, _)| v == *id))
            .copied()
            .collect();
        for id in gone {
            self.stop(id);
        }

        for &(id, deadline) in visible {
            self.start(id, deadline);
        }
    }

    /// Cancels every timer.
    pub fn stop_all(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.cancel.cancel();
        }
    }

    /// Returns whether a timer is running for the card.
    #[must_use]
    pub fn is_running(&self, id: TaskId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Returns the number of running timers.
    #[must_use]
    pub fn active(&self) -> usize {
        self.timers.len()
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.stop_all();
    }
}
