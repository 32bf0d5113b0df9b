//! Timer system for Horizon Quill.
//!
//! Provides one-shot and repeating timers that integrate with the host
//! event loop. The manager never spawns threads or sleeps; the host is
//! expected to call [`TimerManager::process_expired`] on each loop
//! iteration (using [`TimerManager::time_until_next`] to bound its wait).
//!
//! The overlay controller uses a one-shot timer for the focus-loss grace
//! period: teardown is deferred, and cancelled if focus returns in time.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, TimerError};

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// The type of timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires once after the specified duration.
    OneShot,
    /// Fires repeatedly at the specified interval.
    Repeating,
}

/// Internal timer data.
#[derive(Debug)]
struct TimerData {
    /// When this timer should next fire.
    next_fire: Instant,
    /// The interval for repeating timers.
    interval: Duration,
    /// The kind of timer.
    kind: TimerKind,
    /// Whether this timer is active.
    active: bool,
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages all timers for a component.
pub struct TimerManager {
    /// All registered timers.
    timers: SlotMap<TimerId, TimerData>,
    /// Priority queue of pending timer fires (min-heap by fire time).
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create a new timer manager.
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
        }
    }

    /// Start a one-shot timer that fires after the specified duration.
    ///
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_one_shot(&mut self, duration: Duration) -> TimerId {
        let now = Instant::now();
        let next_fire = now + duration;

        let data = TimerData {
            next_fire,
            interval: duration,
            kind: TimerKind::OneShot,
            active: true,
        };

        let id = self.timers.insert(data);
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: next_fire,
        });

        id
    }

    /// Start a repeating timer that fires at the specified interval.
    ///
    /// The first fire occurs after `interval` duration.
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_repeating(&mut self, interval: Duration) -> TimerId {
        let now = Instant::now();
        let next_fire = now + interval;

        let data = TimerData {
            next_fire,
            interval,
            kind: TimerKind::Repeating,
            active: true,
        };

        let id = self.timers.insert(data);
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: next_fire,
        });

        id
    }

    /// Stop and remove a timer.
    ///
    /// Returns `Ok(())` if the timer was found and removed, or an error if
    /// not found.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        if let Some(timer) = self.timers.get_mut(id) {
            timer.active = false;
            self.timers.remove(id);
            Ok(())
        } else {
            Err(TimerError::InvalidTimerId.into())
        }
    }

    /// Check if a timer is currently active.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.get(id).is_some_and(|t| t.active)
    }

    /// Get the duration until the next timer fires, if any.
    ///
    /// Returns `None` if there are no active timers.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        // Clean up any inactive timers from the front of the queue.
        while let Some(entry) = self.queue.peek() {
            if !self.timers.get(entry.id).is_some_and(|t| t.active) {
                self.queue.pop();
            } else {
                break;
            }
        }

        self.queue.peek().map(|entry| {
            let now = Instant::now();
            if entry.fire_time > now {
                entry.fire_time - now
            } else {
                Duration::ZERO
            }
        })
    }

    /// Process all timers that should fire now.
    ///
    /// Returns the IDs of timers that fired, in fire-time order.
    #[tracing::instrument(skip(self), target = "horizon_quill_core::timer", level = "trace")]
    pub fn process_expired(&mut self) -> Vec<TimerId> {
        let now = Instant::now();
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek() {
            // Check if this timer should fire.
            if entry.fire_time > now {
                break;
            }

            let Some(entry) = self.queue.pop() else {
                break;
            };
            let id = entry.id;

            // Check if timer is still active.
            let Some(timer) = self.timers.get_mut(id) else {
                continue;
            };

            if !timer.active {
                continue;
            }

            // Timer has fired.
            tracing::trace!(target: "horizon_quill_core::timer", ?id, "timer fired");
            fired.push(id);

            match timer.kind {
                TimerKind::OneShot => {
                    // One-shot timers are removed after firing.
                    timer.active = false;
                    self.timers.remove(id);
                }
                TimerKind::Repeating => {
                    // Schedule the next fire.
                    timer.next_fire = now + timer.interval;
                    self.queue.push(TimerQueueEntry {
                        id,
                        fire_time: timer.next_fire,
                    });
                }
            }
        }

        fired
    }

    /// Get the number of active timers.
    pub fn active_count(&self) -> usize {
        self.timers.iter().filter(|(_, t)| t.active).count()
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_fires_once() {
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(Duration::ZERO);

        let fired = timers.process_expired();
        assert_eq!(fired, vec![id]);
        assert!(!timers.is_active(id));

        // Does not fire again.
        assert!(timers.process_expired().is_empty());
    }

    #[test]
    fn test_stop_cancels_pending_fire() {
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(Duration::ZERO);

        timers.stop(id).unwrap();
        assert!(!timers.is_active(id));
        assert!(timers.process_expired().is_empty());
    }

    #[test]
    fn test_stop_unknown_timer_fails() {
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(Duration::from_secs(60));
        timers.stop(id).unwrap();

        assert!(timers.stop(id).is_err());
    }

    #[test]
    fn test_future_timer_does_not_fire_early() {
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(Duration::from_secs(3600));

        assert!(timers.process_expired().is_empty());
        assert!(timers.is_active(id));
        assert!(timers.time_until_next().is_some());
    }

    #[test]
    fn test_repeating_timer_stays_active() {
        let mut timers = TimerManager::new();
        let id = timers.start_repeating(Duration::ZERO);

        let fired = timers.process_expired();
        assert_eq!(fired, vec![id]);
        assert!(timers.is_active(id));

        timers.stop(id).unwrap();
        assert_eq!(timers.active_count(), 0);
    }
}
