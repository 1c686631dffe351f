//! Timed reveal of boot sequence lines.
//!
//! [`BootSchedule`] answers "what is visible after `t`" as a pure function.
//! [`BootPlayer`] drives the same schedule in real time on the tokio runtime
//! and stops sending the moment it is dropped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::components::BootLine;

/// Lines ordered by delay, cut after the first terminal line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BootSchedule {
    lines: Vec<BootLine>,
}

impl BootSchedule {
    pub fn new(mut lines: Vec<BootLine>) -> Self {
        // Stable: lines sharing a delay keep their scripted order.
        lines.sort_by_key(|line| line.delay_ms);
        if let Some(end) = lines.iter().position(|line| line.terminal) {
            let dropped = lines.len() - end - 1;
            if dropped > 0 {
                tracing::debug!(dropped, "ignoring boot lines after the terminal line");
            }
            lines.truncate(end + 1);
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[BootLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines revealed once `elapsed` has passed since start.
    pub fn visible_at(&self, elapsed: Duration) -> &[BootLine] {
        let count = self
            .lines
            .iter()
            .take_while(|line| line.delay() <= elapsed)
            .count();
        &self.lines[..count]
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        self.visible_at(elapsed).len() == self.lines.len()
    }

    /// Delay of the last line; zero for an empty schedule.
    pub fn total_duration(&self) -> Duration {
        self.lines.last().map_or(Duration::ZERO, BootLine::delay)
    }

    /// Time from `elapsed` until the next reveal, if any remain.
    pub fn next_delay(&self, elapsed: Duration) -> Option<Duration> {
        self.lines
            .iter()
            .map(BootLine::delay)
            .find(|delay| *delay > elapsed)
            .map(|delay| delay - elapsed)
    }
}

/// Progress reported by a [`BootPlayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootEvent {
    /// The line at this schedule index is now visible.
    Reveal(usize),
    /// Every line is visible.
    Complete,
}

/// Real-time driver for a [`BootSchedule`].
///
/// Must be started inside a tokio runtime. Dropping the player aborts the
/// timer task, so no event is delivered after teardown.
#[derive(Debug)]
pub struct BootPlayer {
    handle: JoinHandle<()>,
}

impl BootPlayer {
    pub fn start(schedule: BootSchedule) -> (Self, mpsc::UnboundedReceiver<BootEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let started = Instant::now();

        let handle = tokio::spawn(async move {
            for (index, line) in schedule.lines().iter().enumerate() {
                sleep_until(started + line.delay()).await;
                if tx.send(BootEvent::Reveal(index)).is_err() {
                    return;
                }
            }
            let _ = tx.send(BootEvent::Complete);
        });

        (Self { handle }, rx)
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop playback early.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for BootPlayer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<BootLine> {
        vec![
            BootLine::new("C", 300),
            BootLine::new("A", 100),
            BootLine::new("B", 100),
            BootLine::new("END", 400).terminal(),
            BootLine::new("NEVER", 500),
        ]
    }

    #[test]
    fn test_schedule_orders_and_truncates() {
        let schedule = BootSchedule::new(lines());
        let texts: Vec<&str> = schedule.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B", "C", "END"]);
    }

    #[test]
    fn test_visible_at() {
        let schedule = BootSchedule::new(lines());
        assert!(schedule.visible_at(Duration::from_millis(99)).is_empty());
        assert_eq!(schedule.visible_at(Duration::from_millis(100)).len(), 2);
        assert_eq!(schedule.visible_at(Duration::from_millis(350)).len(), 3);
        assert!(!schedule.is_complete(Duration::from_millis(399)));
        assert!(schedule.is_complete(Duration::from_millis(400)));
    }

    #[test]
    fn test_next_delay_and_total() {
        let schedule = BootSchedule::new(lines());
        assert_eq!(schedule.total_duration(), Duration::from_millis(400));
        assert_eq!(
            schedule.next_delay(Duration::from_millis(150)),
            Some(Duration::from_millis(150))
        );
        assert_eq!(schedule.next_delay(Duration::from_millis(400)), None);
    }

    #[test]
    fn test_empty_schedule_is_complete() {
        let schedule = BootSchedule::new(Vec::new());
        assert!(schedule.is_complete(Duration::ZERO));
        assert_eq!(schedule.total_duration(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_player_reveals_in_order() {
        let (_player, mut rx) = BootPlayer::start(BootSchedule::new(lines()));
        let started = Instant::now();

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
            if event == BootEvent::Complete {
                break;
            }
        }

        assert_eq!(
            events,
            vec![
                BootEvent::Reveal(0),
                BootEvent::Reveal(1),
                BootEvent::Reveal(2),
                BootEvent::Reveal(3),
                BootEvent::Complete,
            ]
        );
        assert!(started.elapsed() >= Duration::from_millis(400));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_before_start_sends_nothing() {
        let (player, mut rx) = BootPlayer::start(BootSchedule::new(lines()));
        drop(player);
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_mid_sequence_stops_events() {
        let schedule = BootSchedule::new(vec![BootLine::new("A", 100), BootLine::new("B", 300)]);
        let (player, mut rx) = BootPlayer::start(schedule);
        assert_eq!(rx.recv().await, Some(BootEvent::Reveal(0)));
        drop(player);
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(rx.try_recv(), Err(mpsc::error::TryRecvError::Disconnected));
    }
}
