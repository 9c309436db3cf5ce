//! Cursor blink timer.
//!
//! The blink is driven by elapsed time handed in from the host's event loop,
//! so it never runs on its own thread. A [`BlinkTimer`] is a scoped handle:
//! once cancelled (explicitly or by being dropped) it never toggles again.

use std::time::Duration;
use tracing::trace;

/// Default time between cursor visibility flips.
pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Shortest interval accepted; zero would flip forever inside one `advance`.
const MIN_BLINK_INTERVAL: Duration = Duration::from_millis(1);

/// Periodic cursor visibility toggle.
#[derive(Debug)]
pub struct BlinkTimer {
    interval: Duration,
    elapsed: Duration,
    cursor_visible: bool,
    running: bool,
}

impl BlinkTimer {
    /// Start a timer with the cursor initially shown.
    pub fn start(interval: Duration) -> Self {
        let interval = interval.max(MIN_BLINK_INTERVAL);
        trace!(interval_ms = interval.as_millis() as u64, "cursor blink started");
        Self {
            interval,
            elapsed: Duration::ZERO,
            cursor_visible: true,
            running: true,
        }
    }

    /// Advance the timer by `dt`, returning how many times the cursor flipped.
    ///
    /// Runs in constant time however large `dt` is; the count saturates at
    /// `u32::MAX`.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running {
            return 0;
        }

        let total = self.elapsed.saturating_add(dt).as_nanos();
        let interval = self.interval.as_nanos();
        let flips = total / interval;
        self.elapsed = duration_from_nanos(total % interval);
        if flips % 2 == 1 {
            self.cursor_visible = !self.cursor_visible;
        }

        let flips = u32::try_from(flips).unwrap_or(u32::MAX);
        if flips > 0 {
            trace!(flips, visible = self.cursor_visible, "cursor blink");
        }
        flips
    }

    /// Stop the timer. Further `advance` calls are no-ops.
    pub fn cancel(&mut self) {
        if self.running {
            self.running = false;
            trace!("cursor blink cancelled");
        }
    }

    /// Whether the timer is still ticking.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current blink phase.
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Configured flip interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next flip, or `None` once cancelled.
    pub fn until_next_flip(&self) -> Option<Duration> {
        self.running.then(|| self.interval - self.elapsed)
    }
}

fn duration_from_nanos(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}

impl Drop for BlinkTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
