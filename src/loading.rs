//! Blinking "loading" indicator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Shortest blink period; tokio intervals reject a zero period
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Periodic color toggle that lives exactly as long as a search is
/// outstanding. Cancelled explicitly or when dropped.
pub struct LoadingIndicator {
    alternate: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl LoadingIndicator {
    /// Start toggling every `period`, calling `on_tick` after each toggle.
    /// Periods under one millisecond are raised to one millisecond.
    pub fn start<F>(runtime: &Handle, period: Duration, on_tick: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let alternate = Arc::new(AtomicBool::new(false));
        let phase = alternate.clone();

        let task = runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                phase.fetch_xor(true, Ordering::Relaxed);
                on_tick();
            }
        });

        LoadingIndicator { alternate, task }
    }

    /// Whether the second of the two colors is showing
    pub fn is_alternate(&self) -> bool {
        self.alternate.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Parse `#RRGGBB` into its components
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
