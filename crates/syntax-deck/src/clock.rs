//! Playhead clock
//!
//! A background thread that emits ticks at the configured rate while a track
//! "plays". Position is derived from a monotonic start instant rather than
//! tick counting, so missed or dropped ticks never drift the playhead. The
//! clock must be stopped when its owning view goes away; dropping it stops
//! the thread implicitly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender};

/// One clock tick, carrying time since the clock started
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub elapsed: Duration,
}

impl Tick {
    /// Elapsed time in seconds
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Cancellable repeating playhead timer
pub struct PlayheadClock {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    rx: Receiver<Tick>,
    started: Instant,
}

impl PlayheadClock {
    /// Start a clock ticking at `tick_rate_hz` (clamped to at least 1 Hz)
    pub fn start(tick_rate_hz: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / tick_rate_hz.max(1) as f64);
        let (tx, rx) = bounded(4);
        let stop = Arc::new(AtomicBool::new(false));
        let started = Instant::now();

        let handle = spawn_ticker(period, started, tx, Arc::clone(&stop));

        Self {
            stop,
            handle,
            rx,
            started,
        }
    }

    /// Latest tick, if any arrived since the last poll
    ///
    /// Drains the channel and returns only the newest tick; consumers that
    /// poll slower than the tick rate see the current position, not a
    /// backlog.
    pub fn try_tick(&self) -> Option<Tick> {
        self.rx.try_iter().last()
    }

    /// Time since the clock started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Whether the ticker thread is alive and not yet stopped
    ///
    /// False once stopped, and also when the ticker thread failed to spawn.
    pub fn is_running(&self) -> bool {
        self.handle.is_some() && !self.stop.load(Ordering::Relaxed)
    }

    /// Stop the ticker thread and wait for it to exit
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("playhead clock thread panicked");
            }
        }
    }
}

impl Drop for PlayheadClock {
    fn drop(&mut self) {
        self.stop();
    }
}

fn spawn_ticker(
    period: Duration,
    started: Instant,
    tx: Sender<Tick>,
    stop: Arc<AtomicBool>,
) -> Option<JoinHandle<()>> {
    let result = std::thread::Builder::new()
        .name("playhead-clock".to_string())
        .spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                std::thread::sleep(period);
                if stop.load(Ordering::Relaxed) {
                    break;
                }
                // Dropped ticks are fine; position comes from elapsed time
                let _ = tx.try_send(Tick {
                    elapsed: started.elapsed(),
                });
            }
        });

    match result {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::error!("failed to spawn playhead clock thread: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_delivers_ticks() {
        let clock = PlayheadClock::start(200);
        std::thread::sleep(Duration::from_millis(50));
        let tick = clock.try_tick().expect("expected at least one tick");
        assert!(tick.seconds() > 0.0);
    }

    #[test]
    fn test_ticks_carry_monotonic_elapsed_time() {
        let clock = PlayheadClock::start(200);
        std::thread::sleep(Duration::from_millis(30));
        let first = clock.try_tick().expect("first tick");
        std::thread::sleep(Duration::from_millis(30));
        let second = clock.try_tick().expect("second tick");
        assert!(second.elapsed > first.elapsed);
    }

    #[test]
    fn test_stop_cancels_ticker() {
        let mut clock = PlayheadClock::start(200);
        assert!(clock.is_running());
        std::thread::sleep(Duration::from_millis(20));
        clock.stop();
        assert!(!clock.is_running());

        // Drain anything sent before the stop; nothing new may arrive after
        while clock.try_tick().is_some() {}
        std::thread::sleep(Duration::from_millis(40));
        assert!(clock.try_tick().is_none());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut clock = PlayheadClock::start(60);
        clock.stop();
        clock.stop();
    }
}
