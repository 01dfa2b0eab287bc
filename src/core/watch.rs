//! Live-refresh poller with explicit start/stop.
//!
//! One worker thread runs the callback, then sleeps for the interval, then
//! checks the stop flag. Polls are therefore serialized: a slow tick delays
//! the next one instead of overlapping it, so a stale read can never land
//! after a fresher one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct Poller {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    /// Spawn the polling thread. The callback runs once immediately, then
    /// once per interval until `stop`.
    pub fn start<F>(interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            loop {
                tick();
                // Sleep in short slices so stop() is honored promptly.
                let mut slept = Duration::ZERO;
                while slept < interval {
                    if stop_flag.load(Ordering::SeqCst) {
                        return;
                    }
                    let slice = Duration::from_millis(25).min(interval - slept);
                    thread::sleep(slice);
                    slept += slice;
                }
                if stop_flag.load(Ordering::SeqCst) {
                    return;
                }
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Signal the worker and wait for the current tick to finish.
    pub fn stop(mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
