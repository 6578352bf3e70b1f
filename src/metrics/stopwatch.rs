//! Monotonic elapsed-time source for the table

use std::time::Instant;

/// Seconds since the last (re)start, on a monotonic clock
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    pub fn restart(&mut self) {
        self.started = Instant::now();
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_elapsed_grows() {
        let watch = Stopwatch::start();
        std::thread::sleep(Duration::from_millis(10));
        assert!(watch.elapsed_secs() >= 0.01);
    }

    #[test]
    fn test_restart_goes_back_to_zero() {
        let mut watch = Stopwatch::start();
        std::thread::sleep(Duration::from_millis(20));
        let before = watch.elapsed_secs();
        watch.restart();
        assert!(watch.elapsed_secs() < before);
    }
}
