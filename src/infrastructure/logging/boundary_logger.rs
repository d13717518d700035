use std::time::Instant;
use tracing::{error, info};

/// BoundaryLogger - logs calls that leave the process (GitHub API, filesystem staging)
///
/// Format: [caller→system] operation [stage] duration
#[derive(Clone, Default)]
pub struct BoundaryLogger;

impl BoundaryLogger {
    pub fn new() -> Self {
        Self
    }

    /// External call start
    /// e.g. [publish→GitHub] upload board-game-client-macos [EXT→]
    pub fn external_call(&self, from: &str, system: &str, operation: &str) {
        info!(
            from = %from,
            system = %system,
            operation = %operation,
            flow = format!("{}→{}", from, system),
            stage = "EXT→",
            "[{}→{}] {} [EXT→]",
            from, system, operation
        );
    }

    /// External call finished
    /// e.g. [publish→GitHub] upload board-game-client-macos [←DONE] 830.12ms
    pub fn external_done(&self, from: &str, system: &str, operation: &str, duration_ms: f64) {
        info!(
            from = %from,
            system = %system,
            operation = %operation,
            flow = format!("{}→{}", from, system),
            stage = "←DONE",
            duration_ms = %duration_ms,
            "[{}→{}] {} [←DONE] {:.2}ms",
            from, system, operation, duration_ms
        );
    }

    /// External call failed
    pub fn external_error<E: std::fmt::Display>(&self, from: &str, system: &str, operation: &str, duration_ms: f64, error: &E) {
        error!(
            from = %from,
            system = %system,
            operation = %operation,
            flow = format!("{}→{}", from, system),
            stage = "←FAIL",
            duration_ms = %duration_ms,
            error = %error,
            "[{}→{}] {} [←FAIL] {:.2}ms error={}",
            from, system, operation, duration_ms, error
        );
    }
}

/// Wall-clock timer for boundary logs
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_is_monotonic() {
        let timer = Timer::start();
        let first = timer.elapsed_ms();
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(timer.elapsed_ms() > first);
    }
}
