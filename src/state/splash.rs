/// Loading splash and its auto-dismiss timer
///
/// The timer runs as an abortable background task. `SplashTimer` owns the
/// abort handle: dropping it aborts a pending timer, so it never fires
/// against a torn-down view or after the splash was skipped.

use iced::task::Handle;
use iced::Task;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Splash {
    #[default]
    Showing,
    Done,
}

impl Splash {
    pub fn is_showing(&self) -> bool {
        *self == Splash::Showing
    }
}

/// Guard over a pending splash timer
#[derive(Debug)]
pub struct SplashTimer {
    handle: Handle,
}

impl SplashTimer {
    /// Start a timer that completes after `delay`
    ///
    /// The returned task must be handed to the runtime; it yields `()` once
    /// the delay has elapsed, unless the guard was dropped first.
    pub fn start(delay: Duration) -> (Self, Task<()>) {
        let (task, handle) = Task::perform(
            async move {
                tokio::time::sleep(delay).await;
            },
            |()| (),
        )
        .abortable();

        (SplashTimer { handle }, task)
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_starts_showing() {
        assert!(Splash::default().is_showing());
        assert!(!Splash::Done.is_showing());
    }

    #[test]
    fn test_held_timer_stays_armed() {
        let (timer, _task) = SplashTimer::start(Duration::from_secs(5));
        assert!(!timer.handle.is_aborted());
    }

    #[test]
    fn test_drop_aborts_timer() {
        let (timer, _task) = SplashTimer::start(Duration::from_secs(5));
        let watcher = timer.handle.clone();
        assert!(!watcher.is_aborted());

        drop(timer);
        assert!(watcher.is_aborted());
    }
}
