use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashState {
    Showing,
    Hidden,
}

/// Holds the start-up splash until the minimum display time has passed and
/// the first menu load has finished. Once hidden it stays hidden.
#[derive(Debug, Clone)]
pub struct SplashGate {
    min_display: Duration,
    timer_elapsed: bool,
    initial_load_done: bool,
    state: SplashState,
}

impl SplashGate {
    pub const fn new(min_display: Duration) -> Self {
        Self {
            min_display,
            timer_elapsed: false,
            initial_load_done: false,
            state: SplashState::Showing,
        }
    }

    /// Feeds the time since mount. The caller owns the clock.
    pub fn observe_elapsed(&mut self, since_mount: Duration) -> SplashState {
        if since_mount >= self.min_display {
            self.timer_elapsed = true;
        }
        self.settle()
    }

    pub fn mark_load_finished(&mut self) -> SplashState {
        self.initial_load_done = true;
        self.settle()
    }

    pub const fn state(&self) -> SplashState {
        self.state
    }

    pub fn is_showing(&self) -> bool {
        self.state == SplashState::Showing
    }

    fn settle(&mut self) -> SplashState {
        if self.state == SplashState::Showing && self.timer_elapsed && self.initial_load_done {
            log::debug!("splash released");
            self.state = SplashState::Hidden;
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Duration = Duration::from_millis(1000);

    #[test]
    fn fast_load_still_waits_for_timer() {
        let mut gate = SplashGate::new(MIN);
        gate.observe_elapsed(Duration::from_millis(50));
        assert_eq!(gate.mark_load_finished(), SplashState::Showing);

        assert_eq!(gate.observe_elapsed(Duration::from_millis(999)), SplashState::Showing);
        assert_eq!(gate.observe_elapsed(Duration::from_millis(1000)), SplashState::Hidden);
    }

    #[test]
    fn slow_load_extends_splash() {
        let mut gate = SplashGate::new(MIN);
        assert_eq!(gate.observe_elapsed(Duration::from_secs(5)), SplashState::Showing);
        assert_eq!(gate.observe_elapsed(Duration::from_secs(9)), SplashState::Showing);
        assert_eq!(gate.mark_load_finished(), SplashState::Hidden);
    }

    #[test]
    fn never_shows_again() {
        let mut gate = SplashGate::new(MIN);
        gate.observe_elapsed(MIN);
        gate.mark_load_finished();
        assert!(!gate.is_showing());

        // later elapsed values or loads cannot bring it back
        gate.observe_elapsed(Duration::ZERO);
        gate.mark_load_finished();
        assert_eq!(gate.state(), SplashState::Hidden);
    }

    #[test]
    fn timer_alone_does_not_release() {
        let mut gate = SplashGate::new(MIN);
        gate.observe_elapsed(Duration::from_secs(60));
        assert!(gate.is_showing());
    }
}
