//! Fire-rate limiter.
//!
//! The trigger is a latch: press moves to [`FireState::Holding`], release back
//! to [`FireState::Idle`], regardless of cooldown. While holding, every update
//! fires again as soon as `fire_interval` has passed since the last shot. The
//! last shot time survives release, so tapping cannot beat the rate limit.

use input::ButtonLatch;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FireState {
    #[default]
    Idle,
    Holding,
}

#[derive(Debug, Clone)]
pub struct FireController {
    state: FireState,
    /// Time of the last shot. Starts at negative infinity so the first press fires at once.
    last_shot_time: f64,
    fire_interval: f64,
}

impl FireController {
    pub fn new(fire_interval: f64) -> Self {
        Self {
            state: FireState::Idle,
            last_shot_time: f64::NEG_INFINITY,
            fire_interval,
        }
    }

    pub fn state(&self) -> FireState {
        self.state
    }

    pub fn is_firing(&self) -> bool {
        self.state == FireState::Holding
    }

    /// Time of the last shot, if any shot was fired yet.
    pub fn last_shot_time(&self) -> Option<f64> {
        self.last_shot_time.is_finite().then_some(self.last_shot_time)
    }

    pub fn press(&mut self) {
        self.state = FireState::Holding;
    }

    pub fn release(&mut self) {
        self.state = FireState::Idle;
    }

    /// Returns true when a shot fires at `now`; the shot time is recorded.
    pub fn update(&mut self, now: f64) -> bool {
        if self.state != FireState::Holding || now - self.last_shot_time < self.fire_interval {
            return false;
        }
        self.last_shot_time = now;
        true
    }

    /// Apply one tick of trigger edges, then update.
    ///
    /// A press and release that both landed since the previous tick count as a
    /// tap: the press is evaluated before the release takes effect.
    pub fn handle_input(&mut self, trigger: ButtonLatch, now: f64) -> bool {
        if trigger.pressed {
            self.press();
        } else if trigger.released {
            self.release();
        }

        let fired = self.update(now);

        if trigger.pressed && !trigger.held {
            self.release();
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holding_repeats_at_interval_inclusive() {
        let mut fire = FireController::new(0.3);
        fire.press();
        assert!(fire.update(0.0));
        assert!(!fire.update(0.1));
        assert!(fire.update(0.3));
        assert!(!fire.update(0.5));
        assert!(fire.update(0.6));
    }

    #[test]
    fn cooldown_survives_release() {
        let mut fire = FireController::new(0.3);
        fire.press();
        assert!(fire.update(0.0));
        fire.release();
        assert!(!fire.update(0.1));
        fire.press();
        assert!(!fire.update(0.2));
        assert!(fire.update(0.3));
    }

    #[test]
    fn idle_never_fires() {
        let mut fire = FireController::new(0.3);
        assert!(!fire.update(100.0));
        assert_eq!(fire.last_shot_time(), None);
    }

    #[test]
    fn first_press_fires_without_delay() {
        let mut fire = FireController::new(5.0);
        fire.press();
        assert!(fire.update(0.0));
        assert_eq!(fire.last_shot_time(), Some(0.0));
    }

    #[test]
    fn release_during_cooldown_goes_idle() {
        let mut fire = FireController::new(0.3);
        fire.press();
        fire.update(0.0);
        fire.release();
        assert_eq!(fire.state(), FireState::Idle);
        assert!(!fire.update(1.0));
    }

    #[test]
    fn tap_between_ticks_fires_once() {
        let mut fire = FireController::new(0.3);
        let tap = ButtonLatch {
            pressed: true,
            released: true,
            held: false,
        };
        assert!(fire.handle_input(tap, 0.0));
        assert!(!fire.is_firing());
        assert!(!fire.handle_input(ButtonLatch::default(), 1.0));
    }

    #[test]
    fn latched_hold_keeps_firing_without_new_edges() {
        let mut fire = FireController::new(0.3);
        assert!(fire.handle_input(ButtonLatch::press(), 0.0));
        assert!(!fire.handle_input(ButtonLatch::hold(), 0.15));
        assert!(fire.handle_input(ButtonLatch::default(), 0.3));
        assert!(!fire.handle_input(ButtonLatch::release(), 0.9));
    }
}
