//! Pulse animation - triangular "bounce" waveform over the frame counter.
//!
//! Purely cosmetic. Nothing in the game rules reads these values.

use crate::types::{
    COLLECTIBLE_PULSE_AMPLITUDE, COLLECTIBLE_PULSE_PERIOD, HAZARD_PULSE_AMPLITUDE,
    HAZARD_PULSE_PERIOD, PLAYER_BREATH_AMPLITUDE, PLAYER_BREATH_PERIOD,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    /// Frames per full cycle.
    pub period: u32,
    /// Peak growth as a fraction of the base size.
    pub amplitude: f32,
}

impl Pulse {
    pub const COLLECTIBLE: Pulse = Pulse::new(COLLECTIBLE_PULSE_PERIOD, COLLECTIBLE_PULSE_AMPLITUDE);
    pub const HAZARD: Pulse = Pulse::new(HAZARD_PULSE_PERIOD, HAZARD_PULSE_AMPLITUDE);
    pub const PLAYER_BREATH: Pulse = Pulse::new(PLAYER_BREATH_PERIOD, PLAYER_BREATH_AMPLITUDE);

    pub const fn new(period: u32, amplitude: f32) -> Self {
        Self { period, amplitude }
    }

    /// Position on the waveform in `[0, 1]`.
    ///
    /// 1 at the start of the cycle, falling to 0 at mid-period, then rising back.
    pub fn phase(&self, frame: u32) -> f32 {
        if self.period < 2 {
            return 0.0;
        }
        let half = self.period as f32 / 2.0;
        ((frame % self.period) as f32 / half - 1.0).abs()
    }

    /// Size multiplier in `[1, 1 + amplitude]`.
    pub fn scale(&self, frame: u32) -> f32 {
        1.0 + self.amplitude * self.phase(frame)
    }

    /// Quantize the phase into `steps` discrete sizes (0 = smallest).
    pub fn step(&self, frame: u32, steps: u8) -> u8 {
        if steps <= 1 {
            return 0;
        }
        let max = (steps - 1) as f32;
        (self.phase(frame) * max).round().min(max) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn collectible_pulse_bounces() {
        let p = Pulse::COLLECTIBLE;
        assert!(approx(p.scale(0), 1.2));
        assert!(approx(p.scale(5), 1.1));
        assert!(approx(p.scale(10), 1.0));
        assert!(approx(p.scale(15), 1.1));
        assert!(approx(p.scale(20), 1.2));
    }

    #[test]
    fn hazard_pulse_uses_period_16() {
        let p = Pulse::HAZARD;
        assert!(approx(p.scale(8), 1.0));
        assert!(approx(p.scale(16), 1.15));
        assert!(approx(p.scale(4), 1.075));
    }

    #[test]
    fn player_breath_is_subtle() {
        let p = Pulse::PLAYER_BREATH;
        for frame in 0..60 {
            let s = p.scale(frame);
            assert!((1.0..=1.05 + 1e-5).contains(&s), "frame {frame} scale {s}");
        }
        assert!(approx(p.scale(15), 1.0));
    }

    #[test]
    fn steps_cover_full_range() {
        let p = Pulse::COLLECTIBLE;
        assert_eq!(p.step(0, 3), 2);
        assert_eq!(p.step(5, 3), 1);
        assert_eq!(p.step(10, 3), 0);
        assert_eq!(p.step(10, 1), 0);
    }

    #[test]
    fn degenerate_period_is_flat() {
        let p = Pulse::new(1, 0.5);
        assert!(approx(p.scale(7), 1.0));
        let p = Pulse::new(0, 0.5);
        assert!(approx(p.scale(7), 1.0));
    }
}
