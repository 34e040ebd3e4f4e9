use crate::ui::card::{TYPING_GLYPH_OFF, TYPING_GLYPH_ON};

/// Frame counter driving the typing pulse.
pub struct AnimationClock {
    /// Advances once per event-loop tick
    frame_counter: u64,
    /// Frames per half pulse
    half_period: u64,
}

impl AnimationClock {
    /// `tick_rate_ms` is the loop tick; one pulse lasts about a second.
    pub fn new(tick_rate_ms: u64) -> Self {
        let half_period = (500 / tick_rate_ms.max(1)).max(1);
        Self {
            frame_counter: 0,
            half_period,
        }
    }

    pub fn tick(&mut self) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    /// On for the first half of each pulse, off for the second
    pub fn typing_pulse(&self) -> bool {
        (self.frame_counter / self.half_period) % 2 == 0
    }

    pub fn typing_indicator(&self) -> &'static str {
        if self.typing_pulse() {
            TYPING_GLYPH_ON
        } else {
            TYPING_GLYPH_OFF
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_alternates_each_half_period() {
        // 250ms ticks: 2 frames per half pulse
        let mut clock = AnimationClock::new(250);
        assert!(clock.typing_pulse());
        clock.tick();
        assert!(clock.typing_pulse());
        clock.tick();
        assert!(!clock.typing_pulse());
        clock.tick();
        assert!(!clock.typing_pulse());
        clock.tick();
        assert!(clock.typing_pulse());
    }

    #[test]
    fn test_indicator_follows_pulse() {
        let mut clock = AnimationClock::new(500);
        assert_eq!(clock.typing_indicator(), TYPING_GLYPH_ON);
        clock.tick();
        assert_eq!(clock.typing_indicator(), TYPING_GLYPH_OFF);
    }

    #[test]
    fn test_slow_tick_rate_never_divides_by_zero() {
        let mut clock = AnimationClock::new(5000);
        assert!(clock.typing_pulse());
        clock.tick();
        assert!(!clock.typing_pulse());
    }
}
