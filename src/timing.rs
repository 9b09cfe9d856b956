/// The signaling rate of the LED strip.
///
/// Almost all WS2812/SK6812 strips run at 800 kHz; the 400 kHz rate only
/// exists on first-generation WS2811 hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitRate {
    /// 800 kHz signaling, 1.25 µs per bit. WS2812, WS2812B, SK6812.
    #[default]
    Khz800,
    /// 400 kHz signaling, 2.5 µs per bit. First-generation WS2811.
    Khz400,
}

/// Pulse widths of one bit cell, in cycle counter ticks.
///
/// Derived once per transmission from the counter frequency; constant for
/// the duration of a call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BitTiming {
    /// High time of a `0` bit. 0.4 µs at 800 kHz, 0.5 µs at 400 kHz.
    pub t0h: u32,
    /// High time of a `1` bit. 0.8 µs at 800 kHz, 1.2 µs at 400 kHz.
    pub t1h: u32,
    /// Total duration of one bit cell, both phases.
    pub period: u32,
}

impl BitTiming {
    pub fn new(clock_hz: u32, rate: BitRate) -> Self {
        match rate {
            BitRate::Khz800 => Self {
                t0h: clock_hz / 2_500_000,
                t1h: clock_hz / 1_250_000,
                period: clock_hz / 800_000,
            },
            BitRate::Khz400 => Self {
                t0h: clock_hz / 2_000_000,
                t1h: clock_hz / 833_333,
                period: clock_hz / 400_000,
            },
        }
    }

    /// Whether the integer tick counts still resolve the three distinct
    /// durations. Fails on slow counters, where `t0h` truncates to zero
    /// or collides with `t1h`.
    pub fn is_representable(&self) -> bool {
        1 <= self.t0h && self.t0h < self.t1h && self.t1h < self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_at_80mhz() {
        // 12.5 ns per tick
        let fast = BitTiming::new(80_000_000, BitRate::Khz800);
        assert_eq!(fast.t0h, 32); // 0.4 µs
        assert_eq!(fast.t1h, 64); // 0.8 µs
        assert_eq!(fast.period, 100); // 1.25 µs

        let slow = BitTiming::new(80_000_000, BitRate::Khz400);
        assert_eq!(slow.t0h, 40); // 0.5 µs
        assert_eq!(slow.t1h, 96); // 1.2 µs
        assert_eq!(slow.period, 200); // 2.5 µs
    }

    #[test]
    fn ticks_at_240mhz() {
        let fast = BitTiming::new(240_000_000, BitRate::Khz800);
        assert_eq!(fast.t0h, 96);
        assert_eq!(fast.t1h, 192);
        assert_eq!(fast.period, 300);
    }

    #[test]
    fn representability() {
        assert!(BitTiming::new(80_000_000, BitRate::Khz800).is_representable());
        assert!(BitTiming::new(2_500_000, BitRate::Khz800).is_representable());

        // 1 MHz: t0h truncates to 0
        assert!(!BitTiming::new(1_000_000, BitRate::Khz800).is_representable());
    }
}
