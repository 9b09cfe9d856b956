use embedded_hal::digital::OutputPin;

use crate::cycles::CycleCounter;
use crate::errors::WS2812InitError;
use crate::timing::{BitRate, BitTiming};

/// A WS2812 Neopixel LED strip driver that bit-bangs a single GPIO pin,
/// timed against a free-running CPU cycle counter.
pub struct Ws2812Driver<P, C> {
    pin: P,
    cycles: C,
    clock_hz: u32,
}

impl<P, C> Ws2812Driver<P, C>
where
    P: OutputPin,
    C: CycleCounter,
{
    /// Initializes the driver.
    ///
    /// IMPORTANT! The pin must already be configured as a push-pull output,
    /// and `clock_hz` must be the actual frequency the cycle counter ticks
    /// at. A wrong frequency scales every pulse and produces garbage colors
    /// without any further diagnostic.
    ///
    /// The pin is driven low so the strip sees an idle line.
    pub fn init(mut pin: P, cycles: C, clock_hz: u32) -> Result<Self, WS2812InitError> {
        let fast = BitTiming::new(clock_hz, BitRate::Khz800);
        let slow = BitTiming::new(clock_hz, BitRate::Khz400);

        log::debug!("Initializing WS2812 bitbang driver.");
        log::debug!("    Cycle counter: {} Hz", clock_hz);
        log::debug!(
            "    800kHz timings: T0H={} T1H={} period={} ticks",
            fast.t0h,
            fast.t1h,
            fast.period
        );
        log::debug!(
            "    400kHz timings: T0H={} T1H={} period={} ticks",
            slow.t0h,
            slow.t1h,
            slow.period
        );

        if !fast.is_representable() || !slow.is_representable() {
            return Err(WS2812InitError::ClockTooSlow);
        }

        pin.set_low().ok();

        Ok(Self {
            pin,
            cycles,
            clock_hz,
        })
    }

    /// Transmits `data` to the LED strip, most significant bit first, and
    /// holds the line low for one final bit period.
    ///
    /// The whole transmission runs inside a critical section; at 800 kHz a
    /// frame of `n` LEDs occupies the core for `n * 30` µs. Fire-and-forget:
    /// there is no feedback channel, a timing violation (e.g. a stalled
    /// cycle counter read) shows up as wrong colors on the strip and nowhere
    /// else.
    ///
    /// Note that one trailing bit period is *not* the full inter-frame
    /// reset; most strips latch only after the line has been idle for
    /// ≥50 µs. Callers that retransmit immediately must insert that gap
    /// themselves.
    ///
    /// Be aware that WS2812 strips expect GRB byte order.
    pub fn write(&mut self, data: &[u8], rate: BitRate) {
        let timing = BitTiming::new(self.clock_hz, rate);

        critical_section::with(|_| self.transmit(data, &timing));
    }

    /// Releases the pin and the cycle counter.
    pub fn free(self) -> (P, C) {
        (self.pin, self.cycles)
    }

    fn transmit(&mut self, data: &[u8], t: &BitTiming) {
        // Each bit cell is anchored to the captured start of the previous
        // cell, not to the instant the previous low phase finished. The
        // period wait then absorbs the loop overhead of the pin writes and
        // the bit bookkeeping instead of letting it accumulate as drift.
        //
        // Backdating the first anchor by one period makes bit 0 start
        // immediately.
        let mut cell_start = self.cycles.read().wrapping_sub(t.period);

        for &byte in data {
            let mut mask = 0x80u8;
            while mask != 0 {
                // Wait for the start of the bit cell
                let mut now = self.cycles.read();
                while now.wrapping_sub(cell_start) < t.period {
                    now = self.cycles.read();
                }

                self.pin.set_high().ok();
                cell_start = now;

                // Hold high for T1H or T0H
                let high = if byte & mask != 0 { t.t1h } else { t.t0h };
                while self.cycles.read().wrapping_sub(cell_start) < high {}

                self.pin.set_low().ok();

                mask >>= 1;
            }
        }

        // Let the final bit cell run out so its low phase is not truncated
        // by returning early.
        while self.cycles.read().wrapping_sub(cell_start) < t.period {}
    }
}
