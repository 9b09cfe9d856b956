use snafu::prelude::*;

/// Errors of the [Ws2812Driver::init](crate::Ws2812Driver::init) function
#[derive(Debug, Snafu)]
pub enum WS2812InitError {
    /// The cycle counter ticks too slowly to represent the pulse widths
    /// of the WS2812 protocol.
    ClockTooSlow,
}
