#![no_std]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cycles;
mod driver;
mod errors;
mod timing;

pub use cycles::CycleCounter;
pub use driver::Ws2812Driver;
pub use errors::WS2812InitError;
pub use timing::BitRate;

#[cfg(feature = "cortex-m")]
#[cfg_attr(docsrs, doc(cfg(feature = "cortex-m")))]
pub use cycles::DwtCycleCounter;

#[cfg(feature = "riscv")]
#[cfg_attr(docsrs, doc(cfg(feature = "riscv")))]
pub use cycles::McycleCounter;
