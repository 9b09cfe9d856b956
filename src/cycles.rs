/// The time base of the driver: a free-running hardware cycle counter.
///
/// The counter must tick at a fixed, known frequency and must never stop
/// or be written to while a transmission is in progress. Wrapping at
/// `u32::MAX` is fine; the driver only ever looks at differences.
///
/// Implementations should be a single register read and get inlined into
/// the transmit loop. Anything slower (a syscall, a bus transaction to an
/// external timer) distorts the pulse widths.
pub trait CycleCounter {
    /// Reads the current counter value.
    fn read(&mut self) -> u32;
}

/// The Cortex-M DWT cycle counter.
///
/// The caller must have enabled the counter (`DWT::enable_cycle_counter`)
/// before the first transmission; it is disabled at reset on most parts.
#[cfg(feature = "cortex-m")]
#[cfg_attr(docsrs, doc(cfg(feature = "cortex-m")))]
pub struct DwtCycleCounter;

#[cfg(feature = "cortex-m")]
impl CycleCounter for DwtCycleCounter {
    #[inline(always)]
    fn read(&mut self) -> u32 {
        cortex_m::peripheral::DWT::cycle_count()
    }
}

/// The RISC-V `mcycle` CSR.
#[cfg(feature = "riscv")]
#[cfg_attr(docsrs, doc(cfg(feature = "riscv")))]
pub struct McycleCounter;

#[cfg(feature = "riscv")]
impl CycleCounter for McycleCounter {
    #[inline(always)]
    fn read(&mut self) -> u32 {
        riscv::register::mcycle::read() as u32
    }
}
