// src/endian.rs
//! Host byte order detection.
//!
//! The byte order is detected once and then carried around as a plain
//! [`Endianness`] value, usually inside a [`BitConverter`](crate::BitConverter).
//! For callers that prefer a single process-wide setting, [`init`] stores the
//! detected order and [`host`] reads it back. Until [`init`] runs the stored
//! value is [`Endianness::Little`].

use parking_lot::{const_rwlock, RwLock};

/// Byte order of multi-byte values in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Least-significant byte at the lowest address
    Little,
    /// Most-significant byte at the lowest address
    Big,
}

static HOST: RwLock<Endianness> = const_rwlock(Endianness::Little);

impl Endianness {
    /// Detect the byte order of the running machine.
    ///
    /// Writes the 2-byte pattern `0x0001` into memory and inspects the byte
    /// stored at the lowest address.
    pub fn detect() -> Self {
        let probe: u16 = 0x0001;
        match probe.to_ne_bytes()[0] {
            1 => Endianness::Little,
            _ => Endianness::Big,
        }
    }

    /// Byte order used on the wire by network protocols
    pub const fn network() -> Self {
        Endianness::Big
    }

    pub fn is_little(&self) -> bool {
        matches!(self, Endianness::Little)
    }

    pub fn is_big(&self) -> bool {
        matches!(self, Endianness::Big)
    }

    /// The other byte order
    pub fn opposite(&self) -> Self {
        match self {
            Endianness::Little => Endianness::Big,
            Endianness::Big => Endianness::Little,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endianness::Little => "little-endian",
            Endianness::Big => "big-endian",
        }
    }
}

/// The process-wide default from [`host`], the same order
/// `BitConverter::default()` uses
impl Default for Endianness {
    fn default() -> Self {
        host()
    }
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Detect the host byte order and store it as the process-wide default.
///
/// Safe to call more than once; every call stores the same value.
pub fn init() -> Endianness {
    let detected = Endianness::detect();
    *HOST.write() = detected;
    log::debug!("host byte order detected as {}", detected);
    detected
}

/// The process-wide default byte order
pub fn host() -> Endianness {
    *HOST.read()
}

/// Override the process-wide default byte order.
///
/// Useful for simulating a foreign host. Converters already constructed keep
/// the order they were built with.
pub fn set_host(endianness: Endianness) {
    *HOST.write() = endianness;
    log::debug!("host byte order overridden to {}", endianness);
}
