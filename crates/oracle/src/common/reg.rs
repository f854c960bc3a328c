//! Register address type.
//!
//! Register-file ports take a 5-bit address. `RegAddr` is the validated form
//! of that address, so the sequencer and the DUT models never index outside
//! the 32-entry file.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{MAX_REG_ADDR, REG_COUNT, ZERO_REG};
use super::error::{OracleError, Result};

/// A register-file address in `0..=31`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct RegAddr(u8);

impl RegAddr {
    /// The hardwired-zero register.
    pub const ZERO: Self = Self(ZERO_REG);

    /// The highest register address.
    pub const MAX: Self = Self(MAX_REG_ADDR);

    /// Creates a register address, rejecting values above 31.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::InvalidRegister`] if `idx > 31`.
    pub fn new(idx: u8) -> Result<Self> {
        if idx > MAX_REG_ADDR {
            Err(OracleError::InvalidRegister(idx))
        } else {
            Ok(Self(idx))
        }
    }

    /// Returns the address as an array index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the raw 5-bit address value.
    #[inline]
    pub const fn val(self) -> u8 {
        self.0
    }

    /// Returns `true` for register 0.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == ZERO_REG
    }

    /// Returns the address mirrored across the file (`31 - self`).
    #[inline]
    pub const fn mirrored(self) -> Self {
        Self(MAX_REG_ADDR - self.0)
    }

    /// Iterates every register address in ascending order.
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..REG_COUNT as u8).map(Self)
    }
}

impl TryFrom<u8> for RegAddr {
    type Error = OracleError;

    fn try_from(idx: u8) -> Result<Self> {
        Self::new(idx)
    }
}

impl From<RegAddr> for u8 {
    fn from(addr: RegAddr) -> Self {
        addr.val()
    }
}

impl From<RegAddr> for usize {
    fn from(addr: RegAddr) -> Self {
        addr.index()
    }
}

impl fmt::Display for RegAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
