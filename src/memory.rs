//! Configuration memory: an arbitrary-width bit string addressed by bit offset.
//!
//! A [`Configuration`] is the model checker's hashable state key, a `num_bigint::BigUint`
//! paired with its declared bit width `w`. [`MemoryView`] borrows one and provides the typed
//! `get`/`set` operations the core's `LOAD`/`STORE` instructions actually use.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::LoadError;
use crate::instruction::ValueType;

/// A bit-addressable memory image of declared width `w`, shared as the checker's state key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Configuration {
    value: BigUint,
    width: u32,
}

impl Configuration {
    /// Builds a zeroed configuration of the given bit width.
    pub fn zeroed(width: u32) -> Self {
        Self {
            value: BigUint::zero(),
            width,
        }
    }

    /// Parses a configuration from a hex literal (an optional `0x`/`0X` prefix, then hex
    /// digits), with the bit width supplied separately since the literal itself carries none.
    pub fn from_hex_literal(literal: &str, width: u32) -> Result<Self, LoadError> {
        let digits = literal.strip_prefix("0x").or_else(|| literal.strip_prefix("0X")).unwrap_or(literal);
        if digits.is_empty() {
            return Err(LoadError::BadConfigurationLiteral {
                literal: literal.to_string(),
            });
        }
        let value = BigUint::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| LoadError::BadConfigurationLiteral {
            literal: literal.to_string(),
        })?;
        Ok(Self { value, width })
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Borrows this configuration for typed field access.
    pub fn view(&mut self) -> MemoryView<'_> {
        MemoryView { config: self }
    }

    /// Raw underlying integer, most significant byte last addressed, least significant bit 0.
    pub fn as_biguint(&self) -> &BigUint {
        &self.value
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", self.value.to_str_radix(16))
    }
}

/// Typed view over a [`Configuration`]'s bits, scoped to a bit address and [`ValueType`] width.
pub struct MemoryView<'a> {
    config: &'a mut Configuration,
}

impl MemoryView<'_> {
    /// Reads `ty.width()` bits starting at bit offset `address`, truncated to the declared
    /// memory width (bits beyond the end of the configuration read as zero).
    pub fn get(&self, ty: ValueType, address: u32) -> u32 {
        let lo = address as u64;
        let width = ty.width() as u64;
        let mut out: u32 = 0;
        for i in 0..width {
            let bit = lo + i;
            if bit < self.config.width as u64 && self.config.value.bit(bit) {
                out |= 1 << i;
            }
        }
        out
    }

    /// Clears the `ty.width()`-bit window at `address`, then ORs every set bit of `value` into
    /// the image starting at the same offset.
    ///
    /// `value` is *not* masked to `ty.width()` bits first: a register value wider than the
    /// field it's stored into spills its high bits past the cleared window, corrupting
    /// whatever sits there. That's the documented STORE behaviour this layer gives by
    /// default (see [`Self::set_masked`] for the defensive alternative).
    pub fn set(&mut self, ty: ValueType, value: u32, address: u32) {
        self.clear_window(address, ty.width() as u64);
        self.or_bits(address, value, 32);
    }

    /// Like [`Self::set`], but first masks `value` down to `ty.width()` bits, so it can never
    /// corrupt bits past the field it's writing into.
    pub fn set_masked(&mut self, ty: ValueType, value: u32, address: u32) {
        let width = ty.width();
        let mask = if width >= 32 { u32::MAX } else { (1u32 << width) - 1 };
        self.clear_window(address, width as u64);
        self.or_bits(address, value & mask, width);
    }

    fn clear_window(&mut self, address: u32, width: u64) {
        let lo = address as u64;
        for i in 0..width {
            let bit = lo + i;
            if bit >= self.config.width as u64 {
                break;
            }
            self.config.value.set_bit(bit, false);
        }
    }

    fn or_bits(&mut self, address: u32, value: u32, value_bits: u32) {
        let lo = address as u64;
        for i in 0..value_bits as u64 {
            if (value >> i) & 1 == 1 {
                let bit = lo + i;
                if bit < self.config.width as u64 {
                    self.config.value.set_bit(bit, true);
                }
            }
        }
    }
}
