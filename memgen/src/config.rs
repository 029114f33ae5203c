//! The immutable configuration driving one generation run, and its
//! validation.

use thiserror::Error;

/// Stores the result of configuration validation. Returns a
/// [`ConfigError`] upon a violated precondition.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// An error caused by an invalid [`MemoryConfig`].
///
/// These are caller mistakes in the generation constants, not runtime
/// conditions. There is no retry path: generation aborts before any
/// output is produced.
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
pub enum ConfigError {
    /// The word count was zero.
    #[error("word count must be positive")]
    ZeroWordCount,

    /// The data width was zero or not a whole number of bytes.
    #[error("data width of {0} bits is not a positive multiple of 8")]
    WidthNotByteMultiple(usize),

    /// The byte stride was not a power of two, so the shift-based
    /// address-to-index formula does not apply.
    #[error("byte stride of {0} is not a power of two")]
    StrideNotPowerOfTwo(u64),

    /// The table did not fit below the top of the 64-bit address space.
    #[error(
        "{word_count} words of {stride} bytes starting at {base_addr:#x} overflow the 64-bit address space"
    )]
    AddressRangeOverflow {
        /// Byte address of word 0.
        base_addr: u64,
        /// Number of words in the table.
        word_count: usize,
        /// Bytes per word.
        stride: u64,
    },
}

/// The immutable (seed, count, width, base address) tuple driving one
/// generation run. Constructed once, threaded explicitly into the
/// generator, never mutated.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MemoryConfig {
    /// Number of words (bus beats) in the table.
    pub word_count: usize,
    /// Width of one word in bits. Must be a positive multiple of 8 with
    /// a power-of-two byte stride.
    pub data_width_bits: usize,
    /// Byte address of word 0.
    pub base_addr: u64,
    /// Seed of the pseudo-random content stream.
    pub seed: u64,
}

impl MemoryConfig {
    /// Byte distance between consecutive word addresses.
    pub const fn bytes_per_word(&self) -> u64 {
        (self.data_width_bits / 8) as u64
    }

    /// log2 of the byte stride, as used by the address-to-index shift.
    /// Only meaningful once [`validate`](Self::validate) has accepted
    /// the configuration.
    pub const fn stride_log2(&self) -> u32 {
        self.bytes_per_word().trailing_zeros()
    }

    /// Number of hex digits needed to print one word.
    pub const fn hex_digits(&self) -> usize {
        (self.data_width_bits + 3) / 4
    }

    /// Checks every precondition of the generation contract.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.word_count == 0 {
            return Err(ConfigError::ZeroWordCount);
        }
        if self.data_width_bits == 0 || self.data_width_bits % 8 != 0 {
            return Err(ConfigError::WidthNotByteMultiple(self.data_width_bits));
        }

        let stride = self.bytes_per_word();
        if !stride.is_power_of_two() {
            return Err(ConfigError::StrideNotPowerOfTwo(stride));
        }

        // Every byte of the last word must have a representable address.
        (self.word_count as u64 - 1)
            .checked_mul(stride)
            .and_then(|span| self.base_addr.checked_add(span))
            .and_then(|last_word| last_word.checked_add(stride - 1))
            .ok_or(ConfigError::AddressRangeOverflow {
                base_addr: self.base_addr,
                word_count: self.word_count,
                stride,
            })?;

        Ok(())
    }
}
