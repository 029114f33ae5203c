//! Core generation of the memory table and of the address-to-index
//! mapping that inverts its layout.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::config::{ConfigResult, MemoryConfig};

/// One generated word together with its position in the table.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MemoryEntry {
    /// Position of the word in the table.
    pub index: usize,
    /// Byte address of the word, `base_addr + index * stride`.
    pub addr: u64,
    /// Word content, big-endian, exactly `stride` bytes.
    pub value: Vec<u8>,
}

impl MemoryEntry {
    /// Upper-case hex rendering of the content, one digit per nibble.
    pub fn hex_value(&self) -> String {
        hex::encode_upper(&self.value)
    }
}

/// The closed-form mapping from byte addresses back to table indices,
/// `idx(a) = (a - base) >> log2(stride)`.
///
/// The shift form is the reason the stride must be a power of two.
/// [`index_of`](Self::index_of) assumes an aligned in-range address;
/// callers that cannot guarantee one should check
/// [`contains`](Self::contains) first.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct AddrIndexMap {
    base_addr: u64,
    stride_log2: u32,
    word_count: usize,
}

impl AddrIndexMap {
    fn new(config: &MemoryConfig) -> Self {
        Self {
            base_addr: config.base_addr,
            stride_log2: config.stride_log2(),
            word_count: config.word_count,
        }
    }

    /// Index of the word at `addr`. Meaningful only for addresses that
    /// are stride-aligned and inside the covered range; anything else
    /// is unchecked by design.
    pub const fn index_of(&self, addr: u64) -> usize {
        (addr.wrapping_sub(self.base_addr) >> self.stride_log2) as usize
    }

    /// Whether `addr` is stride-aligned and inside the covered range.
    pub const fn contains(&self, addr: u64) -> bool {
        if addr < self.base_addr {
            return false;
        }
        let offset = addr - self.base_addr;
        offset & ((1 << self.stride_log2) - 1) == 0
            && (offset >> self.stride_log2) < self.word_count as u64
    }

    /// Byte address of word 0.
    pub const fn base_addr(&self) -> u64 {
        self.base_addr
    }

    /// log2 of the byte stride, as rendered into the `addr2idx` shift.
    pub const fn stride_log2(&self) -> u32 {
        self.stride_log2
    }
}

/// The ordered sequence of generated (index, address, value) entries,
/// immutable once generated.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MemoryTable {
    config: MemoryConfig,
    map: AddrIndexMap,
    entries: Vec<MemoryEntry>,
}

impl MemoryTable {
    /// Generates the table for `config`.
    ///
    /// Seeds one ChaCha8 stream exactly once, then draws exactly
    /// `word_count` values of `data_width_bits` bits each, in index
    /// order, with no bits reused or skipped between draws. Identical
    /// configurations always produce identical tables.
    pub fn generate(config: MemoryConfig) -> ConfigResult<Self> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self::fill(config, &mut rng))
    }

    // The rng is exclusively owned by one generation run: the stream
    // state left behind by entry i determines entry i + 1, so entries
    // cannot be drawn out of order.
    fn fill(config: MemoryConfig, rng: &mut impl RngCore) -> Self {
        let stride = config.bytes_per_word();

        let mut entries = Vec::with_capacity(config.word_count);
        for index in 0..config.word_count {
            let mut value = vec![0_u8; stride as usize];
            rng.fill_bytes(&mut value);

            entries.push(MemoryEntry {
                index,
                addr: config.base_addr + index as u64 * stride,
                value,
            });
        }

        debug!(
            words = entries.len(),
            width_bits = config.data_width_bits,
            "filled memory table"
        );

        Self {
            map: AddrIndexMap::new(&config),
            config,
            entries,
        }
    }

    /// The configuration this table was generated from.
    pub const fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// All entries, in increasing index order.
    pub fn entries(&self) -> &[MemoryEntry] {
        &self.entries
    }

    /// The address-to-index mapping consistent with this table's
    /// layout. Exposed alongside the entries so consumers never have to
    /// re-derive the stride or base.
    pub const fn index_map(&self) -> &AddrIndexMap {
        &self.map
    }
}
