//! Deterministic generation of fixed-content memory tables for
//! bus-addressable testbench memories.
//!
//! Given a seed, a word width, a word count and a base address, this
//! crate derives a reproducible pseudo-random [`MemoryTable`] together
//! with the address-to-index mapping that inverts the table's layout,
//! and renders both as a SystemVerilog package a simulation testbench
//! can import.
//!
//! The content stream is ChaCha8 ([`rand_chacha::ChaCha8Rng`]) seeded
//! once per generation run, so identical configurations always yield
//! byte-identical tables, on any platform.
//!
//! [`MemoryTable`]: table::MemoryTable

#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]

pub mod config;
pub mod render;
pub mod table;
pub mod tracing;
