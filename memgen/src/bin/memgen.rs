use std::io::Write;
use std::path::PathBuf;
use std::{fs, io};

use anyhow::Context;
use clap::{Parser, ValueHint};
use memgen::config::MemoryConfig;
use memgen::render::{render_package, RenderOptions};
use memgen::table::MemoryTable;
use tracing::info;

/// Generates a SystemVerilog package holding a seeded pseudo-random
/// memory image for a bus-addressable testbench memory.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Number of words (bus beats) in the table.
    #[arg(
        short = 'n',
        long = "words",
        env = "MEMGEN_WORDS",
        default_value = "256",
        value_parser = parse_maybe_hex
    )]
    words: u64,

    /// Width of one word in bits. Must be a multiple of 8 with a
    /// power-of-two byte stride.
    #[arg(
        short = 'w',
        long = "width",
        env = "MEMGEN_WIDTH",
        default_value = "64",
        value_parser = parse_maybe_hex
    )]
    width: u64,

    /// Byte address of word 0.
    #[arg(
        long = "base-addr",
        env = "MEMGEN_BASE_ADDR",
        default_value = "0x1000",
        value_parser = parse_maybe_hex
    )]
    base_addr: u64,

    /// Seed of the pseudo-random content stream.
    #[arg(
        short = 's',
        long = "seed",
        env = "MEMGEN_SEED",
        default_value = "0x1234",
        value_parser = parse_maybe_hex
    )]
    seed: u64,

    /// Name of the emitted SystemVerilog package.
    #[arg(long, env = "MEMGEN_PACKAGE_NAME", default_value = "memory_pkg")]
    package_name: String,

    /// Where to write the package. Defaults to stdout.
    #[arg(short = 'o', long, env = "MEMGEN_OUTPUT", value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,
}

/// Accepts both decimal and `0x`-prefixed hexadecimal values.
fn parse_maybe_hex(s: &str) -> Result<u64, std::num::ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => u64::from_str_radix(digits, 16),
        None => s.parse(),
    }
}

fn main() -> anyhow::Result<()> {
    memgen::tracing::init();

    let args = Cli::parse();
    let config = MemoryConfig {
        word_count: args.words as usize,
        data_width_bits: args.width as usize,
        base_addr: args.base_addr,
        seed: args.seed,
    };

    let table = MemoryTable::generate(config)?;
    let text = render_package(
        &table,
        &RenderOptions {
            package_name: args.package_name,
        },
    );

    // One write for the whole artifact; a consumer never sees a
    // half-emitted table.
    match &args.output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("writing {}", path.display()))?
        }
        None => io::stdout().write_all(text.as_bytes())?,
    }

    info!(
        words = config.word_count,
        width_bits = config.data_width_bits,
        "generated memory package at base {:#x}",
        config.base_addr
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn numeric_flags_accept_both_radixes() {
        assert_eq!(parse_maybe_hex("256"), Ok(256));
        assert_eq!(parse_maybe_hex("0x1000"), Ok(0x1000));
        assert_eq!(parse_maybe_hex("0X1234"), Ok(0x1234));
        assert!(parse_maybe_hex("0xzz").is_err());
    }
}
