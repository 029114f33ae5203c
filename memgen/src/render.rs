//! Rendering of a generated table into SystemVerilog package text.
//!
//! This carries no algorithmic weight: its only contract is a lossless,
//! fully ordered print of what [`MemoryTable`] already computed. The
//! whole artifact is built in memory and handed back in one piece, so a
//! failed run can never leave a partial table behind.

use crate::table::MemoryTable;

const BANNER_RULE: &str =
    "// ---------------------------------------------------------------------------------------------------------";

/// Options controlling the emitted package text.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RenderOptions {
    /// Name of the emitted SystemVerilog package.
    pub package_name: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            package_name: "memory_pkg".into(),
        }
    }
}

/// The exact command line reproducing `table`, printed into the banner
/// of the generated file.
pub fn reproduction_command(table: &MemoryTable) -> String {
    let config = table.config();
    format!(
        "memgen --seed {:#x} --words {} --width {} --base-addr {:#x}",
        config.seed, config.word_count, config.data_width_bits, config.base_addr
    )
}

/// Renders the complete package for `table` in one shot.
pub fn render_package(table: &MemoryTable, opts: &RenderOptions) -> String {
    let config = table.config();
    let map = table.index_map();
    let last = table.entries().len() - 1;

    let mut lines = vec![
        BANNER_RULE.to_string(),
        "// AUTO-GENERATED FILE, PLEASE KEEP IT THAT WAY".to_string(),
        format!("// Run Command: {}", reproduction_command(table)),
        BANNER_RULE.to_string(),
        String::new(),
        format!("package {};", opts.package_name),
        String::new(),
        format!("  parameter int MEM_WORDS       = {};", config.word_count),
        format!(
            "  parameter logic [63:0] MEM_BASE_ADDR = 64'h{:016X};",
            config.base_addr
        ),
        String::new(),
        format!(
            "  localparam int BYTES_PER_BEAT = {};",
            config.bytes_per_word()
        ),
        String::new(),
        format!("  typedef logic [{}:0] mem_word_t;", config.data_width_bits - 1),
        String::new(),
        "  function automatic int unsigned addr2idx (logic [63:0] a);".to_string(),
        format!(
            "    addr2idx = (a - MEM_BASE_ADDR) >> {};",
            map.stride_log2()
        ),
        "  endfunction".to_string(),
        String::new(),
        "  const mem_word_t MEM [0:MEM_WORDS-1] = '{".to_string(),
    ];

    for entry in table.entries() {
        let comma = if entry.index == last { "" } else { "," };
        lines.push(format!(
            "    {}'h{}{}   // idx {:3}  addr=64'h{:016X}",
            config.data_width_bits,
            entry.hex_value(),
            comma,
            entry.index,
            entry.addr,
        ));
    }

    lines.push("  };".to_string());
    lines.push(format!("endpackage : {}", opts.package_name));
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfig;

    fn small_table() -> MemoryTable {
        MemoryTable::generate(MemoryConfig {
            word_count: 4,
            data_width_bits: 32,
            base_addr: 0x4000_0000,
            seed: 1,
        })
        .unwrap()
    }

    #[test]
    fn declarations_come_before_the_table() {
        let text = render_package(&small_table(), &RenderOptions::default());

        let order = [
            "// AUTO-GENERATED FILE",
            "// Run Command: memgen --seed 0x1 --words 4 --width 32 --base-addr 0x40000000",
            "package memory_pkg;",
            "parameter int MEM_WORDS       = 4;",
            "parameter logic [63:0] MEM_BASE_ADDR = 64'h0000000040000000;",
            "localparam int BYTES_PER_BEAT = 4;",
            "typedef logic [31:0] mem_word_t;",
            "addr2idx = (a - MEM_BASE_ADDR) >> 2;",
            "const mem_word_t MEM [0:MEM_WORDS-1] = '{",
            "endpackage : memory_pkg",
        ];

        let mut from = 0;
        for needle in order {
            let at = text[from..]
                .find(needle)
                .unwrap_or_else(|| panic!("missing or out of order: {needle}"));
            from += at + needle.len();
        }
    }

    #[test]
    fn every_literal_but_the_last_is_comma_terminated() {
        let table = small_table();
        let text = render_package(&table, &RenderOptions::default());

        let literals: Vec<&str> = text.lines().filter(|l| l.contains("// idx")).collect();
        assert_eq!(literals.len(), 4);

        for line in &literals[..3] {
            assert!(line.contains("32'h") && line.contains(","), "{line}");
        }
        assert!(!literals[3].contains(','), "{}", literals[3]);
    }

    #[test]
    fn custom_package_name_is_used_at_both_ends() {
        let opts = RenderOptions {
            package_name: "apb2axi_memory_pkg".into(),
        };
        let text = render_package(&small_table(), &opts);

        assert!(text.contains("package apb2axi_memory_pkg;"));
        assert!(text.contains("endpackage : apb2axi_memory_pkg"));
    }
}
