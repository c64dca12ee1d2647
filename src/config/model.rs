use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-of-file delimiter rule every RTL source must start with.
pub const DEFAULT_DELIMITER: &str = "-- ------------------------------------------------------------------------------------------------------------";

/// Root configuration. Every section falls back to the built-in rule set, so an
/// empty file is equivalent to [`Config::default`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub scanner: ScannerConfig,
    pub ignore: IgnoreConfig,
    pub header: HeaderConfig,
    pub process_doc: ProcessDocConfig,
    pub report: ReportConfig,
}

/// Which directories are walked and which files are picked up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScannerConfig {
    /// Directories to scan, relative to the repository root. Missing roots are skipped.
    pub roots: Vec<PathBuf>,

    /// File name suffixes to check, matched case-insensitively (e.g. ".terp.vhd").
    pub extensions: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            roots: [
                "packet_scheduler/rtl",
                "packet_scheduler/tb",
                "packet_scheduler/uvm",
                "uvm_order_priority_queue/tb",
                "uvm_order_priority_queue/rtl_overrides",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            extensions: strings(&[".vhd", ".terp.vhd", ".sv", ".v"]),
        }
    }
}

/// Path-segment exclusion rules for generated and tool-owned trees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IgnoreConfig {
    /// A path is ignored if any segment equals one of these names.
    pub dir_names: Vec<String>,

    /// A path is ignored if any segment starts with one of these prefixes.
    pub dir_prefixes: Vec<String>,

    /// Segments that together identify a testbench tree.
    pub testbench_segments: Vec<String>,

    /// Preprocessed monolithic outputs that are ignored inside a testbench tree.
    pub generated_testbench_files: Vec<String>,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            dir_names: strings(&[
                "trash_bin",
                "work",
                "rtl_gen_split",
                "rtl_gen_monolithic",
                "uvm_patched",
                ".git",
                ".qsys_edit",
            ]),
            dir_prefixes: strings(&["work_uvm_", "work_"]),
            testbench_segments: strings(&["packet_scheduler", "tb"]),
            generated_testbench_files: strings(&[
                "ordered_priority_queue.vhd",
                "ordered_priority_queue_wrapper.vhd",
            ]),
        }
    }
}

/// Top-of-file header block rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HeaderConfig {
    /// File name suffixes the header and process-doc rules apply to.
    pub extensions: Vec<String>,

    /// Exact text the file must start with.
    pub delimiter: String,

    /// Labels that must each appear within the first `head_lines` lines.
    pub fields: Vec<String>,

    pub head_lines: usize,

    /// Directory fragments (e.g. "packet_scheduler/tb") exempt from header and process-doc rules.
    pub exempt_dirs: Vec<String>,

    /// File names exempt from header and process-doc rules.
    pub exempt_files: Vec<String>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            extensions: strings(&[".vhd", ".terp.vhd"]),
            delimiter: DEFAULT_DELIMITER.to_string(),
            fields: strings(&["IP Name:", "Author:", "Revision:", "Description:"]),
            head_lines: 80,
            exempt_dirs: strings(&[
                "packet_scheduler/tb",
                "packet_scheduler/uvm",
                "uvm_order_priority_queue/tb",
            ]),
            exempt_files: strings(&["ordered_priority_queue_top.vhd"]),
        }
    }
}

/// Documentation requirements for labeled process declarations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProcessDocConfig {
    /// Labels starting with this prefix are checked (e.g. `proc_fill : process`).
    pub label_prefix: String,

    /// Keyword following the label, matched case-insensitively.
    pub keyword: String,

    /// Number of lines, ending at the declaration, searched for the markers.
    pub lookback_lines: usize,

    pub name_marker: String,
    pub brief_marker: String,
}

impl Default for ProcessDocConfig {
    fn default() -> Self {
        Self {
            label_prefix: "proc_".to_string(),
            keyword: "process".to_string(),
            lookback_lines: 400,
            name_marker: "-- @name".to_string(),
            brief_marker: "-- @brief".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Findings listed in the text report before the remainder is summarized.
    pub max_findings: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { max_findings: 200 }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
