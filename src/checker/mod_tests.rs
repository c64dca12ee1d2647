use std::path::Path;

use super::*;
use crate::config::DEFAULT_DELIMITER;

fn checker() -> SourceChecker {
    SourceChecker::new(&Config::default(), "/repo").unwrap()
}

fn messages(path: &str, data: &[u8]) -> Vec<String> {
    checker()
        .check(Path::new(path), data)
        .into_iter()
        .map(|f| f.message)
        .collect()
}

fn clean_rtl() -> String {
    format!(
        "{DEFAULT_DELIMITER}\n\
         -- IP Name: opq\n\
         -- Author: someone\n\
         -- Revision: 2\n\
         -- Description: queue\n\
         -- @name proc_main\n\
         -- @brief main loop\n\
         proc_main : process (clk)\n\
         begin\n\
         end process;\n"
    )
}

#[test]
fn clean_rtl_file_has_no_findings() {
    assert!(messages("/repo/packet_scheduler/rtl/opq.vhd", clean_rtl().as_bytes()).is_empty());
}

#[test]
fn testbench_vhdl_skips_header_and_process_rules() {
    let data = b"proc_stim : process\n";
    assert!(messages("/repo/packet_scheduler/tb/opq_tb.vhd", data).is_empty());
}

#[test]
fn systemverilog_only_gets_generic_checks() {
    let data = b"module m; \nendmodule";
    assert_eq!(
        messages("/repo/packet_scheduler/uvm/env.sv", data),
        vec![MISSING_EOF_NEWLINE, TRAILING_WHITESPACE]
    );
}

#[test]
fn invalid_utf8_stops_text_checks() {
    let data = b"bad \xff\xfe byte \r\n";
    assert_eq!(
        messages("/repo/packet_scheduler/rtl/opq.vhd", data),
        vec![CR_FOUND, NOT_UTF8]
    );
}

#[test]
fn checks_run_in_fixed_order() {
    let data = b"proc_x : process \r\nend";
    let findings = checker().check(Path::new("/repo/packet_scheduler/rtl/a.vhd"), data);
    let messages: Vec<&str> = findings.iter().map(|f| f.message.as_str()).collect();

    assert_eq!(messages[0], CR_FOUND);
    assert_eq!(messages[1], MISSING_EOF_NEWLINE);
    assert_eq!(messages[2], TRAILING_WHITESPACE);
    assert!(messages[3].starts_with("Missing top-of-file delimiter line"));
    assert!(messages[4].contains("\"IP Name:\""));
    assert!(messages[7].contains("\"Description:\""));
    assert_eq!(messages[8], "proc_x missing preceding \"-- @name\" block");
    assert_eq!(messages[9], "proc_x missing preceding \"-- @brief\" block");
    assert_eq!(messages.len(), 10);
}

#[test]
fn scope_uses_path_relative_to_repo_root() {
    let checker = SourceChecker::new(&Config::default(), "/packet_scheduler/tb").unwrap();
    let findings = checker.check(Path::new("/packet_scheduler/tb/x/rtl.vhd"), b"--\n");

    assert_eq!(findings.len(), 5);
}
