//! Integration tests for the workload generator output contract

use fsstress_core::OutputFormat;
use fsstress_core::workload::{Command, Generator, filenames, run};
use fsstress_testkit::{parse_blocks, parse_commands};

fn run_default(identifier: &str) -> String {
    let files: Vec<String> = filenames(5).collect();
    let mut out = Vec::new();
    run(&mut out, identifier, &files, 5).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_default_run_opens_twenty_five_files() {
    let output = run_default("A");
    let opens = output.lines().filter(|l| l.starts_with("open ")).count();
    assert_eq!(opens, 25);
}

#[test]
fn test_descriptors_are_contiguous_from_zero() {
    let blocks = parse_blocks(&run_default("A"));
    let fds: Vec<u64> = blocks.iter().map(|b| b.fd).collect();
    assert_eq!(fds, (0..25).collect::<Vec<u64>>());
}

#[test]
fn test_open_k_names_file_k_mod_nfiles() {
    let blocks = parse_blocks(&run_default("A"));
    for (k, block) in blocks.iter().enumerate() {
        assert_eq!(block.file, format!("test_{}", k % 5));
    }
}

#[test]
fn test_write_payload_matches_block_descriptor() {
    let blocks = parse_blocks(&run_default("worker-3"));
    for block in &blocks {
        assert_eq!(block.payload, format!("worker-3-{}_", block.fd));
    }
}

#[test]
fn test_reference_blocks() {
    let output = run_default("A");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        &lines[0..4],
        ["open test_0", "read 0 9999999999", "write 0 A-0_", "close 0"]
    );
    assert_eq!(
        &lines[16..20],
        ["open test_4", "read 4 9999999999", "write 4 A-4_", "close 4"]
    );
    assert_eq!(
        &lines[20..24],
        ["open test_0", "read 5 9999999999", "write 5 A-5_", "close 5"]
    );
}

#[test]
fn test_every_line_re_renders_identically() {
    let output = run_default("A");
    let commands = parse_commands(&output);
    let rendered: Vec<String> = commands.iter().map(Command::to_string).collect();
    let emitted: Vec<&str> = output.lines().collect();
    assert_eq!(rendered, emitted);
}

#[test]
fn test_json_matches_text_sequence() {
    let files: Vec<String> = filenames(5).collect();

    let mut text = Vec::new();
    Generator::new("A")
        .run(&mut text, &files, 5, OutputFormat::Text)
        .unwrap();

    let mut json = Vec::new();
    Generator::new("A")
        .run(&mut json, &files, 5, OutputFormat::Json)
        .unwrap();

    let from_text = parse_commands(&String::from_utf8(text).unwrap());
    let from_json: Vec<Command> = String::from_utf8(json)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(from_text, from_json);
}
