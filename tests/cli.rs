use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn pyc_opcodes() -> Command {
	let mut command = Command::cargo_bin("pyc_opcodes").unwrap();
	command.env_remove("PYC_OPCODES_FORMAT").env_remove("RUST_LOG");
	command
}

#[test]
fn default_lists_python_opcodes() {
	let output = pyc_opcodes().assert().success().get_output().stdout.clone();
	let stdout = String::from_utf8(output).unwrap();
	let lines: Vec<&str> = stdout.lines().collect();
	assert_eq!(lines.len(), 116);
	assert_eq!(lines[0], "STOP_CODE            = 0x00 # 000");
	assert!(lines.contains(&"STORE_NAME           = 0x5a # 090"));
	assert_eq!(lines[lines.len() - 1], "EXTENDED_ARG         = 0x8f # 143");
}

#[test]
fn python_subcommand_matches_default() {
	let default_output = pyc_opcodes().output().unwrap().stdout;
	pyc_opcodes()
		.arg("python")
		.assert()
		.success()
		.stdout(default_output);
}

#[test]
fn stripped_line_comes_before_zero_variant() {
	pyc_opcodes()
		.assert()
		.success()
		.stdout(predicate::str::contains(
			"STORE_SLICE          = 0x28 # 040\nSTORE_SLICE+0        = 0x28 # 040\n",
		));
}

#[test]
fn placeholders_are_not_listed() {
	pyc_opcodes()
		.assert()
		.success()
		.stdout(predicate::str::contains("<").not())
		.stdout(predicate::str::contains("# 006").not());
}

#[test]
fn json_format() {
	let output = pyc_opcodes().args(["--format", "json"]).assert().success().get_output().stdout.clone();
	let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
	let entries = value.as_array().unwrap();
	assert_eq!(entries.len(), 116);
	assert_eq!(entries[0], serde_json::json!({ "name": "STOP_CODE", "code": 0 }));
}

#[test]
fn format_from_environment() {
	pyc_opcodes()
		.env("PYC_OPCODES_FORMAT", "json")
		.assert()
		.success()
		.stdout(predicate::str::starts_with("["));
}

#[test]
fn yarv_lists_instructions_in_definition_order() {
	let mut insns_def = NamedTempFile::new().unwrap();
	write!(insns_def, "DEFINE_INSN\nnop\n()\n{{\n}}\n\nDEFINE_INSN\ngetlocal\n()\n").unwrap();
	pyc_opcodes()
		.arg("yarv")
		.arg(insns_def.path())
		.assert()
		.success()
		.stdout("NOP                  = 0x00 # 000\nGETLOCAL             = 0x01 # 001\n");
}

#[test]
fn yarv_missing_file_fails() {
	pyc_opcodes()
		.args(["yarv", "/nonexistent/insns.def"])
		.assert()
		.failure()
		.code(1)
		.stdout("")
		.stderr(predicate::str::contains("Unable to read instruction file"));
}

#[test]
fn yarv_requires_a_path() {
	pyc_opcodes().arg("yarv").assert().failure().code(2);
}
