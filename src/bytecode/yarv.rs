use std::{collections::HashSet, fs, path::Path};

use tracing::debug;

use crate::error::ListerError;

/// The line in `insns.def` that introduces an instruction, its name is on the following line.
const DEFINE_INSN: &str = "DEFINE_INSN";

/// Reads a YARV `insns.def` file and returns its upper-cased instruction names in definition order.
pub fn read_instruction_file(path: &Path) -> Result<Vec<String>, ListerError> {
	let text = fs::read_to_string(path)
		.map_err(|error| ListerError::UnreadableInstructionFile(path.to_path_buf(), error.to_string()))?;
	debug!(path = %path.display(), bytes = text.len(), "read instruction file");
	parse_instruction_names(&text)
}

/// Collects the names following each `DEFINE_INSN` line.
pub fn parse_instruction_names(text: &str) -> Result<Vec<String>, ListerError> {
	let mut out = Vec::new();
	let mut seen = HashSet::new();
	let mut lines = text.lines().map(|line| line.trim_end_matches('\r')).enumerate();
	while let Some((index, line)) = lines.next() {
		if line != DEFINE_INSN {
			continue;
		}
		// The name must be on the line right after
		let name = match lines.next() {
			Some((_, name)) if !name.trim().is_empty() => name.trim().to_uppercase(),
			_ => return Err(ListerError::MissingInstructionName(index + 1)),
		};
		if !seen.insert(name.clone()) {
			return Err(ListerError::DuplicateInstruction(name));
		}
		out.push(name);
	}
	debug!(count = out.len(), "parsed instruction names");
	Ok(out)
}
