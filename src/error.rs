use std::{error::Error, fmt::Display, path::PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListerError {
	UnreadableInstructionFile(PathBuf, String),
	MissingInstructionName(usize),
	DuplicateInstruction(String),
	TooManyInstructions(usize),
	OutputFailed(String),
}

impl Display for ListerError {
	fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::UnreadableInstructionFile(path, reason) => write!(formatter, "Unable to read instruction file \"{}\": {reason}.", path.display()),
			Self::MissingInstructionName(line) => write!(formatter, "DEFINE_INSN on line {line} is not followed by an instruction name."),
			Self::DuplicateInstruction(name) => write!(formatter, "Instruction {name} is defined more than once."),
			Self::TooManyInstructions(count) => write!(formatter, "{count} instructions do not fit in a table of 256 opcodes."),
			Self::OutputFailed(reason) => write!(formatter, "Unable to write listing: {reason}."),
		}
	}
}

impl Error for ListerError {}
