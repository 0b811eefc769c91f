use strum::IntoEnumIterator;

use crate::error::ListerError;

use super::python_opcode::PythonOpcode;

/// A table naming every one of the 256 possible opcode values.
/// Values without an instruction are named `<N>` with `N` being the value in decimal.
pub struct OpcodeTable {
	names: Vec<Box<str>>,
}

impl OpcodeTable {
	pub const SIZE: usize = 256;

	/// Builds the table of the CPython 2.6 virtual machine.
	pub fn python() -> Self {
		let mut names = Self::placeholder_names();
		for opcode in PythonOpcode::iter() {
			names[opcode.get_code() as usize] = opcode.get_name().into();
		}
		Self { names }
	}

	/// Builds a table from instruction names numbered by their position, the rest of the slots are placeholders.
	pub fn from_names<I, S>(instruction_names: I) -> Result<Self, ListerError>
	where
		I: IntoIterator<Item = S>,
		S: Into<Box<str>>,
	{
		let mut names = Self::placeholder_names();
		let mut count = 0;
		for instruction_name in instruction_names {
			if count < Self::SIZE {
				names[count] = instruction_name.into();
			}
			count += 1;
		}
		if count > Self::SIZE {
			return Err(ListerError::TooManyInstructions(count));
		}
		Ok(Self { names })
	}

	fn placeholder_names() -> Vec<Box<str>> {
		(0..Self::SIZE)
			.map(|code| format!("<{code}>").into_boxed_str())
			.collect()
	}

	/// Returns the name of an opcode value. Total over all `u8` values.
	pub fn get_name(&self, code: u8) -> &str {
		&self.names[code as usize]
	}

	/// Iterates over (code, name) pairs in code order.
	pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
		(0..=u8::MAX).map(move |code| (code, self.get_name(code)))
	}
}
