use std::{fmt::Display, io::Write};

use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use crate::{bytecode::opcode_table::OpcodeTable, error::ListerError};

/// Names starting with this char are placeholders for unused opcodes.
const PLACEHOLDER_PREFIX: char = '<';
/// Names ending with this also get listed without it, `SLICE+0` is just `SLICE`.
const ZERO_VARIANT_SUFFIX: &str = "+0";

/// Width the name column is padded to.
const NAME_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	Text,
	Json,
}

/// A single line of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingLine {
	pub name: String,
	pub code: u8,
}

impl ListingLine {
	pub fn new(name: &str, code: u8) -> Self {
		Self {
			name: name.to_string(),
			code,
		}
	}
}

impl Display for ListingLine {
	fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(formatter, "{:<width$} = 0x{:02x} # {:03}", self.name, self.code, self.code, width = NAME_WIDTH)
	}
}

/// Builds the listing lines for every named opcode in the table, in code order.
pub fn list_opcodes(table: &OpcodeTable) -> Vec<ListingLine> {
	let mut out = Vec::new();
	for (code, name) in table.iter() {
		if name.starts_with(PLACEHOLDER_PREFIX) {
			continue;
		}
		if let Some(stripped_name) = name.strip_suffix(ZERO_VARIANT_SUFFIX) {
			out.push(ListingLine::new(stripped_name, code));
		}
		out.push(ListingLine::new(name, code));
	}
	debug!(lines = out.len(), "built listing");
	out
}

/// Writes the listing lines in the given format.
pub fn write_listing<W: Write>(writer: &mut W, lines: &[ListingLine], format: OutputFormat) -> Result<(), ListerError> {
	let result = match format {
		OutputFormat::Text => lines.iter().try_for_each(|line| writeln!(writer, "{line}")),
		OutputFormat::Json => serde_json::to_writer_pretty(&mut *writer, lines)
			.map_err(std::io::Error::from)
			.and_then(|_| writeln!(writer)),
	};
	result
		.and_then(|_| writer.flush())
		.map_err(|error| ListerError::OutputFailed(error.to_string()))
}
