pub mod bytecode;
pub mod error;
pub mod listing;

use std::{io::stdout, path::PathBuf, process::ExitCode};

use bytecode::{opcode_table::OpcodeTable, yarv::read_instruction_file};
use clap::{Parser, Subcommand};
use error::ListerError;
use listing::{list_opcodes, write_listing, OutputFormat};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Lists the opcodes of a bytecode virtual machine as `NAME = 0xHH # DDD` lines.
#[derive(Parser, Debug)]
#[command(name = "pyc_opcodes", version = env!("CARGO_PKG_VERSION"))]
struct Arguments {
	/// Output format
	#[arg(long, global = true, value_enum, env = "PYC_OPCODES_FORMAT", default_value = "text")]
	format: OutputFormat,

	/// Log filter for diagnostics on stderr, overrides RUST_LOG
	#[arg(long, global = true, value_name = "FILTER")]
	log_level: Option<String>,

	#[command(subcommand)]
	machine: Option<Machine>,
}

#[derive(Subcommand, Debug)]
enum Machine {
	/// The CPython 2.6 virtual machine (default)
	Python,
	/// Ruby YARV instructions read from an insns.def file
	Yarv {
		/// Path to insns.def
		insns_def: PathBuf,
	},
}

fn main() -> ExitCode {
	let arguments = Arguments::parse();
	init_tracing(arguments.log_level.as_deref());

	match run(&arguments) {
		Ok(()) => ExitCode::SUCCESS,
		Err(error) => {
			error!(%error, "listing failed");
			eprintln!("Error: {error}");
			ExitCode::FAILURE
		}
	}
}

/// Builds the table for the chosen machine and writes its listing to stdout.
fn run(arguments: &Arguments) -> Result<(), ListerError> {
	let table = match &arguments.machine {
		None | Some(Machine::Python) => OpcodeTable::python(),
		Some(Machine::Yarv { insns_def }) => OpcodeTable::from_names(read_instruction_file(insns_def)?)?,
	};
	let lines = list_opcodes(&table);
	info!(lines = lines.len(), format = ?arguments.format, "writing listing");
	write_listing(&mut stdout().lock(), &lines, arguments.format)
}

fn init_tracing(log_level: Option<&str>) {
	let env_filter = match log_level {
		Some(log_level) => EnvFilter::new(log_level),
		None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
	};
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.try_init();
}
