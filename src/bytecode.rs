pub mod python_opcode;
pub mod opcode_table;
pub mod yarv;
