use num_derive::FromPrimitive;
use strum_macros::EnumIter;

/// Opcodes of the CPython 2.6 virtual machine, as listed by that release's `dis.opname`.
/// Codes that are not listed here are unused and show up as `<N>` placeholders in an `OpcodeTable`.
#[derive(FromPrimitive, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PythonOpcode {
	StopCode = 0,
	PopTop = 1,
	RotTwo = 2,
	RotThree = 3,
	DupTop = 4,
	RotFour = 5,
	Nop = 9,
	UnaryPositive = 10,
	UnaryNegative = 11,
	UnaryNot = 12,
	UnaryConvert = 13,
	UnaryInvert = 15,
	ListAppend = 18,
	BinaryPower = 19,
	BinaryMultiply = 20,
	BinaryDivide = 21,
	BinaryModulo = 22,
	BinaryAdd = 23,
	BinarySubtract = 24,
	BinarySubscr = 25,
	BinaryFloorDivide = 26,
	BinaryTrueDivide = 27,
	InplaceFloorDivide = 28,
	InplaceTrueDivide = 29,
	Slice0 = 30,
	Slice1 = 31,
	Slice2 = 32,
	Slice3 = 33,
	StoreSlice0 = 40,
	StoreSlice1 = 41,
	StoreSlice2 = 42,
	StoreSlice3 = 43,
	DeleteSlice0 = 50,
	DeleteSlice1 = 51,
	DeleteSlice2 = 52,
	DeleteSlice3 = 53,
	StoreMap = 54,
	InplaceAdd = 55,
	InplaceSubtract = 56,
	InplaceMultiply = 57,
	InplaceDivide = 58,
	InplaceModulo = 59,
	StoreSubscr = 60,
	DeleteSubscr = 61,
	BinaryLshift = 62,
	BinaryRshift = 63,
	BinaryAnd = 64,
	BinaryXor = 65,
	BinaryOr = 66,
	InplacePower = 67,
	GetIter = 68,
	PrintExpr = 70,
	PrintItem = 71,
	PrintNewline = 72,
	PrintItemTo = 73,
	PrintNewlineTo = 74,
	InplaceLshift = 75,
	InplaceRshift = 76,
	InplaceAnd = 77,
	InplaceXor = 78,
	InplaceOr = 79,
	BreakLoop = 80,
	WithCleanup = 81,
	LoadLocals = 82,
	ReturnValue = 83,
	ImportStar = 84,
	ExecStmt = 85,
	YieldValue = 86,
	PopBlock = 87,
	EndFinally = 88,
	BuildClass = 89,
	StoreName = 90,
	DeleteName = 91,
	UnpackSequence = 92,
	ForIter = 93,
	StoreAttr = 95,
	DeleteAttr = 96,
	StoreGlobal = 97,
	DeleteGlobal = 98,
	DupTopx = 99,
	LoadConst = 100,
	LoadName = 101,
	BuildTuple = 102,
	BuildList = 103,
	BuildMap = 104,
	LoadAttr = 105,
	CompareOp = 106,
	ImportName = 107,
	ImportFrom = 108,
	JumpForward = 110,
	JumpIfFalse = 111,
	JumpIfTrue = 112,
	JumpAbsolute = 113,
	LoadGlobal = 116,
	ContinueLoop = 119,
	SetupLoop = 120,
	SetupExcept = 121,
	SetupFinally = 122,
	LoadFast = 124,
	StoreFast = 125,
	DeleteFast = 126,
	RaiseVarargs = 130,
	CallFunction = 131,
	MakeFunction = 132,
	BuildSlice = 133,
	MakeClosure = 134,
	LoadClosure = 135,
	LoadDeref = 136,
	StoreDeref = 137,
	CallFunctionVar = 140,
	CallFunctionKw = 141,
	CallFunctionVarKw = 142,
	ExtendedArg = 143,
}

impl PythonOpcode {
	/// Opcodes with a code at or above this value are followed by a 16-bit argument.
	pub const HAVE_ARGUMENT: u8 = 90;

	/// Get a `PythonOpcode` from a `u8` value, `None` for unused codes.
	pub fn from_u8(opcode_id: u8) -> Option<Self> {
		num::FromPrimitive::from_u8(opcode_id)
	}

	pub const fn get_code(self) -> u8 {
		self as u8
	}

	pub const fn has_argument(self) -> bool {
		self.get_code() >= Self::HAVE_ARGUMENT
	}

	/// Returns the name `dis` gives the opcode.
	pub const fn get_name(self) -> &'static str {
		match self {
			Self::StopCode => "STOP_CODE",
			Self::PopTop => "POP_TOP",
			Self::RotTwo => "ROT_TWO",
			Self::RotThree => "ROT_THREE",
			Self::DupTop => "DUP_TOP",
			Self::RotFour => "ROT_FOUR",
			Self::Nop => "NOP",
			Self::UnaryPositive => "UNARY_POSITIVE",
			Self::UnaryNegative => "UNARY_NEGATIVE",
			Self::UnaryNot => "UNARY_NOT",
			Self::UnaryConvert => "UNARY_CONVERT",
			Self::UnaryInvert => "UNARY_INVERT",
			Self::ListAppend => "LIST_APPEND",
			Self::BinaryPower => "BINARY_POWER",
			Self::BinaryMultiply => "BINARY_MULTIPLY",
			Self::BinaryDivide => "BINARY_DIVIDE",
			Self::BinaryModulo => "BINARY_MODULO",
			Self::BinaryAdd => "BINARY_ADD",
			Self::BinarySubtract => "BINARY_SUBTRACT",
			Self::BinarySubscr => "BINARY_SUBSCR",
			Self::BinaryFloorDivide => "BINARY_FLOOR_DIVIDE",
			Self::BinaryTrueDivide => "BINARY_TRUE_DIVIDE",
			Self::InplaceFloorDivide => "INPLACE_FLOOR_DIVIDE",
			Self::InplaceTrueDivide => "INPLACE_TRUE_DIVIDE",
			Self::Slice0 => "SLICE+0",
			Self::Slice1 => "SLICE+1",
			Self::Slice2 => "SLICE+2",
			Self::Slice3 => "SLICE+3",
			Self::StoreSlice0 => "STORE_SLICE+0",
			Self::StoreSlice1 => "STORE_SLICE+1",
			Self::StoreSlice2 => "STORE_SLICE+2",
			Self::StoreSlice3 => "STORE_SLICE+3",
			Self::DeleteSlice0 => "DELETE_SLICE+0",
			Self::DeleteSlice1 => "DELETE_SLICE+1",
			Self::DeleteSlice2 => "DELETE_SLICE+2",
			Self::DeleteSlice3 => "DELETE_SLICE+3",
			Self::StoreMap => "STORE_MAP",
			Self::InplaceAdd => "INPLACE_ADD",
			Self::InplaceSubtract => "INPLACE_SUBTRACT",
			Self::InplaceMultiply => "INPLACE_MULTIPLY",
			Self::InplaceDivide => "INPLACE_DIVIDE",
			Self::InplaceModulo => "INPLACE_MODULO",
			Self::StoreSubscr => "STORE_SUBSCR",
			Self::DeleteSubscr => "DELETE_SUBSCR",
			Self::BinaryLshift => "BINARY_LSHIFT",
			Self::BinaryRshift => "BINARY_RSHIFT",
			Self::BinaryAnd => "BINARY_AND",
			Self::BinaryXor => "BINARY_XOR",
			Self::BinaryOr => "BINARY_OR",
			Self::InplacePower => "INPLACE_POWER",
			Self::GetIter => "GET_ITER",
			Self::PrintExpr => "PRINT_EXPR",
			Self::PrintItem => "PRINT_ITEM",
			Self::PrintNewline => "PRINT_NEWLINE",
			Self::PrintItemTo => "PRINT_ITEM_TO",
			Self::PrintNewlineTo => "PRINT_NEWLINE_TO",
			Self::InplaceLshift => "INPLACE_LSHIFT",
			Self::InplaceRshift => "INPLACE_RSHIFT",
			Self::InplaceAnd => "INPLACE_AND",
			Self::InplaceXor => "INPLACE_XOR",
			Self::InplaceOr => "INPLACE_OR",
			Self::BreakLoop => "BREAK_LOOP",
			Self::WithCleanup => "WITH_CLEANUP",
			Self::LoadLocals => "LOAD_LOCALS",
			Self::ReturnValue => "RETURN_VALUE",
			Self::ImportStar => "IMPORT_STAR",
			Self::ExecStmt => "EXEC_STMT",
			Self::YieldValue => "YIELD_VALUE",
			Self::PopBlock => "POP_BLOCK",
			Self::EndFinally => "END_FINALLY",
			Self::BuildClass => "BUILD_CLASS",
			Self::StoreName => "STORE_NAME",
			Self::DeleteName => "DELETE_NAME",
			Self::UnpackSequence => "UNPACK_SEQUENCE",
			Self::ForIter => "FOR_ITER",
			Self::StoreAttr => "STORE_ATTR",
			Self::DeleteAttr => "DELETE_ATTR",
			Self::StoreGlobal => "STORE_GLOBAL",
			Self::DeleteGlobal => "DELETE_GLOBAL",
			Self::DupTopx => "DUP_TOPX",
			Self::LoadConst => "LOAD_CONST",
			Self::LoadName => "LOAD_NAME",
			Self::BuildTuple => "BUILD_TUPLE",
			Self::BuildList => "BUILD_LIST",
			Self::BuildMap => "BUILD_MAP",
			Self::LoadAttr => "LOAD_ATTR",
			Self::CompareOp => "COMPARE_OP",
			Self::ImportName => "IMPORT_NAME",
			Self::ImportFrom => "IMPORT_FROM",
			Self::JumpForward => "JUMP_FORWARD",
			Self::JumpIfFalse => "JUMP_IF_FALSE",
			Self::JumpIfTrue => "JUMP_IF_TRUE",
			Self::JumpAbsolute => "JUMP_ABSOLUTE",
			Self::LoadGlobal => "LOAD_GLOBAL",
			Self::ContinueLoop => "CONTINUE_LOOP",
			Self::SetupLoop => "SETUP_LOOP",
			Self::SetupExcept => "SETUP_EXCEPT",
			Self::SetupFinally => "SETUP_FINALLY",
			Self::LoadFast => "LOAD_FAST",
			Self::StoreFast => "STORE_FAST",
			Self::DeleteFast => "DELETE_FAST",
			Self::RaiseVarargs => "RAISE_VARARGS",
			Self::CallFunction => "CALL_FUNCTION",
			Self::MakeFunction => "MAKE_FUNCTION",
			Self::BuildSlice => "BUILD_SLICE",
			Self::MakeClosure => "MAKE_CLOSURE",
			Self::LoadClosure => "LOAD_CLOSURE",
			Self::LoadDeref => "LOAD_DEREF",
			Self::StoreDeref => "STORE_DEREF",
			Self::CallFunctionVar => "CALL_FUNCTION_VAR",
			Self::CallFunctionKw => "CALL_FUNCTION_KW",
			Self::CallFunctionVarKw => "CALL_FUNCTION_VAR_KW",
			Self::ExtendedArg => "EXTENDED_ARG",
		}
	}
}

#[cfg(test)]
mod tests {
	use strum::IntoEnumIterator;

	use super::PythonOpcode;

	#[test]
	fn codes_round_trip_through_from_u8() {
		for opcode in PythonOpcode::iter() {
			assert_eq!(PythonOpcode::from_u8(opcode.get_code()), Some(opcode));
		}
	}

	#[test]
	fn unused_codes_have_no_opcode() {
		for code in [6, 7, 8, 14, 16, 17, 34, 69, 94, 109, 114, 115, 117, 118, 123, 127, 128, 129, 138, 139, 144, 255] {
			assert_eq!(PythonOpcode::from_u8(code), None, "code {code}");
		}
	}

	#[test]
	fn defines_113_opcodes() {
		assert_eq!(PythonOpcode::iter().count(), 113);
	}

	#[test]
	fn names_match_dis() {
		assert_eq!(PythonOpcode::StopCode.get_name(), "STOP_CODE");
		assert_eq!(PythonOpcode::StoreName.get_name(), "STORE_NAME");
		assert_eq!(PythonOpcode::Slice0.get_name(), "SLICE+0");
		assert_eq!(PythonOpcode::DeleteSlice3.get_name(), "DELETE_SLICE+3");
		assert_eq!(PythonOpcode::ExtendedArg.get_name(), "EXTENDED_ARG");
	}

	#[test]
	fn argument_starts_at_store_name() {
		assert!(!PythonOpcode::ImportStar.has_argument());
		assert!(!PythonOpcode::BuildClass.has_argument());
		assert!(PythonOpcode::StoreName.has_argument());
		assert!(PythonOpcode::ExtendedArg.has_argument());
	}
}
