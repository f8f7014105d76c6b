/// Addressing flag: the operand is a 1-byte register index.
pub const FLAG_REG: u8 = 0x80;
/// Addressing flag: the operand addresses main memory.
pub const FLAG_MEM: u8 = 0x40;
/// Mask selecting the opcode identity from the opcode byte.
pub const OPCODE_MASK: u8 = !(FLAG_REG | FLAG_MEM);
/// Reserved opcode value for unrecognized instructions.
pub const OPCODE_UNKNOWN: u8 = 0xFC;

/// Size in bytes of an operand word.
pub const OPERAND_BYTES: usize = 8;
/// Size in bytes of an instruction with a register operand.
pub const INSTR_REG_BYTES: usize = 2;
/// Size in bytes of an instruction with an operand word.
pub const INSTR_LONG_BYTES: usize = 1 + OPERAND_BYTES;

/// Zero padding appended after the code image so the operand word at the
/// last valid instruction pointer can always be read.
pub const CODE_PADDING: usize = 0x10;

pub const REGISTER_COUNT: usize = 0x100;
pub const MEMORY_SIZE: usize = 0x10000;
pub const STACK_SIZE: usize = 0x10000;

/// Memory indices wrap at the memory size, which is a power of two.
pub const MEMORY_MASK: u64 = (MEMORY_SIZE - 1) as u64;
