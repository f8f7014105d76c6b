use crate::{constants, CodeAddr, Endian};
use byteorder::ByteOrder;
use num_derive::FromPrimitive;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

// Instruction encoding
//
// Every instruction starts with one opcode byte. The low six bits identify
// the opcode; REG (0x80) and MEM (0x40) select the addressing mode of the
// operand that follows:
//
//   REG set:    1-byte operand (register index), instruction size 2
//   REG unset:  either no operand (size 1) or an 8-byte little-endian
//               operand word (size 9)

#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive)]
pub enum Opcode {
    //  Mnemonic | Operand       | Effect
    //-----------+---------------+--------------------------------------------
    HLT,  //     | -             | Stops the processor
    ADD,  //     | -             | [a b] -> [a + b]
    SUB,  //     | -             | [a b] -> [a - b]
    MUL,  //     | -             | [a b] -> [a * b]
    DIV,  //     | -             | [a b] -> [a % b, a / b] (quotient on top)
    CMP,  //     | -             | Sets the comparison flag from [a b]
    RET,  //     | -             | Pops the return stack into the ip
    JMP,  //     | label         | ip = target
    CALL, //     | function      | Pushes ip + 9 to the return stack, jumps
    JE,   //     | label         | Jumps if the comparison flag is EQ
    JL,   //     | label         | Jumps if the comparison flag is LESS
    JLE,  //     | label         | Jumps if the comparison flag is LESS or EQ
    JMT,  //     | label         | Jumps if the return stack is empty
    JFL,  //     | label         | Jumps if the return stack is full
    PUSH, //     | reg/mem/value | Pushes the source onto the stack
    POP,  //     | reg/mem/-     | Pops the stack top into the destination
    IN,   //     | -             | Reads a signed decimal integer into r0
    OUT,  //     | -             | Writes r0 as a signed decimal integer
}

impl Opcode {
    /// The textual mnemonic as written in assembly source.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::HLT => "hlt",
            Opcode::ADD => "add",
            Opcode::SUB => "sub",
            Opcode::MUL => "mul",
            Opcode::DIV => "div",
            Opcode::CMP => "cmp",
            Opcode::RET => "ret",
            Opcode::JMP => "jmp",
            Opcode::CALL => "call",
            Opcode::JE => "je",
            Opcode::JL => "jl",
            Opcode::JLE => "jle",
            Opcode::JMT => "jmt",
            Opcode::JFL => "jfl",
            Opcode::PUSH => "push",
            Opcode::POP => "pop",
            Opcode::IN => "in",
            Opcode::OUT => "out",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseOpcodeError {
    pub mnemonic: String,
}

impl fmt::Display for ParseOpcodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown mnemonic \"{}\"", &self.mnemonic)
    }
}

impl Error for ParseOpcodeError {}

impl FromStr for Opcode {
    type Err = ParseOpcodeError;

    fn from_str(s: &str) -> Result<Opcode, ParseOpcodeError> {
        match s {
            "HLT" => Ok(Opcode::HLT),
            "ADD" => Ok(Opcode::ADD),
            "SUB" => Ok(Opcode::SUB),
            "MUL" => Ok(Opcode::MUL),
            "DIV" => Ok(Opcode::DIV),
            "CMP" => Ok(Opcode::CMP),
            "RET" => Ok(Opcode::RET),
            "JMP" => Ok(Opcode::JMP),
            "CALL" => Ok(Opcode::CALL),
            "JE" => Ok(Opcode::JE),
            "JL" => Ok(Opcode::JL),
            "JLE" => Ok(Opcode::JLE),
            "JMT" => Ok(Opcode::JMT),
            "JFL" => Ok(Opcode::JFL),
            "PUSH" => Ok(Opcode::PUSH),
            "POP" => Ok(Opcode::POP),
            "IN" => Ok(Opcode::IN),
            "OUT" => Ok(Opcode::OUT),
            _ => Err(ParseOpcodeError {
                mnemonic: s.to_string(),
            }),
        }
    }
}

/// Encodes an instruction without an operand.
pub fn instr_plain(oc: Opcode) -> Vec<u8> {
    vec![oc as u8]
}

/// Encodes an instruction with a register operand.
pub fn instr_reg(oc: Opcode, register: u8) -> Vec<u8> {
    vec![oc as u8 | constants::FLAG_REG, register]
}

/// Encodes an instruction addressing memory through a register.
pub fn instr_reg_mem(oc: Opcode, register: u8) -> Vec<u8> {
    vec![
        oc as u8 | constants::FLAG_REG | constants::FLAG_MEM,
        register,
    ]
}

/// Encodes an instruction addressing memory directly.
pub fn instr_mem(oc: Opcode, address: u64) -> Vec<u8> {
    let mut instr = vec![0u8; constants::INSTR_LONG_BYTES];
    instr[0] = oc as u8 | constants::FLAG_MEM;
    Endian::write_u64(&mut instr[1..], address);
    instr
}

/// Encodes an instruction with an immediate value operand.
pub fn instr_imm(oc: Opcode, value: i64) -> Vec<u8> {
    let mut instr = vec![0u8; constants::INSTR_LONG_BYTES];
    instr[0] = oc as u8;
    Endian::write_i64(&mut instr[1..], value);
    instr
}

/// Encodes a control-flow instruction with a code offset operand.
pub fn instr_jump(oc: Opcode, target: CodeAddr) -> Vec<u8> {
    let mut instr = vec![0u8; constants::INSTR_LONG_BYTES];
    instr[0] = oc as u8;
    Endian::write_u64(&mut instr[1..], target);
    instr
}

#[macro_export]
macro_rules! instr {
    ($oc:ident) => {
        $crate::instr_plain($crate::Opcode::$oc)
    };
    ($oc:ident, [r $reg:expr]) => {
        $crate::instr_reg_mem($crate::Opcode::$oc, $reg)
    };
    ($oc:ident, [$addr:expr]) => {
        $crate::instr_mem($crate::Opcode::$oc, $addr)
    };
    ($oc:ident, r $reg:expr) => {
        $crate::instr_reg($crate::Opcode::$oc, $reg)
    };
    ($oc:ident, $imm:expr) => {
        $crate::instr_imm($crate::Opcode::$oc, $imm)
    };
}
