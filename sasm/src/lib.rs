//! Assembler for the [sproc](../sproc/index.html) stack processor.
//!
//! [`assemble`](fn.assemble.html) accepts a program written in SPROC
//! assembly and returns the encoded object image that the processor
//! executes; [`assemble_with_trace`](fn.assemble_with_trace.html)
//! additionally writes a per-command translation trace to any byte sink.
//!
//! # SPROC Assembly Language
//!
//! A program is a flat sequence of whitespace-delimited words; any run of
//! whitespace separates words and nothing else does. There are no comments
//! and no quoting. A word may be at most 63 bytes long.
//!
//! ## Commands
//!
//! Mnemonic | Operand  | Short description
//! ---------|----------|-----------------------------------------------
//! `push`   | see below| Push a value onto the evaluation stack
//! `pop`    | optional | Pop the stack top into a register or memory, or discard it
//! `add`    | -        | Replace the two top stack values with their sum
//! `sub`    | -        | ... with their difference
//! `mul`    | -        | ... with their product
//! `div`    | -        | Leave quotient on top, remainder beneath
//! `cmp`    | -        | Set the comparison flag from the two top values (no pop)
//! `jmp`    | label    | Jump
//! `je`     | label    | Jump if the comparison flag is "equal"
//! `jl`     | label    | Jump if the comparison flag is "less"
//! `jle`    | label    | Jump if the comparison flag is "less" or "equal"
//! `jmt`    | label    | Jump if the return stack is empty
//! `jfl`    | label    | Jump if the return stack is full
//! `call`   | function | Save the return address, jump to the function
//! `ret`    | -        | Return to the most recently saved address
//! `in`     | -        | Read a signed decimal integer into `r0`
//! `out`    | -        | Print `r0` as a signed decimal integer
//! `hlt`    | -        | Halt
//!
//! Mnemonics and directives are recognized case-insensitively.
//!
//! ## Directives
//!
//! Directives record symbols and emit no code. Names are alphanumeric, at
//! most 63 bytes, and unique within their own name space (labels, functions
//! and reservations do not conflict with each other).
//!
//! Directive          | Effect
//! -------------------|---------------------------------------------------
//! `label <name>`     | Names the current code offset as a jump target
//! `func <name>`      | Names the current code offset as a call target
//! `res <name>:<size>`| Reserves `<size>` memory words; regions start at address 0 and grow contiguously
//!
//! Forward references are allowed: the first pass discovers all symbol
//! offsets while emitting placeholder operands of the right size, the
//! second pass re-encodes the program with every reference resolved.
//!
//! ## push/pop operands
//!
//! Form     | Meaning
//! ---------|----------------------------------------------
//! `[rN]`   | Memory at the address held in register N (0-255)
//! `[K]`    | Memory at address K (decimal, below 65536)
//! `rN`     | Register N
//! `K`      | Immediate signed decimal value (push only)
//! `[name]` | Memory at reservation `name`
//! `name`   | The base address of reservation `name` (push only)
//!
//! `pop` with no recognizable operand discards the top of the stack; the
//! following word is treated as the next command.

mod encode;
mod error;
mod operand;
mod parser;
mod symbols;
mod tokens;


pub use crate::error::{Error, Result};

use crate::encode::Pass;
use crate::symbols::Symbols;
use std::io::{self, Write};

/// Translates SPROC assembly into an object image.
pub fn assemble(input: &str) -> Result<Vec<u8>> {
    assemble_with_trace(input, &mut io::sink())
}

/// Translates SPROC assembly into an object image, writing a translation
/// trace to `trace`. Trace write failures are ignored; they never fail the
/// translation.
pub fn assemble_with_trace(input: &str, trace: &mut dyn Write) -> Result<Vec<u8>> {
    let result = translate_passes(input, trace);

    let banner = if result.is_ok() { "SUCCESS" } else { "ERROR" };
    let _ = writeln!(trace, "***** {} *****", banner);

    result
}

fn translate_passes(input: &str, trace: &mut dyn Write) -> Result<Vec<u8>> {
    let tokens = tokens::scan(input)?;
    let mut symbols = Symbols::default();

    let _ = writeln!(trace, "***** FIRST PASS *****");
    encode::translate(&tokens, Pass::First, &mut symbols, trace)?;

    let _ = writeln!(trace, "***** SECOND PASS *****");
    encode::translate(&tokens, Pass::Second, &mut symbols, trace)
}
