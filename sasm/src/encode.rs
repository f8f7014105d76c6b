use crate::error::{Error, Result};
use crate::operand::{classify, Operand};
use crate::symbols::{valid_name, DefineError, Symbols};
use sproc::{
    constants, instr_imm, instr_jump, instr_mem, instr_plain, instr_reg, instr_reg_mem, Opcode,
};
use std::io::Write;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Discovers symbol offsets; unresolved references encode a zero
    /// placeholder but still advance the offset by the real size.
    First,
    /// Re-encodes everything; every reference must now resolve.
    Second,
}

/// Walks the token stream once, appending encoded instructions to a fresh
/// object buffer. The write offset doubles as the instruction pointer at
/// assembly time.
pub fn translate<'i>(
    tokens: &[&'i str],
    pass: Pass,
    symbols: &mut Symbols<'i>,
    trace: &mut dyn Write,
) -> Result<Vec<u8>> {
    let mut code = Vec::new();
    let mut index = 0;

    while index < tokens.len() {
        let word = tokens[index];
        // Past the end of the stream the operand reads as the empty token,
        // which no pattern matches.
        let arg = tokens.get(index + 1).copied().unwrap_or("");

        index += command(word, arg, pass, symbols, &mut code, trace)?;
    }

    Ok(code)
}

/// Handles one command starting at `word`, returning how many tokens it
/// consumed.
fn command<'i>(
    word: &'i str,
    arg: &'i str,
    pass: Pass,
    symbols: &mut Symbols<'i>,
    code: &mut Vec<u8>,
    trace: &mut dyn Write,
) -> Result<usize> {
    let upper = word.to_ascii_uppercase();

    match upper.as_str() {
        "LABEL" => return label(word, arg, pass, symbols, code, trace),
        "FUNC" => return function(word, arg, pass, symbols, code, trace),
        "RES" => return reservation(word, arg, pass, symbols, code, trace),
        _ => {}
    }

    let opcode =
        Opcode::from_str(&upper).map_err(|_| Error::UnknownCommand(word.to_string()))?;

    match opcode {
        Opcode::PUSH => push(word, arg, pass, symbols, code, trace),
        Opcode::POP => pop(word, arg, pass, symbols, code, trace),
        Opcode::CALL => call(word, arg, pass, symbols, code, trace),
        Opcode::JMP | Opcode::JE | Opcode::JL | Opcode::JLE | Opcode::JMT | Opcode::JFL => {
            jump(opcode, word, arg, pass, symbols, code, trace)
        }
        _ => {
            emit(code, trace, &[word], instr_plain(opcode));
            Ok(1)
        }
    }
}

fn label<'i>(
    word: &'i str,
    name: &'i str,
    pass: Pass,
    symbols: &mut Symbols<'i>,
    code: &[u8],
    trace: &mut dyn Write,
) -> Result<usize> {
    if !valid_name(name) {
        return Err(Error::BadLabel(name.to_string()));
    }

    if pass == Pass::First {
        symbols
            .define_label(name, code.len() as u64)
            .map_err(|_| Error::BadLabel(name.to_string()))?;
    }

    trace_decl(trace, code.len(), &[word, name]);
    Ok(2)
}

fn function<'i>(
    word: &'i str,
    name: &'i str,
    pass: Pass,
    symbols: &mut Symbols<'i>,
    code: &[u8],
    trace: &mut dyn Write,
) -> Result<usize> {
    if !valid_name(name) {
        return Err(Error::BadFunction(name.to_string()));
    }

    if pass == Pass::First {
        symbols
            .define_function(name, code.len() as u64)
            .map_err(|_| Error::BadFunction(name.to_string()))?;
    }

    trace_decl(trace, code.len(), &[word, name]);
    Ok(2)
}

fn reservation<'i>(
    word: &'i str,
    arg: &'i str,
    pass: Pass,
    symbols: &mut Symbols<'i>,
    code: &[u8],
    trace: &mut dyn Write,
) -> Result<usize> {
    let bad = || Error::BadReserve(arg.to_string());

    let colon = arg.find(':').ok_or_else(bad)?;
    let name = &arg[..colon];
    if !valid_name(name) {
        return Err(bad());
    }

    let size: u64 = arg[colon + 1..].parse().map_err(|_| bad())?;
    if size == 0 {
        return Err(bad());
    }

    if pass == Pass::First {
        symbols.define_reservation(name, size).map_err(|err| {
            Error::BadReserve(match err {
                DefineError::Redefined => arg.to_string(),
                DefineError::Exhausted => format!("{} (memory exhausted)", arg),
            })
        })?;
    }

    // Present in both passes; only pass 1 inserts.
    let region = symbols
        .reservation(name)
        .expect("reservation defined in pass 1");
    let _ = writeln!(
        trace,
        "0x{:016x}: {} {} (base 0x{:04x}, size {})",
        code.len(),
        word,
        arg,
        region.base,
        region.size
    );

    Ok(2)
}

fn jump<'i>(
    opcode: Opcode,
    word: &'i str,
    name: &'i str,
    pass: Pass,
    symbols: &Symbols<'i>,
    code: &mut Vec<u8>,
    trace: &mut dyn Write,
) -> Result<usize> {
    let target = match symbols.label(name) {
        Some(offset) => offset,
        None if pass == Pass::First => 0,
        None => return Err(Error::BadLabel(name.to_string())),
    };

    emit(code, trace, &[word, name], instr_jump(opcode, target));
    Ok(2)
}

fn call<'i>(
    word: &'i str,
    name: &'i str,
    pass: Pass,
    symbols: &Symbols<'i>,
    code: &mut Vec<u8>,
    trace: &mut dyn Write,
) -> Result<usize> {
    let target = match symbols.function(name) {
        Some(offset) => offset,
        None if pass == Pass::First => 0,
        None => return Err(Error::BadFunction(name.to_string())),
    };

    emit(code, trace, &[word, name], instr_jump(Opcode::CALL, target));
    Ok(2)
}

fn push<'i>(
    word: &'i str,
    arg: &'i str,
    pass: Pass,
    symbols: &Symbols<'i>,
    code: &mut Vec<u8>,
    trace: &mut dyn Write,
) -> Result<usize> {
    let instr = match classify(arg) {
        Some(Operand::RegMem(register)) => instr_reg_mem(Opcode::PUSH, register),
        Some(Operand::Mem(address)) => {
            check_address(arg, address)?;
            instr_mem(Opcode::PUSH, address)
        }
        Some(Operand::Reg(register)) => instr_reg(Opcode::PUSH, register),
        Some(Operand::Imm(value)) => instr_imm(Opcode::PUSH, value),
        Some(Operand::NameMem(name)) => {
            instr_mem(Opcode::PUSH, reservation_base(name, pass, symbols, arg)?)
        }
        Some(Operand::Name(name)) => instr_imm(
            Opcode::PUSH,
            reservation_base(name, pass, symbols, arg)? as i64,
        ),
        None => return Err(Error::BadArgument(arg.to_string())),
    };

    emit(code, trace, &[word, arg], instr);
    Ok(2)
}

fn pop<'i>(
    word: &'i str,
    arg: &'i str,
    pass: Pass,
    symbols: &Symbols<'i>,
    code: &mut Vec<u8>,
    trace: &mut dyn Write,
) -> Result<usize> {
    // An immediate destination makes no sense for pop: anything that is not
    // a register or memory operand belongs to the next command, and the pop
    // becomes a plain "discard top of stack".
    let instr = match classify(arg) {
        Some(Operand::RegMem(register)) => instr_reg_mem(Opcode::POP, register),
        Some(Operand::Mem(address)) => {
            check_address(arg, address)?;
            instr_mem(Opcode::POP, address)
        }
        Some(Operand::Reg(register)) => instr_reg(Opcode::POP, register),
        Some(Operand::NameMem(name)) => {
            instr_mem(Opcode::POP, reservation_base(name, pass, symbols, arg)?)
        }
        _ => {
            emit(code, trace, &[word], instr_plain(Opcode::POP));
            return Ok(1);
        }
    };

    emit(code, trace, &[word, arg], instr);
    Ok(2)
}

fn reservation_base<'i>(
    name: &str,
    pass: Pass,
    symbols: &Symbols<'i>,
    arg: &str,
) -> Result<u64> {
    match symbols.reservation(name) {
        Some(region) => Ok(region.base),
        None if pass == Pass::First => Ok(0),
        None => Err(Error::BadArgument(arg.to_string())),
    }
}

/// Immediate memory addresses are validated here and still masked by the
/// processor at run time.
fn check_address(arg: &str, address: u64) -> Result<()> {
    if address < constants::MEMORY_SIZE as u64 {
        Ok(())
    } else {
        Err(Error::BadArgument(arg.to_string()))
    }
}

fn emit(code: &mut Vec<u8>, trace: &mut dyn Write, words: &[&str], instr: Vec<u8>) {
    let _ = writeln!(
        trace,
        "0x{:016x}: {} ; {}",
        code.len(),
        words.join(" "),
        hex(&instr)
    );
    code.extend_from_slice(&instr);
}

fn trace_decl(trace: &mut dyn Write, offset: usize, words: &[&str]) {
    let _ = writeln!(trace, "0x{:016x}: {}", offset, words.join(" "));
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}
