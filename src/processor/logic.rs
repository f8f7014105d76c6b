use byteorder::ByteOrder;
use num_traits::FromPrimitive;
use std::io::Write;

use super::Processor;
use crate::{constants, CmpFlag, Console, Endian, ExitCode, Opcode};

pub(crate) enum TickResult {
    Advance(usize),
    Jump(u64),
    Stop(ExitCode),
}

/// Decodes, logs and executes the instruction at the current instruction
/// pointer. `code` carries the trailing padding of `CODE_PADDING` zero
/// bytes; `code_len` is the unpadded image size.
pub(crate) fn tick(
    proc: &mut Processor,
    code: &[u8],
    code_len: usize,
    console: &mut dyn Console,
    trace: &mut dyn Write,
) -> TickResult {
    let ip = proc.program_counter as usize;

    if ip >= code_len {
        return TickResult::Stop(ExitCode::BadIp);
    }

    let byte = code[ip];
    let reg = byte & constants::FLAG_REG != 0;
    let mem = byte & constants::FLAG_MEM != 0;
    // The padding makes this read safe even at the end of the image.
    let operand = Endian::read_u64(&code[ip + 1..ip + 1 + constants::OPERAND_BYTES]);

    let opcode = match Opcode::from_u8(byte & constants::OPCODE_MASK) {
        Some(opcode) => opcode,
        None => {
            let _ = writeln!(trace, "0x{:016x}: unknown;", ip);
            return TickResult::Stop(ExitCode::UnknownOpcode);
        }
    };

    log_instruction(proc, trace, ip, opcode, reg, mem, operand);

    match opcode {
        Opcode::PUSH => {
            if proc.stack.len() >= constants::STACK_SIZE {
                return TickResult::Stop(ExitCode::StackOverflow);
            }

            let value = if reg {
                let register = proc.registers[operand as u8 as usize];
                if mem {
                    proc.memory[(register.u() & constants::MEMORY_MASK) as usize].i()
                } else {
                    register.i()
                }
            } else if mem {
                proc.memory[(operand & constants::MEMORY_MASK) as usize].i()
            } else {
                operand as i64
            };

            proc.stack.push(value);
            TickResult::Advance(transfer_size(reg))
        }

        Opcode::POP => {
            let value = match proc.stack.pop() {
                Some(value) => value,
                None => return TickResult::Stop(ExitCode::StackUnderflow),
            };

            if reg {
                let register = operand as u8 as usize;
                if mem {
                    let address = proc.registers[register].u() & constants::MEMORY_MASK;
                    proc.memory[address as usize].set_i(value);
                } else {
                    proc.registers[register].set_i(value);
                }
                TickResult::Advance(constants::INSTR_REG_BYTES)
            } else if mem {
                proc.memory[(operand & constants::MEMORY_MASK) as usize].set_i(value);
                TickResult::Advance(constants::INSTR_LONG_BYTES)
            } else {
                // No operand: the popped value is discarded.
                TickResult::Advance(1)
            }
        }

        Opcode::ADD => binary(proc, |a, b| a.wrapping_add(b)),
        Opcode::SUB => binary(proc, |a, b| a.wrapping_sub(b)),
        Opcode::MUL => binary(proc, |a, b| a.wrapping_mul(b)),

        Opcode::DIV => {
            let depth = proc.stack.len();
            if depth < 2 {
                return TickResult::Stop(ExitCode::StackUnderflow);
            }

            let a = proc.stack[depth - 2];
            let b = proc.stack[depth - 1];
            if b == 0 {
                return TickResult::Stop(ExitCode::DivisionByZero);
            }

            proc.stack[depth - 1] = a.wrapping_div(b);
            proc.stack[depth - 2] = a.wrapping_rem(b);
            TickResult::Advance(1)
        }

        Opcode::CMP => {
            let depth = proc.stack.len();
            if depth < 2 {
                return TickResult::Stop(ExitCode::StackUnderflow);
            }

            let a = proc.stack[depth - 2];
            let b = proc.stack[depth - 1];
            proc.cmp = if a == b {
                CmpFlag::Equal
            } else if a < b {
                CmpFlag::Less
            } else {
                CmpFlag::Greater
            };
            TickResult::Advance(1)
        }

        Opcode::JMP => TickResult::Jump(operand),
        Opcode::JE => conditional_jump(proc.cmp == CmpFlag::Equal, operand),
        Opcode::JL => conditional_jump(proc.cmp == CmpFlag::Less, operand),
        Opcode::JLE => conditional_jump(proc.cmp != CmpFlag::Greater, operand),
        Opcode::JMT => conditional_jump(proc.call_stack.is_empty(), operand),
        Opcode::JFL => {
            conditional_jump(proc.call_stack.len() >= constants::STACK_SIZE, operand)
        }

        Opcode::CALL => {
            if proc.call_stack.len() >= constants::STACK_SIZE {
                return TickResult::Stop(ExitCode::CallStackOverflow);
            }

            proc.call_stack
                .push((ip + constants::INSTR_LONG_BYTES) as u64);
            TickResult::Jump(operand)
        }

        Opcode::RET => match proc.call_stack.pop() {
            Some(target) => TickResult::Jump(target),
            None => TickResult::Stop(ExitCode::CallStackUnderflow),
        },

        Opcode::HLT => TickResult::Stop(ExitCode::Halted),

        Opcode::IN => match console.input() {
            Ok(value) => {
                proc.registers[0].set_i(value);
                TickResult::Advance(1)
            }
            Err(_) => TickResult::Stop(ExitCode::IoError),
        },

        Opcode::OUT => match console.output(proc.registers[0].i()) {
            Ok(()) => TickResult::Advance(1),
            Err(_) => TickResult::Stop(ExitCode::IoError),
        },
    }
}

fn binary(proc: &mut Processor, op: impl Fn(i64, i64) -> i64) -> TickResult {
    let depth = proc.stack.len();
    if depth < 2 {
        return TickResult::Stop(ExitCode::StackUnderflow);
    }

    let b = proc.stack[depth - 1];
    let a = proc.stack[depth - 2];
    proc.stack[depth - 2] = op(a, b);
    proc.stack.truncate(depth - 1);
    TickResult::Advance(1)
}

fn conditional_jump(condition: bool, target: u64) -> TickResult {
    if condition {
        TickResult::Jump(target)
    } else {
        TickResult::Advance(constants::INSTR_LONG_BYTES)
    }
}

fn transfer_size(reg: bool) -> usize {
    if reg {
        constants::INSTR_REG_BYTES
    } else {
        constants::INSTR_LONG_BYTES
    }
}

fn log_instruction(
    proc: &Processor,
    trace: &mut dyn Write,
    ip: usize,
    opcode: Opcode,
    reg: bool,
    mem: bool,
    operand: u64,
) {
    let _ = match opcode {
        Opcode::PUSH | Opcode::POP => log_transfer(proc, trace, ip, opcode, reg, mem, operand),
        Opcode::JMP
        | Opcode::CALL
        | Opcode::JE
        | Opcode::JL
        | Opcode::JLE
        | Opcode::JMT
        | Opcode::JFL => writeln!(trace, "0x{:016x}: {} 0x{:016x};", ip, opcode, operand),
        _ => writeln!(trace, "0x{:016x}: {};", ip, opcode),
    };
}

fn log_transfer(
    proc: &Processor,
    trace: &mut dyn Write,
    ip: usize,
    opcode: Opcode,
    reg: bool,
    mem: bool,
    operand: u64,
) -> std::io::Result<()> {
    write!(trace, "0x{:016x}: {}", ip, opcode)?;

    if mem {
        if reg {
            let register = operand as u8;
            let address = proc.registers[register as usize].u() & constants::MEMORY_MASK;
            writeln!(trace, " [r{}] = [0x{:016x}];", register, address)
        } else {
            writeln!(trace, " [0x{:016x}];", operand & constants::MEMORY_MASK)
        }
    } else if reg {
        let register = operand as u8;
        writeln!(
            trace,
            " r{} = {};",
            register,
            proc.registers[register as usize].i()
        )
    } else if opcode == Opcode::PUSH {
        writeln!(trace, " {};", operand as i64)
    } else {
        writeln!(trace, ";")
    }
}
