mod enums;
mod logic;

pub use self::enums::{CmpFlag, ExitCode, Status};

use self::logic::TickResult;
use crate::{constants, CodeAddr, Console, Value};
use std::io::Write;

/// Execution engine for the SPROC instruction set.
///
/// A processor owns its register file, memory and both stacks. The code
/// image, the console and the trace sink are external: they are handed to
/// [`run`](#method.run) per invocation. Instances are single-shot; once the
/// run loop has stopped the instance only serves for state inspection.
pub struct Processor {
    pub(crate) registers: [Value; constants::REGISTER_COUNT],
    pub(crate) memory: Vec<Value>,
    pub(crate) stack: Vec<i64>,
    pub(crate) call_stack: Vec<CodeAddr>,
    pub(crate) cmp: CmpFlag,
    pub(crate) program_counter: CodeAddr,
    pub(crate) status: Status,
}

impl Processor {
    pub fn new() -> Processor {
        Processor {
            registers: [Value::default(); constants::REGISTER_COUNT],
            memory: vec![Value::default(); constants::MEMORY_SIZE],
            stack: Vec::new(),
            call_stack: Vec::new(),
            cmp: CmpFlag::Equal,
            program_counter: 0,
            status: Status::Running,
        }
    }

    pub fn register(&self, index: u8) -> Value {
        self.registers[index as usize]
    }

    pub fn registers(&self) -> &[Value] {
        &self.registers[..]
    }

    pub fn memory(&self) -> &[Value] {
        &self.memory[..]
    }

    /// The evaluation stack, bottom first.
    pub fn stack(&self) -> &[i64] {
        &self.stack[..]
    }

    /// The return stack, bottom first.
    pub fn call_stack(&self) -> &[CodeAddr] {
        &self.call_stack[..]
    }

    pub fn cmp(&self) -> CmpFlag {
        self.cmp
    }

    pub fn program_counter(&self) -> CodeAddr {
        self.program_counter
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Runs the given code image until HLT or a fault.
    ///
    /// Every executed instruction is logged to `trace` before it takes
    /// effect; pass `io::sink()` to discard the log. The console serves the
    /// `in` and `out` instructions.
    ///
    /// # Panics
    ///
    /// Panics if the instance has already halted or faulted: `Halted` and
    /// `Error` are terminal, a processor runs exactly once.
    pub fn run(
        &mut self,
        image: &[u8],
        console: &mut dyn Console,
        trace: &mut dyn Write,
    ) -> ExitCode {
        assert!(
            self.status == Status::Running,
            "run called on a finished processor"
        );

        // Over-allocate so the speculative operand read at the instruction
        // pointer never leaves the buffer.
        let mut code = Vec::with_capacity(image.len() + constants::CODE_PADDING);
        code.extend_from_slice(image);
        code.resize(image.len() + constants::CODE_PADDING, 0);

        loop {
            match logic::tick(self, &code, image.len(), console, trace) {
                TickResult::Advance(bytes) => {
                    self.program_counter += bytes as CodeAddr;
                }
                TickResult::Jump(target) => {
                    self.program_counter = target;
                }
                TickResult::Stop(exit_code) => {
                    self.status = if exit_code == ExitCode::Halted {
                        Status::Halted
                    } else {
                        Status::Error
                    };
                    return exit_code;
                }
            }
        }
    }
}

impl Default for Processor {
    fn default() -> Processor {
        Processor::new()
    }
}
