use std::fmt;

/// Reason the run loop stopped.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ExitCode {
    Halted,             // HLT instruction was executed (normal shutdown)
    BadIp,              // Instruction pointer left the code image
    UnknownOpcode,      // Opcode byte was not recognized
    StackOverflow,      // PUSH with a full evaluation stack
    StackUnderflow,     // POP/arithmetic/CMP with too few stack values
    CallStackOverflow,  // CALL with a full return stack
    CallStackUnderflow, // RET with an empty return stack
    DivisionByZero,     // DIV with zero at the top of the stack
    IoError,            // IN or OUT failed against the console
}

impl ExitCode {
    pub fn message(self) -> &'static str {
        match self {
            ExitCode::Halted => "Halted",
            ExitCode::BadIp => "Bad ip",
            ExitCode::UnknownOpcode => "Unknown command",
            ExitCode::StackOverflow => "Can't execute push: stack is full",
            ExitCode::StackUnderflow => "Not enough values on stack",
            ExitCode::CallStackOverflow => "Can't execute call: return stack is full",
            ExitCode::CallStackUnderflow => "Can't execute ret: return stack is empty",
            ExitCode::DivisionByZero => "Division by zero",
            ExitCode::IoError => "Console I/O failed",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of the most recent CMP instruction.
///
/// The flag starts out as `Equal`; programs that branch before their first
/// CMP are ill-formed but not rejected.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum CmpFlag {
    Equal,
    Less,
    Greater,
}

/// Run status of a processor instance. Instances are single-shot: `Halted`
/// and `Error` are terminal.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Status {
    Running,
    Halted,
    Error,
}
