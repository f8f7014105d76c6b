use super::*;

#[test]
fn taken_on_equal() {
    let code = program![
        instr!(PUSH, 2),
        instr!(PUSH, 2),
        instr!(CMP),
        instr_jump(Opcode::JLE, 37),
        instr!(PUSH, 99),
        instr!(HLT),
    ];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.stack(), &[2, 2]);
}

#[test]
fn taken_on_less() {
    let code = program![
        instr!(PUSH, 1),
        instr!(PUSH, 2),
        instr!(CMP),
        instr_jump(Opcode::JLE, 37),
        instr!(PUSH, 99),
        instr!(HLT),
    ];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.stack(), &[1, 2]);
}

#[test]
fn skipped_on_greater() {
    let code = program![
        instr!(PUSH, 3),
        instr!(PUSH, 2),
        instr!(CMP),
        instr_jump(Opcode::JLE, 37),
        instr!(PUSH, 99),
        instr!(HLT),
    ];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.stack(), &[3, 2, 99]);
}
