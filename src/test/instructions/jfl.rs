use super::*;

#[test]
fn skipped_when_return_stack_not_full() {
    // 0: jfl 100, 9: hlt
    let code = program![instr_jump(Opcode::JFL, 100), instr!(HLT)];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.program_counter(), 9);
}

#[test]
fn taken_when_return_stack_full() {
    // 0: jfl 18, 9: call 0, 18: hlt
    // Recurses until the return stack is full, then the jump exits.
    let code = program![
        instr_jump(Opcode::JFL, 18),
        instr_jump(Opcode::CALL, 0),
        instr!(HLT),
    ];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.call_stack().len(), crate::constants::STACK_SIZE);
}
