use super::*;

#[test]
fn calls_and_returns() {
    // 0: call 10, 9: hlt, 10: push 5, 19: ret
    let code = program![
        instr_jump(Opcode::CALL, 10),
        instr!(HLT),
        instr!(PUSH, 5),
        instr!(RET),
    ];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.stack(), &[5]);
    assert!(processor.call_stack().is_empty());
    assert_eq!(processor.program_counter(), 9);
}

#[test]
fn full_return_stack_overflows() {
    // call 0 recurses into itself without ever returning.
    let code = program![instr_jump(Opcode::CALL, 0), instr!(HLT)];

    let processor = run_expecting(&code, ExitCode::CallStackOverflow);

    assert_eq!(processor.call_stack().len(), crate::constants::STACK_SIZE);
}
