use super::*;

#[test]
fn taken_when_return_stack_empty() {
    // 0: jmt 10, 9: hlt, 10: hlt
    let code = program![instr_jump(Opcode::JMT, 10), instr!(HLT), instr!(HLT)];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.program_counter(), 10);
}

#[test]
fn skipped_when_return_stack_occupied() {
    // 0: call 10, 9: hlt, 10: jmt 9, 19: ret
    let code = program![
        instr_jump(Opcode::CALL, 10),
        instr!(HLT),
        instr_jump(Opcode::JMT, 9),
        instr!(RET),
    ];

    let processor = run_expecting(&code, ExitCode::Halted);

    // The jump was not taken, so ret unwound the frame.
    assert!(processor.call_stack().is_empty());
}
