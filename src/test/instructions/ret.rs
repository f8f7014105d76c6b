use super::*;

#[test]
fn empty_return_stack_underflows() {
    let code = program![instr!(RET), instr!(HLT)];

    run_expecting(&code, ExitCode::CallStackUnderflow);
}

#[test]
fn returns_to_saved_address() {
    // 0: call 10, 9: hlt, 10: ret
    let code = program![instr_jump(Opcode::CALL, 10), instr!(HLT), instr!(RET)];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.program_counter(), 9);
}
