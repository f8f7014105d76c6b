use super::*;

#[test]
fn skips_ahead() {
    // jmp(9) push(9) hlt -> offsets 0, 9, 18
    let code = program![instr_jump(Opcode::JMP, 18), instr!(PUSH, 99), instr!(HLT)];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert!(processor.stack().is_empty());
    assert_eq!(processor.program_counter(), 18);
}

#[test]
fn backward_target() {
    // push(9) jmp(9) hlt; the jump goes back to the hlt... laid out as:
    // 0: jmp 19, 9: hlt, 10: jmp 9, 19: jmp 10
    let code = program![
        instr_jump(Opcode::JMP, 19),
        instr!(HLT),
        instr_jump(Opcode::JMP, 9),
        instr_jump(Opcode::JMP, 10),
    ];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.program_counter(), 9);
}

#[test]
fn target_past_end_faults() {
    let code = program![instr_jump(Opcode::JMP, 100), instr!(HLT)];

    run_expecting(&code, ExitCode::BadIp);
}

#[test]
fn target_at_end_faults() {
    // The image is 10 bytes; offset 10 is one past the last instruction.
    let code = program![instr_jump(Opcode::JMP, 10), instr!(HLT)];

    run_expecting(&code, ExitCode::BadIp);
}
