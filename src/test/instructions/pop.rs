use super::*;

#[test]
fn register() {
    let code = program![instr!(PUSH, 5), instr!(POP, r 200), instr!(HLT)];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert!(processor.stack().is_empty());
    assert_eq!(processor.register(200).i(), 5);
}

#[test]
fn memory() {
    let code = program![instr!(PUSH, -3), instr!(POP, [100]), instr!(HLT)];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.memory()[100].i(), -3);
}

#[test]
fn register_indirect() {
    let code = program![
        instr!(PUSH, 50),
        instr!(POP, r 2),
        instr!(PUSH, 11),
        instr!(POP, [r 2]),
        instr!(HLT),
    ];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.memory()[50].i(), 11);
}

#[test]
fn memory_address_wraps() {
    let code = program![instr!(PUSH, 8), instr_mem(Opcode::POP, 0x1_0005), instr!(HLT)];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.memory()[5].i(), 8);
}

#[test]
fn without_operand_discards() {
    let code = program![instr!(PUSH, 1), instr!(PUSH, 2), instr!(POP), instr!(HLT)];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.stack(), &[1]);
}

#[test]
fn empty_stack_underflows() {
    let code = program![instr!(POP, r 0), instr!(HLT)];

    run_expecting(&code, ExitCode::StackUnderflow);
}
