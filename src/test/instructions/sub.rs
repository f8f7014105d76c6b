use super::*;

#[test]
fn two_values() {
    let code = program![instr!(PUSH, 10), instr!(PUSH, 4), instr!(SUB), instr!(HLT)];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.stack(), &[6]);
}

#[test]
fn negative_result() {
    let code = program![instr!(PUSH, 4), instr!(PUSH, 10), instr!(SUB), instr!(HLT)];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.stack(), &[-6]);
}

#[test]
fn empty_stack_underflows() {
    let code = program![instr!(SUB), instr!(HLT)];

    run_expecting(&code, ExitCode::StackUnderflow);
}
