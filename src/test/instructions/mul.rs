use super::*;

#[test]
fn two_values() {
    let code = program![instr!(PUSH, -6), instr!(PUSH, 7), instr!(MUL), instr!(HLT)];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.stack(), &[-42]);
}

#[test]
fn single_value_underflows() {
    let code = program![instr!(PUSH, 3), instr!(MUL), instr!(HLT)];

    run_expecting(&code, ExitCode::StackUnderflow);
}
