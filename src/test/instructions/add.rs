use super::*;

#[test]
fn two_values() {
    let code = program![instr!(PUSH, 42), instr!(PUSH, 64), instr!(ADD), instr!(HLT)];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.stack(), &[106]);
}

#[test]
fn wraps_on_overflow() {
    let code = program![
        instr!(PUSH, i64::max_value()),
        instr!(PUSH, 1),
        instr!(ADD),
        instr!(HLT),
    ];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.stack(), &[i64::min_value()]);
}

#[test]
fn single_value_underflows() {
    let code = program![instr!(PUSH, 1), instr!(ADD), instr!(HLT)];

    run_expecting(&code, ExitCode::StackUnderflow);
}
