use super::*;

#[test]
fn quotient_on_top_remainder_below() {
    let code = program![instr!(PUSH, 20), instr!(PUSH, 6), instr!(DIV), instr!(HLT)];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.stack(), &[2, 3]);
}

#[test]
fn negative_dividend() {
    let code = program![instr!(PUSH, -20), instr!(PUSH, 6), instr!(DIV), instr!(HLT)];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.stack(), &[-2, -3]);
}

#[test]
fn min_by_minus_one_wraps() {
    let code = program![
        instr!(PUSH, i64::min_value()),
        instr!(PUSH, -1),
        instr!(DIV),
        instr!(HLT),
    ];

    let processor = run_expecting(&code, ExitCode::Halted);

    assert_eq!(processor.stack(), &[0, i64::min_value()]);
}

#[test]
fn by_zero_faults() {
    let code = program![instr!(PUSH, 20), instr!(PUSH, 0), instr!(DIV), instr!(HLT)];

    run_expecting(&code, ExitCode::DivisionByZero);
}

#[test]
fn single_value_underflows() {
    let code = program![instr!(PUSH, 20), instr!(DIV), instr!(HLT)];

    run_expecting(&code, ExitCode::StackUnderflow);
}
