use super::*;

#[test]
fn in_reads_into_r0() {
    let code = program![instr!(IN), instr!(HLT)];

    let mut console = BufferConsole::new(&[21]);
    let (processor, exit_code) = run_with_console(&code, &mut console);

    assert_eq!(exit_code, ExitCode::Halted);
    assert_eq!(processor.register(0).i(), 21);
}

#[test]
fn out_writes_r0() {
    let code = program![instr!(IN), instr!(OUT), instr!(OUT), instr!(HLT)];

    let mut console = BufferConsole::new(&[-3]);
    let (_, exit_code) = run_with_console(&code, &mut console);

    assert_eq!(exit_code, ExitCode::Halted);
    assert_eq!(console.outputs, vec![-3, -3]);
}

#[test]
fn out_defaults_to_zero() {
    let code = program![instr!(OUT), instr!(HLT)];

    let mut console = BufferConsole::default();
    let (_, exit_code) = run_with_console(&code, &mut console);

    assert_eq!(exit_code, ExitCode::Halted);
    assert_eq!(console.outputs, vec![0]);
}

#[test]
fn exhausted_input_faults() {
    let code = program![instr!(IN), instr!(HLT)];

    let (processor, exit_code) = run_program(&code);

    assert_eq!(exit_code, ExitCode::IoError);
    assert_eq!(processor.status(), Status::Error);
}
