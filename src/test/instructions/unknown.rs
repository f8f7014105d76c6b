use super::*;

#[test]
fn unassigned_opcode_faults() {
    run_expecting(&[0x3F], ExitCode::UnknownOpcode);
}

#[test]
fn first_free_value_faults() {
    // Opcodes stop at OUT = 17.
    run_expecting(&[18], ExitCode::UnknownOpcode);
}

#[test]
fn flags_do_not_rescue_unknown_opcodes() {
    run_expecting(
        &[crate::constants::FLAG_REG | crate::constants::FLAG_MEM | 0x20, 0],
        ExitCode::UnknownOpcode,
    );
}
