use crate::symbols::valid_name;

/// Addressing form of a push/pop operand token. Classification is by
/// pattern, first match wins: `[rN]`, `[K]`, `[name]`, `rN`, `K`, `name`.
#[derive(Debug, PartialEq, Eq)]
pub enum Operand<'i> {
    /// `[rN]`: memory addressed through a register.
    RegMem(u8),
    /// `[K]`: memory addressed directly.
    Mem(u64),
    /// `rN`: a register.
    Reg(u8),
    /// `K`: an immediate value.
    Imm(i64),
    /// `[name]`: memory at a named reservation.
    NameMem(&'i str),
    /// `name`: the address of a named reservation as an immediate.
    Name(&'i str),
}

pub fn classify(token: &str) -> Option<Operand> {
    if token.len() >= 2 && token.starts_with('[') && token.ends_with(']') {
        let inner = &token[1..token.len() - 1];
        if let Some(register) = parse_register(inner) {
            Some(Operand::RegMem(register))
        } else if let Ok(address) = inner.parse::<u64>() {
            Some(Operand::Mem(address))
        } else if valid_name(inner) {
            Some(Operand::NameMem(inner))
        } else {
            None
        }
    } else if let Some(register) = parse_register(token) {
        Some(Operand::Reg(register))
    } else if let Ok(value) = token.parse::<i64>() {
        Some(Operand::Imm(value))
    } else if valid_name(token) {
        Some(Operand::Name(token))
    } else {
        None
    }
}

fn parse_register(token: &str) -> Option<u8> {
    if token.starts_with('r') {
        token[1..].parse().ok()
    } else {
        None
    }
}
