use crate::error::{Error, Result};
use crate::parser::{Rule, SasmParser};
use pest::Parser;

/// Upper bound on token (and thereby symbol name) length in bytes.
pub const MAX_WORD_BYTES: usize = 63;

/// Tokenizes the whole source buffer. Runs exactly once per translation;
/// both passes index into the produced sequence.
pub fn scan(input: &str) -> Result<Vec<&str>> {
    let program = SasmParser::parse(Rule::program, input)?.next().unwrap();

    let mut tokens = Vec::new();
    for pair in program.into_inner() {
        match pair.as_rule() {
            Rule::token => {
                let word = pair.as_str();
                if word.len() > MAX_WORD_BYTES {
                    return Err(Error::BadWord(word.to_string()));
                }
                tokens.push(word);
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }

    Ok(tokens)
}
