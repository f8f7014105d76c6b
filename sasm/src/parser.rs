use pest_derive::Parser;

/// Splits source text into whitespace-delimited words. There is no quoting,
/// no escaping and no comment syntax; any run of whitespace separates
/// tokens.
#[derive(Parser)]
#[grammar = "sasm.pest"]
pub struct SasmParser;
