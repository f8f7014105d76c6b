pub mod constants;

mod console;
mod instructions;
mod processor;
mod value;

pub use crate::console::{BufferConsole, Console, StdConsole};
pub use crate::instructions::*;
pub use crate::processor::*;
pub use crate::value::Value;

pub type Endian = byteorder::LittleEndian;

/// Byte offset into the code image.
pub type CodeAddr = u64;
