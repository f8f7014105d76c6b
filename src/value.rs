use crate::Endian;
use byteorder::ByteOrder;
use std::fmt;

/// An 8-byte value word, viewable as a signed or unsigned integer or as a
/// double. Registers and memory cells store these; the executor picks the
/// view required by each opcode.
///
/// Storage is eight raw little-endian bytes; every view goes through
/// [`Endian`](../type.Endian.html), so the representation is independent of
/// the host platform.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Value([u8; 8]);

impl Value {
    pub fn i(self) -> i64 {
        Endian::read_i64(&self.0)
    }

    pub fn u(self) -> u64 {
        Endian::read_u64(&self.0)
    }

    pub fn f(self) -> f64 {
        Endian::read_f64(&self.0)
    }

    pub fn set_i(&mut self, value: i64) {
        Endian::write_i64(&mut self.0, value);
    }

    pub fn set_u(&mut self, value: u64) {
        Endian::write_u64(&mut self.0, value);
    }

    pub fn set_f(&mut self, value: f64) {
        Endian::write_f64(&mut self.0, value);
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.i())
    }
}
