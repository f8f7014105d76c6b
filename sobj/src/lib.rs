//! The `.proc` object file format.
//!
//! An object file is nothing but the raw encoded instruction stream: no
//! header, no trailer, no alignment padding. Multi-byte operand words inside
//! the stream are little-endian; this crate treats the whole image as opaque
//! bytes and leaves decoding to the processor.

use std::ffi::OsStr;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// File extension of object files.
pub const EXTENSION: &str = "proc";

/// An encoded instruction stream as produced by the assembler and consumed
/// by the processor.
#[derive(Debug, PartialEq)]
pub struct Image {
    code: Vec<u8>,
}

impl Image {
    pub fn from(code: Vec<u8>) -> Image {
        Image { code }
    }

    pub fn copy_from(code: &[u8]) -> Image {
        Image {
            code: Vec::from(code),
        }
    }

    pub fn code(&self) -> &[u8] {
        &self.code[..]
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

pub fn read<R: Read>(reader: &mut R) -> std::io::Result<Image> {
    let mut code = Vec::new();
    reader.read_to_end(&mut code)?;
    Ok(Image::from(code))
}

pub fn write<W: Write>(writer: &mut W, image: &Image) -> std::io::Result<()> {
    writer.write_all(&image.code[..])
}

pub trait ReadImageExt: Read + Sized {
    fn read_image(&mut self) -> std::io::Result<Image> {
        read(self)
    }
}

impl<R: Read + Sized> ReadImageExt for R {}

pub trait WriteImageExt: Write + Sized {
    fn write_image(&mut self, image: &Image) -> std::io::Result<()> {
        write(self, image)
    }
}

impl<W: Write + Sized> WriteImageExt for W {}

pub fn read_file<P: AsRef<Path>>(path: P) -> std::io::Result<Image> {
    BufReader::new(File::open(path)?).read_image()
}

pub fn write_file<P: AsRef<Path>>(path: P, image: &Image) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_image(image)?;
    writer.flush()
}

/// Derives the object file path from a source file path: the file name is
/// truncated at its first `.` (not the last, so `a.b.c` becomes `a.proc`)
/// and the object extension is appended.
pub fn object_path(source: &Path) -> PathBuf {
    let name = source
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or_default();
    let base = name.split('.').next().unwrap_or(name);
    source.with_file_name(format!("{}.{}", base, EXTENSION))
}
