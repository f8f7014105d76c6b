//! Glue between the object format, the assembler and the processor: loads a
//! program, wires up the standard-I/O console and the `proc.log` trace, and
//! runs to completion.

use sproc::{ExitCode, Processor, StdConsole};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Instruction trace of the run, written to the current directory.
pub const LOG_PATH: &str = "proc.log";

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error, PathBuf),
    Asm(sasm::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err, path) => write!(f, "\"{}\": {}", path.display(), err),
            Error::Asm(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

/// Runs an object file until it halts or faults.
pub fn run_object<P: AsRef<Path>>(path: P) -> Result<(Processor, ExitCode), Error> {
    let image =
        sobj::read_file(&path).map_err(|err| Error::Io(err, path.as_ref().to_owned()))?;
    run_image(image.code())
}

/// Assembles a source file in memory and runs it immediately; no object
/// file is written.
pub fn run_source<P: AsRef<Path>>(path: P) -> Result<(Processor, ExitCode), Error> {
    let text = std::fs::read_to_string(&path)
        .map_err(|err| Error::Io(err, path.as_ref().to_owned()))?;
    let code = sasm::assemble(&text).map_err(Error::Asm)?;
    run_image(&code)
}

fn run_image(code: &[u8]) -> Result<(Processor, ExitCode), Error> {
    let log_path = PathBuf::from(LOG_PATH);
    let log_file = File::create(&log_path).map_err(|err| Error::Io(err, log_path))?;
    let mut trace = BufWriter::new(log_file);

    let mut processor = Processor::default();
    let exit_code = processor.run(code, &mut StdConsole, &mut trace);

    let _ = trace.flush();

    Ok((processor, exit_code))
}
