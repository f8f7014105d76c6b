#[macro_use]
extern crate clap;

use clap::Arg;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process;

const LOG_PATH: &str = "assm.log";

#[derive(Debug)]
enum IoContext {
    ReadSource,
    WriteObject,
    WriteLog,
}

#[derive(Debug)]
enum Error {
    Asm(sasm::Error),
    Io(std::io::Error, IoContext, PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err, context, path) => write!(
                f,
                "{} file \"{}\" failed: {}",
                match context {
                    IoContext::ReadSource => "Reading source",
                    IoContext::WriteObject => "Writing object",
                    IoContext::WriteLog => "Creating log",
                },
                path.display(),
                err
            ),
            Error::Asm(err) => write!(f, "{}", err),
        }
    }
}

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("SOURCE")
                .help("Sets the source file to translate")
                .required(true)
                .index(1),
        )
        .get_matches();

    let source = matches.value_of("SOURCE").unwrap();

    if let Err(err) = translate_file(source) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn translate_file(source: &str) -> Result<(), Error> {
    let source_path = Path::new(source);

    let source_file = File::open(source_path)
        .map_err(|err| Error::Io(err, IoContext::ReadSource, source_path.to_owned()))?;
    let mut reader = BufReader::new(source_file);
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|err| Error::Io(err, IoContext::ReadSource, source_path.to_owned()))?;

    let log_path = PathBuf::from(LOG_PATH);
    let log_file = File::create(&log_path)
        .map_err(|err| Error::Io(err, IoContext::WriteLog, log_path))?;
    let mut log = BufWriter::new(log_file);

    // On failure the log still gets the trace up to the failing command; no
    // object file is written.
    let code = sasm::assemble_with_trace(&text, &mut log).map_err(Error::Asm)?;

    let object_path = sobj::object_path(source_path);
    sobj::write_file(&object_path, &sobj::Image::from(code))
        .map_err(|err| Error::Io(err, IoContext::WriteObject, object_path))?;

    Ok(())
}
