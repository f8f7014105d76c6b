#[macro_use]
extern crate clap;

use clap::{Arg, ArgGroup};
use sproc::ExitCode;
use std::process;

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("OBJECT")
                .help("Sets the object file to run")
                .index(1),
        )
        .arg(
            Arg::with_name("assembly")
                .short("a")
                .long("assembly")
                .takes_value(true)
                .value_name("ASSEMBLY")
                .help("Assembles and runs the given source file"),
        )
        .group(
            ArgGroup::with_name("input")
                .args(&["OBJECT", "assembly"])
                .required(true),
        )
        .get_matches();

    let result = match matches.value_of("OBJECT") {
        Some(object) => srun::run_object(object),
        None => {
            let assembly = matches.value_of("assembly").unwrap();
            srun::run_source(assembly)
        }
    };

    match result {
        Ok((_, ExitCode::Halted)) => {}
        Ok((_, exit_code)) => {
            eprintln!("{}", exit_code);
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
