use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// External I/O seam for the `in` and `out` instructions.
pub trait Console {
    /// Reads one signed decimal integer.
    fn input(&mut self) -> io::Result<i64>;

    /// Writes one signed decimal integer followed by a newline.
    fn output(&mut self, value: i64) -> io::Result<()>;
}

/// Console backed by standard input and standard output.
///
/// `input` skips leading whitespace and reads the next whitespace-delimited
/// token, so several integers may share a line.
pub struct StdConsole;

impl Console for StdConsole {
    fn input(&mut self) -> io::Result<i64> {
        let stdin = io::stdin();
        let token = read_token(&mut stdin.lock())?;
        token
            .parse()
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "expected an integer"))
    }

    fn output(&mut self, value: i64) -> io::Result<()> {
        let stdout = io::stdout();
        writeln!(stdout.lock(), "{}", value)
    }
}

fn read_token<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut token = String::new();

    loop {
        let (done, used) = {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut done = false;
            for &byte in buf {
                if byte.is_ascii_whitespace() {
                    if token.is_empty() {
                        used += 1;
                        continue;
                    }
                    done = true;
                    break;
                }
                token.push(byte as char);
                used += 1;
            }
            (done, used)
        };

        reader.consume(used);
        if done {
            break;
        }
    }

    if token.is_empty() {
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no input available",
        ))
    } else {
        Ok(token)
    }
}

/// In-memory console for tests and embedding.
#[derive(Default)]
pub struct BufferConsole {
    pub inputs: VecDeque<i64>,
    pub outputs: Vec<i64>,
}

impl BufferConsole {
    pub fn new(inputs: &[i64]) -> BufferConsole {
        BufferConsole {
            inputs: inputs.iter().copied().collect(),
            outputs: Vec::new(),
        }
    }
}

impl Console for BufferConsole {
    fn input(&mut self) -> io::Result<i64> {
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no input available"))
    }

    fn output(&mut self, value: i64) -> io::Result<()> {
        self.outputs.push(value);
        Ok(())
    }
}
