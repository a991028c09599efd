//! Lazy line iteration over log streams.

use std::io::{self, BufRead};

/// Single-pass iterator over the lines of a log stream.
///
/// Lines are decoded as UTF-8 with invalid sequences replaced, so a stray
/// binary byte in a peer log does not abort a whole archive. The trailing
/// newline (`\n` or `\r\n`) is stripped.
pub struct LineScanner<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for LineScanner<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
