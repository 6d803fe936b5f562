use serde::Serialize;
use std::fmt;
use std::io::{self, BufReader, Read};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LineEnding {
    /// Classic Mac OS
    Cr,
    /// Unix
    Lf,
    /// Windows
    CrLf,
    /// No terminator before end of file or the scan limit
    None,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Cr => "CR",
            LineEnding::Lf => "LF",
            LineEnding::CrLf => "CRLF",
            LineEnding::None => "NONE",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finds the first line terminator in `reader`.
///
/// Looks at one byte at a time with one byte of lookback and stops at the
/// first terminator. A lone `\r` as the very last byte is not classified.
/// With a `limit`, at most that many bytes are examined.
pub fn detect_line_ending<R: Read>(reader: R, limit: Option<u64>) -> io::Result<LineEnding> {
    let reader = BufReader::new(reader.take(limit.unwrap_or(u64::MAX)));
    let mut prev = 0u8;

    for byte in reader.bytes() {
        let current = byte?;
        if prev == b'\r' && current == b'\n' {
            return Ok(LineEnding::CrLf);
        } else if current == b'\n' {
            return Ok(LineEnding::Lf);
        } else if prev == b'\r' {
            return Ok(LineEnding::Cr);
        }
        prev = current;
    }

    Ok(LineEnding::None)
}
