// src/stream.rs

//! Gzip NDJSON stream framing.
//!
//! Input files may hold several concatenated gzip members, because the
//! writer appends a fresh member per run instead of rewriting the file.
//! Reads therefore go through [`MultiGzDecoder`], which consumes members
//! until EOF where a plain decoder would stop after the first.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::Result;

/// Open a gzip NDJSON file for line-by-line reading.
pub fn open_input(path: &Path) -> Result<BufReader<MultiGzDecoder<File>>> {
    let file = File::open(path)?;
    Ok(BufReader::new(MultiGzDecoder::new(file)))
}

/// Gzip writer that appends one complete member to a file.
///
/// Call [`seal`](OutputStream::seal) on every exit path, including after
/// a failed pass: an unterminated member truncates whatever was already
/// admitted when the file is read back.
pub struct OutputStream {
    encoder: GzEncoder<BufWriter<File>>,
}

impl OutputStream {
    /// Open `path` for appending, starting a new gzip member.
    pub fn append(path: &Path, level: u32) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let encoder = GzEncoder::new(BufWriter::new(file), Compression::new(level));
        Ok(Self { encoder })
    }

    /// Terminate the gzip member and flush it to disk.
    pub fn seal(self) -> Result<()> {
        let mut inner = self.encoder.finish()?;
        inner.flush()?;
        Ok(())
    }
}

impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.encoder.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.encoder.flush()
    }
}
