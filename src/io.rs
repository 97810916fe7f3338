//! Input/Output structs and functions
//!
//! The first operand is read into memory in its entirety and its lines are
//! borrowed from that buffer; it also decides the output `Layout`. The second
//! and later operands are read through a decoding reader, line by line, into
//! owned lines.
use anyhow::{Context, Result};
use bstr::io::BufReadExt;
use bstr::ByteSlice;
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use log::trace;
use memchr::memchr;
use std::{
    fs,
    fs::File,
    io,
    io::BufReader,
    path::{Path, PathBuf},
};

/// Return the contents of the first file named in `files` as a `Vec<u8>`, and
/// an iterator over the subsequent arguments. Returns `None` when `files` is
/// empty.
pub fn first_and_rest(files: &[PathBuf]) -> Result<Option<(Vec<u8>, RemainingOperands)>> {
    match files {
        [] => Ok(None),
        [first, rest @ ..] => {
            let first_operand = fs::read(first)
                .with_context(|| format!("Can't read file: {}", first.display()))
                .map(decode_if_utf16)?;
            trace!("read {} bytes from {}", first_operand.len(), first.display());
            Ok(Some((first_operand, RemainingOperands::from(rest.to_vec()))))
        }
    }
}

/// Decode UTF-16 to UTF-8 if we see a UTF-16 Byte Order Mark at the beginning
/// of `candidate`. Otherwise return `candidate` unchanged.
fn decode_if_utf16(candidate: Vec<u8>) -> Vec<u8> {
    // Note: `decode_without_bom_handling` will change malformed sequences to the
    // Unicode REPLACEMENT CHARACTER.
    //
    // The UTF-16 BOM is translated to a UTF-8 BOM, which `Layout::of` then sees.
    if let Some((enc, _)) = encoding_rs::Encoding::for_bom(&candidate) {
        if [encoding_rs::UTF_16LE, encoding_rs::UTF_16BE].contains(&enc) {
            let (translated, _had_malformed_sequences) =
                enc.decode_without_bom_handling(&candidate);
            return translated.into_owned().into_bytes();
        }
    }
    candidate
}

/// Returns the lines of `slice`, without their `\n` or `\r\n` terminators.
pub fn lines_of(slice: &[u8]) -> impl Iterator<Item = &[u8]> {
    slice.lines()
}

/// A `Layout` records whether the first operand began with a (UTF-8) Byte
/// Order Mark, and what line terminator its first line used. On output we
/// print a Byte Order Mark if the first operand had one, and end each line
/// with the same terminator as the first operand's first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    bom: &'static [u8],             // Byte Order Mark or empty
    line_terminator: &'static [u8], // \n or \r\n
}

impl Default for Layout {
    /// No Byte Order Mark, and `\n` line terminators
    fn default() -> Self {
        Layout { bom: b"", line_terminator: b"\n" }
    }
}

impl Layout {
    /// Returns the `Layout` of `first_operand`: `\r\n` line terminators if its
    /// first line ends with `\r\n`, and `\n` if its first line ends just with
    /// `\n` (or it is a single line with no terminator).
    #[must_use]
    pub fn of(first_operand: &[u8]) -> Layout {
        let mut layout = Layout::default();
        if has_bom(first_operand) {
            layout.bom = BOM_BYTES;
        }
        if let Some(n) = memchr(b'\n', first_operand) {
            if n > 0 && first_operand[n - 1] == b'\r' {
                layout.line_terminator = b"\r\n";
            }
        }
        layout
    }

    /// `operand` without the Byte Order Mark this `Layout` found in it
    #[must_use]
    pub fn body<'a>(&self, operand: &'a [u8]) -> &'a [u8] {
        &operand[self.bom.len()..]
    }

    /// Writes the Byte Order Mark (if any), then each of `lines` followed by
    /// the line terminator.
    pub fn write_lines<'a>(
        &self,
        lines: impl IntoIterator<Item = &'a [u8]>,
        mut out: impl io::Write,
    ) -> Result<()> {
        out.write_all(self.bom)?;
        for line in lines {
            out.write_all(line)?;
            out.write_all(self.line_terminator)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Like `write_lines`, but each line is preceded by its count, right
    /// aligned to the width of the largest count. An empty `counted` still
    /// gets the Byte Order Mark, as `write_lines` does.
    pub fn write_counted<'a>(
        &self,
        counted: impl IntoIterator<Item = (&'a [u8], usize)>,
        mut out: impl io::Write,
    ) -> Result<()> {
        let counted: Vec<_> = counted.into_iter().collect();
        let max_count = counted.iter().map(|(_, n)| *n).max().unwrap_or(1);
        let width = (max_count.max(1).ilog10() + 1) as usize;
        out.write_all(self.bom)?;
        for (line, n) in counted {
            write!(out, "{n:width$} ")?;
            out.write_all(line)?;
            out.write_all(self.line_terminator)?;
        }
        out.flush()?;
        Ok(())
    }
}

const BOM_0: u8 = b'\xEF';
const BOM_1: u8 = b'\xBB';
const BOM_2: u8 = b'\xBF';
const BOM_BYTES: &[u8] = b"\xEF\xBB\xBF";
/// Does `first_operand` begin with a (UTF-8) Byte Order Mark?
fn has_bom(first_operand: &[u8]) -> bool {
    first_operand.len() >= 3
        && first_operand[0] == BOM_0
        && first_operand[1] == BOM_1
        && first_operand[2] == BOM_2
}

/// The `RemainingOperands` structure is an iterator over the second and
/// subsequent operands.
pub struct RemainingOperands {
    files: std::vec::IntoIter<PathBuf>,
}

impl From<Vec<PathBuf>> for RemainingOperands {
    fn from(files: Vec<PathBuf>) -> Self {
        RemainingOperands { files: files.into_iter() }
    }
}

impl Iterator for RemainingOperands {
    type Item = Result<NextOperand>;
    fn next(&mut self) -> Option<Self::Item> {
        self.files.next().map(|path| reader_for(&path))
    }
}

/// `NextOperand` is the `Item` type for the `RemainingOperands` iterator. The
/// `reader` field is a reader for the file with path `path`. We keep the `path`
/// field around to improve error messages.
pub struct NextOperand {
    path: PathBuf,
    reader: BufReader<DecodeReaderBytes<File, Vec<u8>>>,
}

/// The reader for a second or subsequent operand is a buffered reader with the
/// ability to decode UTF-16 files.
fn reader_for(path: &Path) -> Result<NextOperand> {
    let f = File::open(path).with_context(|| format!("Can't open file: {}", path.display()))?;
    let reader = BufReader::with_capacity(
        32 * 1024,
        DecodeReaderBytesBuilder::new()
            .bom_sniffing(true) // Look at the BOM to detect UTF-16 files and convert to UTF-8
            .strip_bom(true) // Remove the BOM before sending data to us
            .utf8_passthru(true) // Don't enforce UTF-8 (BOM or no BOM)
            .build(f),
    );
    Ok(NextOperand { path: path.to_owned(), reader })
}

impl NextOperand {
    /// Reads every line of the operand into memory, terminators stripped
    pub fn lines(mut self) -> Result<Vec<Vec<u8>>> {
        let complaint = format!("Error reading file: {}", self.path.display());
        let mut lines = Vec::new();
        self.reader
            .for_byte_line(|line| {
                lines.push(line.to_vec());
                Ok(true)
            })
            .context(complaint)?;
        trace!("read {} lines from {}", lines.len(), self.path.display());
        Ok(lines)
    }
}
