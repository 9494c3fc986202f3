use std::io::Write;

use parking_lot::Mutex;

/// Prefixes every line written through it with a given prefix. Works
/// when a write contains multiple lines or when a line is split across
/// writes. Empty lines are not prefixed.
///
/// Nothing is buffered: every piece goes straight to the underlying
/// writer. [`Write`] is implemented for `&PrefixWriter<W>` as well, so a
/// single writer can be shared between threads.
#[derive(Debug)]
pub struct PrefixWriter<W: Write> {
    prefix: Vec<u8>,

    inner: Mutex<Inner<W>>,
}

#[derive(Debug)]
struct Inner<W: Write> {
    writer: W,

    /// True when nothing was written yet, the last byte written was a
    /// newline or the last write was empty.
    at_line_start: bool,
}

impl<W: Write> Inner<W> {
    fn write_lines(&mut self, prefix: &[u8], buf: &[u8]) -> std::io::Result<()> {
        log::trace!(
            "prefixing {} bytes containing {} newlines",
            buf.len(),
            count_newlines(buf)
        );

        let mut segments = buf.split(|byte| *byte == b'\n').peekable();

        while let Some(segment) = segments.next() {
            if segment.is_empty() {
                // Empty segment, positioned at a line boundary.
                self.at_line_start = true;
            } else {
                if self.at_line_start {
                    self.emit(prefix, "prefix")?;
                }

                self.emit(segment, "line")?;
                self.at_line_start = false;
            }

            if segments.peek().is_some() {
                self.emit(b"\n", "newline")?;
                self.at_line_start = true;
            }
        }

        Ok(())
    }

    fn emit(&mut self, bytes: &[u8], piece: &str) -> std::io::Result<()> {
        self.writer.write_all(bytes).inspect_err(|err| {
            log::debug!("failed to write {piece} ({} bytes): {err}", bytes.len());
        })
    }
}

fn count_newlines(buf: &[u8]) -> usize {
    buf.iter().filter(|byte| **byte == b'\n').count()
}

impl<W: Write> Write for PrefixWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.get_mut().write_lines(&self.prefix, buf)?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.get_mut().writer.flush()
    }
}

impl<W: Write> Write for &PrefixWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.lock().write_lines(&self.prefix, buf)?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.lock().writer.flush()
    }
}

impl<W: Write> PrefixWriter<W> {
    /// Create a new [`PrefixWriter`] using the prefix for prefixing
    /// lines and the writer for writing the output of the prefixed
    /// lines. The prefix can be any bytes, an empty prefix passes
    /// everything through unchanged.
    #[must_use]
    pub fn new(prefix: impl Into<Vec<u8>>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),

            inner: Mutex::new(Inner {
                writer,
                at_line_start: true,
            }),
        }
    }

    /// The prefix this writer puts in front of every line.
    #[must_use]
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Whether the next byte written will start a new line and so be
    /// preceded by the prefix.
    #[must_use]
    pub fn is_at_line_start(&self) -> bool {
        self.inner.lock().at_line_start
    }

    /// Mutable access to the underlying writer.
    ///
    /// Writing to it directly bypasses the line tracking of the
    /// [`PrefixWriter`].
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner.get_mut().writer
    }

    /// Unwraps this [`PrefixWriter`], returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner.into_inner().writer
    }
}
