//! Stdout handling for shell pipelines.
//!
//! `kimsufi_watch list | head -3` closes the read end early. The report is
//! still valid, so the exit code must reflect availability, not the write.

use std::io::{self, ErrorKind, Write};

/// Writer that treats a closed downstream pipe as the end of output.
///
/// After the first `BrokenPipe`, every write and flush succeeds without
/// reaching the inner writer. Other errors propagate unchanged.
pub struct IgnoreBrokenPipe<W: Write> {
    inner: W,
    closed: bool,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    /// True once the reader has gone away.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn absorb<T>(&mut self, result: io::Result<T>, on_close: T) -> io::Result<T> {
        match result {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                self.closed = true;
                Ok(on_close)
            }
            other => other,
        }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.closed {
            return Ok(buf.len());
        }
        let result = self.inner.write(buf);
        self.absorb(result, buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        let result = self.inner.flush();
        self.absorb(result, ())
    }
}
