//! Entry record rendering
//!
//! Every included file becomes one record:
//!
//! ```text
//! <MARKER> <path>:
//!
//! <content>
//!
//! ```

use std::io::{self, Write};
use std::path::Path;

/// Writes delimited entry records to a sink
pub struct RecordWriter<W: Write> {
    sink: W,
    marker: String,
    entries: usize,
    bytes: u64,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(sink: W, marker: impl Into<String>) -> Self {
        Self {
            sink,
            marker: marker.into(),
            entries: 0,
            bytes: 0,
        }
    }

    /// Append one record for `path` holding `content` verbatim
    pub fn write_entry(&mut self, path: &Path, content: &str) -> io::Result<()> {
        let header = format!("{} {}:\n\n", self.marker, path.display());
        self.sink.write_all(header.as_bytes())?;
        self.sink.write_all(content.as_bytes())?;
        self.sink.write_all(b"\n\n")?;

        self.entries += 1;
        self.bytes += (header.len() + content.len() + 2) as u64;
        Ok(())
    }

    /// Records written so far
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Flush the sink and hand it back with the byte count
    pub fn finish(mut self) -> io::Result<(W, u64)> {
        self.sink.flush()?;
        Ok((self.sink, self.bytes))
    }
}
