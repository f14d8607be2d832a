// Sat Oct 17 2026 - Alex

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Where a pass writes. A file is created or truncated on open and closed
/// when the target is dropped.
pub enum OutputTarget<'a> {
    Stream(&'a mut dyn Write),
    File(BufWriter<File>),
}

impl<'a> OutputTarget<'a> {
    pub fn stream(out: &'a mut dyn Write) -> Self {
        OutputTarget::Stream(out)
    }

    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(OutputTarget::File(BufWriter::new(file)))
    }
}

impl Write for OutputTarget<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputTarget::Stream(out) => out.write(buf),
            OutputTarget::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::Stream(out) => out.flush(),
            OutputTarget::File(file) => file.flush(),
        }
    }
}
