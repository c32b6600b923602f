//! Size-based log rotation with zip compression.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;

/// File writer that rotates once the live file grows past a size threshold.
///
/// On rotation the current contents are compressed into a timestamped `.zip`
/// archive beside the live file, which is then truncated in place.
pub struct RollingWriter {
    path: PathBuf,
    file: File,
    written: u64,
    max_size: u64,
}

impl RollingWriter {
    /// Open (or create) the log file at `path` for appending.
    pub fn open(path: &Path, max_size: u64) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            path: path.to_path_buf(),
            file,
            written,
            max_size,
        })
    }

    /// Compress the live file into a `.zip` archive and truncate it.
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        let archive_path = self.archive_path();
        let archive = File::create(&archive_path)?;
        let mut zip = zip::ZipWriter::new(archive);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let entry_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "log".to_string());
        zip.start_file(entry_name, options).map_err(io::Error::other)?;

        let mut source = File::open(&self.path)?;
        io::copy(&mut source, &mut zip)?;
        zip.finish().map_err(io::Error::other)?;

        self.file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        self.written = 0;

        Ok(())
    }

    /// Archive name: `{stem}-{timestamp}.zip` beside the live file, with a
    /// numeric suffix when rotations land within the same second.
    fn archive_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "log".to_string());
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");

        let base = format!("{}-{}", stem, timestamp);
        let mut candidate = self.path.with_file_name(format!("{}.zip", base));
        let mut n = 1;
        while candidate.exists() {
            n += 1;
            candidate = self.path.with_file_name(format!("{}.{}.zip", base, n));
        }

        candidate
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_size {
            self.rotate()?;
        }

        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
