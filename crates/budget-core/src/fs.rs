//! Filesystem utilities for atomic export files.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// A file that only appears at its destination once fully written.
///
/// Bytes go to a hidden temp sibling of the destination. [`AtomicFile::commit`]
/// flushes, syncs and renames it into place. Dropping an uncommitted file
/// removes the temp sibling, so a failed export never leaves a partial file
/// behind.
#[derive(Debug)]
pub struct AtomicFile {
    writer: Option<BufWriter<File>>,
    temp_path: PathBuf,
    destination: PathBuf,
}

impl AtomicFile {
    /// Create the temp sibling for `destination`.
    ///
    /// # Errors
    ///
    /// Fails if the destination's directory does not exist or is not writable.
    pub fn create(destination: impl AsRef<Path>) -> io::Result<Self> {
        let destination = destination.as_ref().to_path_buf();
        let temp_path = temp_sibling(&destination)?;
        let file = File::create(&temp_path)?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
            temp_path,
            destination,
        })
    }

    /// Final path the file will occupy after commit.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Flush and move the file into place.
    ///
    /// If flushing or syncing fails the writer is still held, so `Drop`
    /// removes the temp sibling.
    pub fn commit(mut self) -> io::Result<()> {
        let writer = self.writer()?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        self.writer = None;
        rename_with_fallback(&self.temp_path, &self.destination)
    }

    fn writer(&mut self) -> io::Result<&mut BufWriter<File>> {
        self.writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "file already committed"))
    }
}

impl Write for AtomicFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer()?.flush()
    }
}

impl Drop for AtomicFile {
    fn drop(&mut self) {
        if self.writer.take().is_some() {
            let _ = fs::remove_file(&self.temp_path);
        }
    }
}

fn temp_sibling(destination: &Path) -> io::Result<PathBuf> {
    let name = destination
        .file_name()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Export path has no file name: {}", destination.display()),
            )
        })?
        .to_string_lossy();
    let temp_name = format!(".{}.{}.tmp", name, std::process::id());
    Ok(destination.with_file_name(temp_name))
}

/// Rename a file, replacing the destination where plain rename refuses to.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination
/// already exists. The destination is removed and the rename retried; if that
/// also fails the temp file is cleaned up.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Rename into {} failed (initial: {}, retry: {})",
                    destination.display(),
                    initial_err,
                    retry_err
                ),
            )
        })?;
    }
    Ok(())
}
