use crate::error::LlmwlError;
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Unique entries in ascending byte-wise order.
pub fn deduplicate<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    words
        .into_iter()
        .map(Into::into)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

pub struct WordlistWriter {
    output_path: PathBuf,
}

impl WordlistWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// Deduplicate, sort, and replace the output file in one step.
    ///
    /// The content is staged in a temporary file next to the resolved
    /// destination and renamed over it, so a failure never leaves a partially
    /// written list. A symlinked output is written through to its target, and
    /// an existing file keeps its permissions.
    pub fn write(&self, words: Vec<String>) -> Result<usize, LlmwlError> {
        let unique = deduplicate(words);
        let content = unique.join("\n");

        let destination = resolve_destination(&self.output_path).map_err(|e| self.write_error(e))?;
        let permissions = existing_permissions(&destination).map_err(|e| self.write_error(e))?;

        let mut staged =
            NamedTempFile::new_in(staging_dir(&destination)).map_err(|e| self.write_error(e))?;
        staged
            .write_all(content.as_bytes())
            .and_then(|_| staged.flush())
            .map_err(|e| self.write_error(e))?;
        if let Some(permissions) = permissions {
            staged
                .as_file()
                .set_permissions(permissions)
                .map_err(|e| self.write_error(e))?;
        }
        staged
            .persist(&destination)
            .map_err(|e| self.write_error(e.error))?;

        Ok(unique.len())
    }

    fn write_error(&self, source: std::io::Error) -> LlmwlError {
        LlmwlError::FileWriteFailure {
            path: self.output_path.clone(),
            source,
        }
    }
}

/// Follow symlinks to the file that actually receives the list.
fn resolve_destination(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}

fn existing_permissions(destination: &Path) -> io::Result<Option<fs::Permissions>> {
    match fs::metadata(destination) {
        Ok(metadata) => Ok(Some(metadata.permissions())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(new_file_permissions()),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

fn staging_dir(destination: &Path) -> &Path {
    match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
