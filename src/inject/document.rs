use std::io::Write;
use std::path::{Path, PathBuf};

use atomicwrites::{AllowOverwrite, AtomicFile};

use crate::error::hook_error::{
    CreateDocumentSnafu, ReadDocumentSnafu, ResolveDocumentSnafu, WriteDocumentSnafu,
};
use crate::error::Result;
use snafu::ResultExt;

const MAX_LINK_DEPTH: usize = 40;

/// Create the document with `header` if it does not exist. Returns true if it was created.
///
/// A dangling symlink counts as missing; the header is written to the link's target.
pub fn ensure_document(path: &Path, header: &str) -> Result<bool> {
    let target = resolve_target(path)?;
    if target.exists() {
        return Ok(false);
    }
    write_atomic(&target, header).context(CreateDocumentSnafu { path })?;
    tracing::info!("Created {} with default header", target.display());
    Ok(true)
}

pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).context(ReadDocumentSnafu { path })
}

/// Replace the whole document. Staged through a temp file and renamed into place.
///
/// Symlinks are followed so the rename replaces the real file, not the link.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    let target = resolve_target(path)?;
    write_atomic(&target, content).context(WriteDocumentSnafu { path })
}

/// Follow symlinks from `path` to the file that should be written, which may not exist yet.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    let mut current = path.to_path_buf();
    for _ in 0..MAX_LINK_DEPTH {
        let meta = match std::fs::symlink_metadata(&current) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(current),
            Err(e) => return Err(e).context(ResolveDocumentSnafu { path }),
        };
        if !meta.file_type().is_symlink() {
            return Ok(current);
        }
        let link = std::fs::read_link(&current).context(ResolveDocumentSnafu { path })?;
        current = match current.parent() {
            Some(parent) if link.is_relative() => parent.join(link),
            _ => link,
        };
    }
    Err(std::io::Error::other("too many levels of symbolic links"))
        .context(ResolveDocumentSnafu { path })
}

fn write_atomic(
    path: &Path,
    content: &str,
) -> std::result::Result<(), atomicwrites::Error<std::io::Error>> {
    let af = AtomicFile::new(path, AllowOverwrite);
    af.write(|f| f.write_all(content.as_bytes()))
}
