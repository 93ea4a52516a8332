use crate::error::CliError;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;

/// Memory-maps `path` read-only and runs `f` over its contents.
///
/// Empty files are passed as an empty slice without creating a mapping.
pub fn with_mapped_file<T>(
    path: &Path,
    f: impl FnOnce(&[u8]) -> Result<T, CliError>,
) -> Result<T, CliError> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;
    if size == 0 {
        return f(&[]);
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    f(mapping.as_slice())
}
