use lightweight_mmap::handles::HandleOpenError;
use lightweight_mmap::mmap::MmapError;
use miff_container::ContainerError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] HandleOpenError),
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] MmapError),
    #[error("{}: {source}", .path.display())]
    Container {
        path: PathBuf,
        #[source]
        source: ContainerError,
    },
    #[error(transparent)]
    ImageWrite(#[from] ImageWriteError),
}

/// Failure to store one decoded image. Local to the record being written.
#[derive(Debug, Error)]
pub enum ImageWriteError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),
    #[error("Image '{0}' has no pixels")]
    Empty(String),
}
