use crate::error::CliError;
use std::fs;
use std::path::*;
use tracing::warn;

/// Appends every regular file below `dir` to `files`, descending into subdirectories.
///
/// Unreadable directories and entries are logged and left out of the batch.
fn walk_container_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let listing = match fs::read_dir(dir) {
        Ok(listing) => listing,
        Err(e) => {
            warn!(dir = %dir.display(), "skipping unreadable directory: {e}");
            return;
        }
    };

    for entry in listing {
        match entry.map(|entry| entry.path()) {
            Ok(path) if path.is_dir() => walk_container_files(&path, files),
            Ok(path) => files.push(path),
            Err(e) => warn!(dir = %dir.display(), "skipping unreadable entry: {e}"),
        }
    }
}

/// Resolves an input argument into the files to process and the root their output
/// paths are made relative to.
///
/// A single file is its own batch, rooted at its parent directory.
pub fn collect_inputs(input: &Path) -> std::io::Result<(Vec<PathBuf>, PathBuf)> {
    if input.is_dir() {
        let mut files = Vec::new();
        walk_container_files(input, &mut files);
        files.sort();
        return Ok((files, input.to_path_buf()));
    }

    let root = input.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok((vec![input.to_path_buf()], root))
}

/// Prints a per-file error to stderr.
pub fn handle_process_entry_error(result: Result<(), CliError>) {
    if let Err(e) = result {
        eprintln!("{e}");
    }
}

/// Resolves the output directory argument to an absolute path, creating it first.
pub fn output_cli_path(value: &str) -> Result<PathBuf, String> {
    fs::create_dir_all(value)
        .and_then(|()| fs::canonicalize(value))
        .map_err(|e| format!("Unusable output directory '{value}': {e}"))
}

/// Canonicalizes a CLI path argument that must already exist.
pub fn existing_cli_path(value: &str) -> Result<PathBuf, String> {
    fs::canonicalize(value).map_err(|e| format!("Invalid input path '{value}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_nested_files_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b/c")).unwrap();
        fs::write(dir.path().join("b/c/two.miff"), b"").unwrap();
        fs::write(dir.path().join("one.miff"), b"").unwrap();

        let (files, root) = collect_inputs(dir.path()).unwrap();
        assert_eq!(root, dir.path());
        assert_eq!(
            files,
            [dir.path().join("b/c/two.miff"), dir.path().join("one.miff")]
        );
    }

    #[test]
    fn single_file_is_rooted_at_its_parent() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("single.miff");
        fs::write(&file, b"").unwrap();

        let (files, root) = collect_inputs(&file).unwrap();
        assert_eq!(files, [file]);
        assert_eq!(root, dir.path());
    }

    #[test]
    fn unreadable_directory_yields_an_empty_batch() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = Vec::new();
        walk_container_files(&dir.path().join("missing"), &mut files);
        assert!(files.is_empty());
    }

    #[test]
    fn existing_path_rejects_missing_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(existing_cli_path(missing.to_str().unwrap()).is_err());
        assert!(!missing.exists());
    }

    #[test]
    fn output_path_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out/nested");
        let resolved = output_cli_path(out.to_str().unwrap()).unwrap();
        assert!(resolved.is_dir());
    }
}
