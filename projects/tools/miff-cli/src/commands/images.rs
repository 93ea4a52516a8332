use crate::error::CliError;
use crate::png_writer::write_png;
use crate::util::{
    output_cli_path, collect_inputs, existing_cli_path, handle_process_entry_error,
    record_basename, with_mapped_file, Throughput,
};
use argh::FromArgs;
use bytesize::ByteSize;
use miff_container::{Dispatcher, RecordHandlerError, RecordTag};
use miff_mbmp::{BitmapHandler, ImageSink};
use miff_pvr::DecodedImage;
#[cfg(feature = "multithreaded")]
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};
use tracing::{info, warn};

#[derive(FromArgs, Debug)]
/// Decode every MBmp record into a PNG file
#[argh(subcommand, name = "images")]
pub struct ImagesCmd {
    /// input MIFF file or directory of MIFF files
    #[argh(option, from_str_fn(existing_cli_path))]
    pub input: PathBuf,

    /// output directory path
    #[argh(option, from_str_fn(output_cli_path))]
    pub output: PathBuf,
}

/// Counters shared by the worker threads.
#[derive(Debug, Default)]
struct ImageStats {
    files: AtomicU64,
    images: AtomicU64,
    failures: AtomicU64,
    bytes: AtomicU64,
}

/// Writes each decoded image to `<dir>/<record basename>.png`.
///
/// Records sharing a basename replace each other's file; the last one wins.
struct PngDirectorySink<'a> {
    dir: &'a Path,
    written: u64,
    overwritten: u64,
}

impl ImageSink for PngDirectorySink<'_> {
    fn accept(&mut self, name: &str, image: DecodedImage) -> Result<(), RecordHandlerError> {
        let stem = match record_basename(name) {
            "" | "." | ".." => "unnamed",
            base => base,
        };
        let path = self.dir.join(format!("{stem}.png"));
        if path.exists() {
            warn!(path = %path.display(), record = name, "overwriting existing image");
            self.overwritten += 1;
        }
        write_png(&image, &path)?;
        self.written += 1;
        Ok(())
    }
}

pub fn handle_images_command(cmd: ImagesCmd) -> Result<(), Box<dyn std::error::Error>> {
    let (entries, root) = collect_inputs(&cmd.input)?;
    if entries.is_empty() {
        println!("No files found in input directory.");
        return Ok(());
    }

    println!("Found {} files to process\n", entries.len());

    let start = Instant::now();
    let stats = ImageStats::default();
    let process = |path: &PathBuf| {
        let result = process_file(path, &root, &cmd.output, &stats);
        handle_process_entry_error(result);
    };

    #[cfg(feature = "multithreaded")]
    entries.par_iter().for_each(process);
    #[cfg(not(feature = "multithreaded"))]
    entries.iter().for_each(process);

    let elapsed = start.elapsed();
    let total_bytes = stats.bytes.load(Ordering::Relaxed);

    println!("\n=== Image Export Complete ===");
    println!("Files read: {}", stats.files.load(Ordering::Relaxed));
    println!("Images written: {}", stats.images.load(Ordering::Relaxed));
    println!("Failed records: {}", stats.failures.load(Ordering::Relaxed));
    println!("Time taken: {elapsed:.2?}");
    println!("Data processed: {}", ByteSize(total_bytes));
    println!("Throughput: {}", Throughput::from_elapsed(total_bytes, elapsed));

    Ok(())
}

/// Output directory for the images of one container: the container's path relative to
/// the input root, below the output directory.
fn container_output_dir(path: &Path, root: &Path, output: &Path) -> PathBuf {
    let relative = path
        .strip_prefix(root)
        .ok()
        .filter(|relative| !relative.as_os_str().is_empty())
        .or_else(|| path.file_name().map(Path::new))
        .unwrap_or(path);
    output.join(relative)
}

fn process_file(
    path: &Path,
    root: &Path,
    output: &Path,
    stats: &ImageStats,
) -> Result<(), CliError> {
    let dir = container_output_dir(path, root, output);

    let outcome = with_mapped_file(path, |data| {
        stats.bytes.fetch_add(data.len() as u64, Ordering::Relaxed);

        let mut dispatcher = Dispatcher::<PngDirectorySink>::new();
        dispatcher.register(RecordTag::BITMAP, BitmapHandler);

        // Only create the directory once the input is known to be a container.
        miff_container::MiffReader::new(data).map_err(|source| CliError::Container {
            path: path.to_path_buf(),
            source,
        })?;
        fs::create_dir_all(&dir)?;

        let sink = PngDirectorySink {
            dir: &dir,
            written: 0,
            overwritten: 0,
        };
        dispatcher
            .dispatch(data, sink)
            .map_err(|source| CliError::Container {
                path: path.to_path_buf(),
                source,
            })
    })?;

    stats.files.fetch_add(1, Ordering::Relaxed);
    stats
        .images
        .fetch_add(outcome.collector.written, Ordering::Relaxed);
    stats
        .failures
        .fetch_add(outcome.report.failures.len() as u64, Ordering::Relaxed);

    for failure in &outcome.report.failures {
        eprintln!(
            "{}: record '{}' at offset {}: {}",
            path.display(),
            failure.name,
            failure.offset,
            failure.error
        );
    }

    info!(
        path = %path.display(),
        images = outcome.collector.written,
        overwritten = outcome.collector.overwritten,
        skipped = outcome.report.skipped.len(),
        failed = outcome.report.failures.len(),
        "Processed container"
    );
    Ok(())
}
