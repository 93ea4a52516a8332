use crate::error::CliError;
use crate::util::{output_cli_path, existing_cli_path, output_stem, with_mapped_file};
use argh::FromArgs;
use bytesize::ByteSize;
use miff_container::{MiffReader, Record, RecordTag};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

#[derive(FromArgs, Debug)]
/// Write raw record payloads to files
#[argh(subcommand, name = "extract")]
pub struct ExtractCmd {
    /// input MIFF file
    #[argh(option, from_str_fn(existing_cli_path))]
    pub input: PathBuf,

    /// output directory path
    #[argh(option, from_str_fn(output_cli_path))]
    pub output: PathBuf,

    /// only extract records with this 4 character tag, e.g. MBmp
    #[argh(option)]
    pub tag: Option<RecordTag>,
}

pub fn handle_extract_command(cmd: ExtractCmd) -> Result<(), Box<dyn std::error::Error>> {
    let (count, bytes) = with_mapped_file(&cmd.input, |data| {
        extract_records(data, &cmd.input, &cmd.output, cmd.tag)
    })?;

    println!("Extracted {count} records ({})", ByteSize(bytes));
    Ok(())
}

/// Payload file path for `record`: `<output>/<name>.<tag>.bin`.
fn payload_path(output: &Path, record: &Record<'_>) -> PathBuf {
    output.join(format!("{}.{}.bin", output_stem(record), record.tag))
}

fn extract_records(
    data: &[u8],
    input: &Path,
    output: &Path,
    filter: Option<RecordTag>,
) -> Result<(u64, u64), CliError> {
    let container_error = |source| CliError::Container {
        path: input.to_path_buf(),
        source,
    };

    let mut count = 0;
    let mut bytes = 0;
    for record in MiffReader::new(data).map_err(container_error)? {
        let record = record.map_err(container_error)?;
        if filter.is_some_and(|tag| tag != record.tag) {
            continue;
        }

        let path = payload_path(output, &record);
        fs::write(&path, record.payload)?;
        debug!(path = %path.display(), length = record.payload.len(), "Wrote payload");
        count += 1;
        bytes += record.payload.len() as u64;
    }
    Ok((count, bytes))
}
