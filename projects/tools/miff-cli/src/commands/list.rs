use crate::error::CliError;
use crate::util::{existing_cli_path, with_mapped_file};
use argh::FromArgs;
use miff_container::{ContainerHeader, MiffReader, Record};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Print the container header and one line per record
#[argh(subcommand, name = "list")]
pub struct ListCmd {
    /// input MIFF file
    #[argh(option, from_str_fn(existing_cli_path))]
    pub input: PathBuf,
}

pub fn handle_list_command(cmd: ListCmd) -> Result<(), Box<dyn std::error::Error>> {
    let lines = with_mapped_file(&cmd.input, |data| {
        let container_error = |source| CliError::Container {
            path: cmd.input.clone(),
            source,
        };

        let reader = MiffReader::new(data).map_err(container_error)?;
        let mut lines = vec![format_header(&reader.header())];
        for record in reader {
            let record = record.map_err(container_error)?;
            lines.push(format_record(&record));
        }
        Ok(lines)
    })?;

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn format_header(header: &ContainerHeader) -> String {
    format!(
        "MIFF size={} endianness={:?} tag='{}'",
        header.declared_size,
        header.endianness,
        header.endian_tag.escape_ascii()
    )
}

fn format_record(record: &Record<'_>) -> String {
    format!(
        "{:>10} {} len={:<8} payload={:<8} meta=[{}, {}] name='{}' aux='{}'",
        record.offset,
        record.tag,
        record.declared_length,
        record.payload.len(),
        record.metadata[0],
        record.metadata[1],
        record.name,
        record.aux_name
    )
}
