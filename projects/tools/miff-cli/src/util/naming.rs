use miff_container::Record;

/// Last component of a record name. Both `/` and `\` count as separators.
pub fn record_basename(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// File stem for a record's output file. Falls back to the record offset when the
/// name has no usable final component.
pub fn output_stem(record: &Record<'_>) -> String {
    match record_basename(&record.name) {
        "" | "." | ".." => format!("record_{:08x}", record.offset),
        base => base.to_owned(),
    }
}
