use crate::{
    constants::FIELD_COUNT,
    core::employee::EmployeeRow,
    error::RosterError,
    utils::util::Result,
};
use std::{fs::File, io::Read, path::Path};

fn read_rows<R: Read>(source: R) -> Result<Option<Vec<EmployeeRow>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(source);

    // The first row is the header and is discarded without inspection
    let mut header = csv::StringRecord::new();
    if !reader.read_record(&mut header)? {
        return Ok(None);
    }
    log::trace!("Skipping header row: {:?}", header);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() != FIELD_COUNT {
            return Err(RosterError::FieldCount {
                line: record.position().map_or(0, |pos| pos.line()),
                expected: FIELD_COUNT,
                found: record.len(),
            });
        }
        rows.push(record.deserialize(None)?);
    }
    Ok(Some(rows))
}

/// Parses a roster from `source`, skipping its first row.
///
/// Returns `RosterError::EmptyInput` when the source holds no rows at all.
pub fn read_roster_from<R: Read>(source: R) -> Result<Vec<EmployeeRow>> {
    read_rows(source)?.ok_or(RosterError::EmptyInput)
}

pub fn read_roster(path: &Path) -> Result<Vec<EmployeeRow>> {
    let file = File::open(path).map_err(|error| {
        crate::roster_error!("Failed to open roster file {}: {error}", path.display())
    })?;
    let rows = read_rows(file)?.ok_or_else(|| RosterError::MissingHeader {
        path: path.to_path_buf(),
    })?;
    log::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
