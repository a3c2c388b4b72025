use crate::{constants::HEADER, core::employee::Employee, utils::util::Result};
use std::{fs::File, io::Write, path::Path};

fn csv_writer<W: Write>(destination: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(destination)
}

fn write_records<W: Write>(writer: &mut csv::Writer<W>, employees: &[Employee]) -> Result<()> {
    writer.write_record(HEADER)?;
    for employee in employees {
        writer.serialize(employee)?;
    }
    Ok(())
}

/// Writes the header row and one row per employee to `destination`.
///
/// The header is written even when `employees` is empty. Buffered rows are flushed
/// before returning.
pub fn write_roster_to<W: Write>(destination: W, employees: &[Employee]) -> Result<()> {
    let mut writer = csv_writer(destination);
    write_records(&mut writer, employees)?;
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) the roster file at `path` and writes `employees` to it.
///
/// The file is flushed and synced before the handle is dropped.
pub fn write_roster(path: &Path, employees: &[Employee]) -> Result<()> {
    let file = File::create(path).map_err(|error| {
        crate::roster_error!(
            "Failed to create roster file at {}: {}",
            path.display(),
            error
        )
    })?;
    let mut writer = csv_writer(file);
    write_records(&mut writer, employees)?;
    let file = writer.into_inner().map_err(|error| {
        crate::roster_error!(
            "Failed to flush roster file {}: {}",
            path.display(),
            error.error()
        )
    })?;
    file.sync_all()
        .map_err(|error| crate::roster_error!("Failed to sync {}: {error}", path.display()))?;
    log::debug!(
        "Wrote {} employees to {}",
        employees.len(),
        path.display()
    );
    Ok(())
}
