use crate::{
    cli::Cli,
    core::{
        employee::{sample_employees, Employee, EmployeeRow},
        sort::sort_rows,
    },
    io::{roster_reader::read_roster, roster_writer::write_roster},
    report::print_report,
    utils::util::Result,
};
use std::path::Path;


/// Writes `employees` to `path`, reads the file back and returns its rows sorted by name.
pub fn sorted_roster(path: &Path, employees: &[Employee]) -> Result<Vec<EmployeeRow>> {
    write_roster(path, employees)?;
    log::info!("Wrote roster to {}", path.display());

    let mut rows = read_roster(path)?;
    if rows.len() != employees.len() {
        log::warn!(
            "Read {} rows back from {} but wrote {}",
            rows.len(),
            path.display(),
            employees.len()
        );
    }

    sort_rows(&mut rows);
    log::debug!("Sorted {} rows by name", rows.len());
    Ok(rows)
}

pub fn roster(args: &Cli) -> Result<()> {
    let employees = sample_employees();
    log::debug!("Loaded {} sample employees", employees.len());
    let rows = sorted_roster(&args.output, &employees)?;
    print_report(&rows)?;
    Ok(())
}
