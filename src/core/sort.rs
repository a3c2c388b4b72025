use crate::core::employee::EmployeeRow;

/// Sorts rows by the full name field, ascending, comparing bytes.
///
/// First and last names are not split; "Mike Smith" sorts after "Mike Adams" only because
/// the whole strings compare that way.
pub fn sort_rows(rows: &mut [EmployeeRow]) {
    rows.sort_by(|a, b| a.name.cmp(&b.name));
}
