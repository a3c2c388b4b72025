use crate::{constants::REPORT_SEPARATOR, core::employee::EmployeeRow, utils::util::Result};
use std::io::{self, BufWriter, Write};

/// Writes one labelled block per row, each preceded by a separator line, and a closing
/// separator after the last block.
pub fn write_report<W: Write>(rows: &[EmployeeRow], out: &mut W) -> Result<()> {
    for row in rows {
        writeln!(out, "{REPORT_SEPARATOR}")?;
        writeln!(out, "Name: {}", row.name)?;
        writeln!(out, "Age: {}", row.age)?;
        writeln!(out, "Salary: {}", row.salary)?;
    }
    writeln!(out, "{REPORT_SEPARATOR}")?;
    Ok(())
}

pub fn print_report(rows: &[EmployeeRow]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(rows, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rows: &[EmployeeRow]) -> String {
        let mut buffer = Vec::new();
        write_report(rows, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_report_blocks() {
        let rows = vec![
            EmployeeRow::new("Abby Recker", "22", "33761.85"),
            EmployeeRow::new("Bethany Thompson", "29", "62497.36"),
        ];
        let expected = "\
-----------------------------
Name: Abby Recker
Age: 22
Salary: 33761.85
-----------------------------
Name: Bethany Thompson
Age: 29
Salary: 62497.36
-----------------------------
";
        assert_eq!(render(&rows), expected);
    }

    #[test]
    fn test_write_report_empty() {
        assert_eq!(render(&[]), "-----------------------------\n");
    }

    #[test]
    fn test_write_report_prints_fields_verbatim() {
        let rows = vec![EmployeeRow::new("Miller, Tobias", " 33", "n/a")];
        let output = render(&rows);
        assert!(output.contains("Name: Miller, Tobias\n"));
        assert!(output.contains("Age:  33\n"));
        assert!(output.contains("Salary: n/a\n"));
    }
}
