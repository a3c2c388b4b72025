pub const DEFAULT_OUTPUT_PATH: &str = "employees.csv";

pub const HEADER: [&str; 3] = ["Name", "Age", "Salary"];
pub const FIELD_COUNT: usize = HEADER.len();

pub const REPORT_SEPARATOR: &str = "-----------------------------";
