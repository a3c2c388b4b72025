pub mod cli;
pub mod commands;
pub mod error;
pub mod report;

pub mod core {
    pub mod employee;
    pub mod sort;
}

pub mod io {
    pub mod roster_reader;
    pub mod roster_writer;
}

pub mod utils {
    pub mod util;
}

pub mod constants;

pub use constants::*;
