//! Constants the report is built from.

/// Path of the attendance log, relative to the working directory.
pub const CSV_FILE: &str = "./overtime.csv";

/// Field delimiter of the attendance log.
pub const CSV_SEP: u8 = b',';

/// Format of a record's date and time joined by a single space.
pub const DATETIME_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Standard working hours per day; time beyond this is overtime.
pub const WORKING_HOURS: i64 = 9;

/// Column holding the date (`MM/DD/YYYY`).
pub const DATE_COLUMN: usize = 0;

/// Column holding the entry time (`HH:MM`).
pub const ENTRY_COLUMN: usize = 1;

/// Column holding the exit time (`HH:MM`).
pub const EXIT_COLUMN: usize = 2;
