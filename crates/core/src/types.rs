/// All CRM primary keys are SQLite `INTEGER PRIMARY KEY AUTOINCREMENT`.
pub type DbId = i64;

/// Calendar dates are stored as ISO-8601 `YYYY-MM-DD` text.
pub type Date = chrono::NaiveDate;
