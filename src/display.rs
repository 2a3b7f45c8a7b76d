//! Rendering of accounts for the terminal and for CSV export.

use crate::error::Result;
use crate::field::Field;
use crate::record::Record;
use crate::sort::SortedBy;
use std::io::Write;
use std::str::FromStr;

pub const HORIZONTAL_LINE: &str = "─────────────────────────────────────────────";

/// Label column of the account block, in display order.
const ACCOUNT_LINES: [(&str, Field); 9] = [
    ("Full name:      ", Field::FullName),
    ("Account number: ", Field::AccountNumber),
    ("Created at:     ", Field::AccountCreationDate),
    ("Balance:        ", Field::Balance),
    ("Gender:         ", Field::Gender),
    ("City:           ", Field::City),
    ("Phone:          ", Field::PhoneNumber),
    ("Age:            ", Field::Age),
    ("Country:        ", Field::Country),
];

fn cell(record: &Record, field: Field) -> String {
    record
        .get(field.as_str())
        .map(|value| value.to_string())
        .unwrap_or_default()
}

/// Writes one account as a labelled block. Missing fields render empty.
pub fn write_account<W: Write>(mut writer: W, record: &Record) -> Result<()> {
    writeln!(writer, "{}", HORIZONTAL_LINE)?;
    for (label, field) in ACCOUNT_LINES {
        writeln!(writer, "{}{}", label, cell(record, field))?;
    }
    Ok(())
}

/// Writes every account of `sorted` in order, then a footer naming the sort
/// field.
pub fn write_listing<W: Write>(mut writer: W, sorted: &SortedBy) -> Result<()> {
    for record in sorted.sequence() {
        write_account(&mut writer, record)?;
    }

    let label = Field::from_str(sorted.field())
        .map(Field::label)
        .unwrap_or("Unknown");
    writeln!(writer)?;
    writeln!(writer, "Sorted by {}", label)?;
    Ok(())
}

/// Writes `sorted` as CSV with one column per known field.
pub fn write_csv<W: Write>(writer: W, sorted: &SortedBy) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(Field::ALL.iter().map(|f| f.as_str()))?;

    for record in sorted.sequence() {
        csv_writer.write_record(Field::ALL.iter().map(|f| cell(record, *f)))?;
    }

    csv_writer.flush()?;
    Ok(())
}
