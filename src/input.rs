//! Textual process list parser.
//!
//! Format: records separated by `;`, fields by `,`, four integers per
//! record in the order `id,arrival,burst,priority`.
//!
//! ```text
//! 1,0,5,2;2,1,3,1;3,2,8,4
//! ```
//!
//! Whitespace around records and fields is ignored, as is an empty record
//! after a trailing `;`. Semantic checks (positive burst, time range) are
//! left to [`crate::validation`].

use crate::error::{Result, ScheduleError};
use crate::models::Process;

const FIELDS: [&str; 4] = ["id", "arrival", "burst", "priority"];

/// Parses a process list.
pub fn parse_processes(input: &str) -> Result<Vec<Process>> {
    let mut records: Vec<&str> = input.split(';').map(str::trim).collect();
    if records.last().is_some_and(|r| r.is_empty()) {
        records.pop();
    }

    if records.iter().all(|r| r.is_empty()) {
        return Err(ScheduleError::EmptyInput);
    }

    records
        .iter()
        .enumerate()
        .map(|(i, record)| parse_record(i + 1, record))
        .collect()
}

/// Parses one `id,arrival,burst,priority` record. `position` is 1-based.
pub fn parse_record(position: usize, record: &str) -> Result<Process> {
    if record.is_empty() {
        return Err(ScheduleError::malformed(position, "empty record"));
    }

    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    if fields.len() != FIELDS.len() {
        return Err(ScheduleError::malformed(
            position,
            format!("expected 4 fields (id,arrival,burst,priority), found {}", fields.len()),
        ));
    }

    let mut values = [0i64; 4];
    for (slot, (name, raw)) in values.iter_mut().zip(FIELDS.iter().zip(&fields)) {
        if raw.is_empty() {
            return Err(ScheduleError::malformed(position, format!("missing field '{name}'")));
        }
        *slot = raw.parse().map_err(|_| {
            ScheduleError::malformed(position, format!("field '{name}' is not an integer: '{raw}'"))
        })?;
    }

    let [id, arrival, burst, priority] = values;
    Ok(Process::new(
        narrow(position, "id", id)?,
        arrival,
        burst,
        narrow(position, "priority", priority)?,
    ))
}

fn narrow(position: usize, name: &str, value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| {
        ScheduleError::malformed(position, format!("field '{name}' out of range: {value}"))
    })
}
