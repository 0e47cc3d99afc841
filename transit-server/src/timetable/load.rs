//! CSV timetable loading.
//!
//! Reads the GTFS-style feed the server is pointed at: `stops.txt`,
//! `stop_times.txt` and (optionally) `transfers.txt`. Rows are collected
//! into a [`TimetableBuilder`], which owns invariant validation.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{Stop, StopId, TimeError, TimeOfDay};

use super::{TimetableBuilder, TimetableError, TimetableIndex};

/// Error produced while loading a timetable from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A feed file could not be opened.
    #[error("failed to open {name}: {source}")]
    Open {
        name: &'static str,
        source: std::io::Error,
    },

    /// A feed file could not be parsed as CSV.
    #[error("malformed {name}: {source}")]
    Csv {
        name: &'static str,
        source: csv::Error,
    },

    /// A time field was malformed or past the end of the service day.
    #[error("bad time in {name}: {source}")]
    Time {
        name: &'static str,
        source: TimeError,
    },

    /// The assembled feed violates a timetable invariant.
    #[error(transparent)]
    Invalid(#[from] TimetableError),
}

#[derive(Debug, Deserialize)]
struct StopRecord {
    stop_id: u32,
    stop_name: String,
    stop_lat: f64,
    stop_lon: f64,
}

#[derive(Debug, Deserialize)]
struct StopTimeRecord {
    trip_id: String,
    arrival_time: String,
    departure_time: String,
    stop_id: u32,
    stop_sequence: u32,
}

#[derive(Debug, Deserialize)]
struct TransferRecord {
    from_stop_id: u32,
    to_stop_id: u32,
    min_transfer_time: u32,
}

fn read_rows<T: serde::de::DeserializeOwned>(
    dir: &Path,
    name: &'static str,
) -> Result<Vec<T>, LoadError> {
    let file =
        std::fs::File::open(dir.join(name)).map_err(|source| LoadError::Open { name, source })?;

    csv::Reader::from_reader(file)
        .into_deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| LoadError::Csv { name, source })
}

fn parse_time(value: &str, name: &'static str) -> Result<TimeOfDay, LoadError> {
    TimeOfDay::parse(value).map_err(|source| LoadError::Time { name, source })
}

/// Load a timetable from a directory of feed files.
///
/// `stops.txt` and `stop_times.txt` are required; `transfers.txt` is
/// optional (not every network publishes one).
///
/// # Errors
///
/// Returns a [`LoadError`] for unreadable or malformed files, bad time
/// fields, or a feed that violates the timetable invariants.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<TimetableIndex, LoadError> {
    let dir = dir.as_ref();
    let mut builder = TimetableBuilder::new();

    for record in read_rows::<StopRecord>(dir, "stops.txt")? {
        builder = builder.stop(Stop::new(
            StopId(record.stop_id),
            record.stop_name,
            record.stop_lat,
            record.stop_lon,
        ));
    }

    for record in read_rows::<StopTimeRecord>(dir, "stop_times.txt")? {
        let arrival = parse_time(&record.arrival_time, "stop_times.txt")?;
        let departure = parse_time(&record.departure_time, "stop_times.txt")?;
        builder = builder.visit(
            record.trip_id.as_str(),
            StopId(record.stop_id),
            arrival,
            departure,
            record.stop_sequence,
        );
    }

    if dir.join("transfers.txt").exists() {
        for record in read_rows::<TransferRecord>(dir, "transfers.txt")? {
            builder = builder.transfer(
                StopId(record.from_stop_id),
                StopId(record.to_stop_id),
                record.min_transfer_time,
            );
        }
    }

    Ok(builder.build()?)
}
