//! Lead export: container framing, value checks and per-format writers.

use std::io::{BufReader, Read, Write};

use serde::Serialize;

use crate::error::ErrorKind;
use crate::model::Lead;
use crate::remote::{ApiError, RemoteClient};

mod csv_rows;
mod framing;

pub use self::csv_rows::{ColumnOrder, check_data_values, scalar_cell};
pub use self::framing::read_leads;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Csv,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("unsupported type detected (key={key} value={value})")]
    UnsupportedValue { key: String, value: String },

    #[error("malformed lead stream: {0}")]
    Framing(String),

    #[error("failed to write lead json")]
    Json(#[from] serde_json::Error),

    #[error("failed to write yaml")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to write csv")]
    Csv(#[from] csv::Error),

    #[error("export i/o failed")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ExportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExportError::UnsupportedValue { .. } | ExportError::Framing(_) | ExportError::Json(_) => {
                ErrorKind::MalformedInput
            }
            ExportError::Yaml(_) | ExportError::Csv(_) | ExportError::Io(_) => ErrorKind::Io,
            ExportError::Api(e) => e.kind(),
        }
    }
}

/// Streams every lead of a bucket to `out`. Returns the number written.
pub fn export_bucket_leads<W: Write>(
    client: &RemoteClient,
    bucket_id: &str,
    format: ExportFormat,
    out: W,
) -> Result<usize, ExportError> {
    let body = client.stream_leads(bucket_id)?;
    export_leads(format, body, out)
}

/// Re-encodes a lead container read from `input`. Records already written
/// stay written if a later record fails.
pub fn export_leads<R: Read, W: Write>(
    format: ExportFormat,
    input: R,
    mut out: W,
) -> Result<usize, ExportError> {
    let input = BufReader::new(input);
    let count = match format {
        ExportFormat::Json => read_leads(input, |lead| {
            check_data_values(&lead)?;
            serde_json::to_writer(&mut out, &lead)?;
            out.write_all(b"\n")?;
            Ok(())
        })?,
        ExportFormat::Yaml => {
            let mut ser = serde_yaml::Serializer::new(&mut out);
            let count = read_leads(input, |lead| {
                check_data_values(&lead)?;
                lead.serialize(&mut ser)?;
                Ok(())
            })?;
            ser.into_inner()?;
            count
        }
        ExportFormat::Csv => {
            let mut wtr = csv::WriterBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_writer(&mut out);
            let mut columns = ColumnOrder::default();
            let count = read_leads(input, |lead| {
                wtr.write_record(&columns.row(&lead)?)?;
                Ok(())
            })?;
            wtr.flush()?;
            count
        }
    };

    out.flush()?;
    tracing::debug!(count, ?format, "exported leads");
    Ok(count)
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
