//! Incremental reader for the `{"object": ..., "data": [...]}` lead container.
//!
//! The container is walked with a serde visitor: keys other than `data` are
//! skipped as `IgnoredAny`, and each array element is decoded and handed to a
//! sink before the next one is read. Memory stays bounded by the largest
//! single lead.

use std::fmt;
use std::io::Read;

use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

use super::*;

const NO_DATA: &str = "container has no data array";

/// Feeds every lead of the container in `reader` to `sink`, in order.
/// Returns the number of leads the sink accepted. The first sink error stops
/// the read and is returned as-is; leads already passed to the sink stay
/// processed.
pub fn read_leads<R, F>(reader: R, mut sink: F) -> Result<usize, ExportError>
where
    R: Read,
    F: FnMut(Lead) -> Result<(), ExportError>,
{
    let mut de = serde_json::Deserializer::from_reader(reader);
    let mut failure = None;
    let outcome = Container {
        sink: &mut sink,
        failure: &mut failure,
    }
    .deserialize(&mut de)
    .and_then(|count| de.end().map(|()| count));

    if let Some(err) = failure {
        return Err(err);
    }
    outcome.map_err(|e| ExportError::Framing(e.to_string()))
}

struct Container<'a, F> {
    sink: &'a mut F,
    failure: &'a mut Option<ExportError>,
}

impl<'de, F> DeserializeSeed<'de> for Container<'_, F>
where
    F: FnMut(Lead) -> Result<(), ExportError>,
{
    type Value = usize;

    fn deserialize<D>(self, deserializer: D) -> Result<usize, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

impl<'de, F> Visitor<'de> for Container<'_, F>
where
    F: FnMut(Lead) -> Result<(), ExportError>,
{
    type Value = usize;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a lead container object")
    }

    fn visit_map<M>(self, mut access: M) -> Result<usize, M::Error>
    where
        M: MapAccess<'de>,
    {
        let Container { sink, failure } = self;
        let mut count = None;
        while let Some(key) = access.next_key::<String>()? {
            if key == "data" && count.is_none() {
                count = Some(access.next_value_seed(LeadArray {
                    sink: &mut *sink,
                    failure: &mut *failure,
                })?);
            } else {
                tracing::trace!(key = %key, "skipping container key");
                access.next_value::<IgnoredAny>()?;
            }
        }
        match count {
            Some(count) => Ok(count),
            None => {
                *failure = Some(ExportError::Framing(NO_DATA.to_string()));
                Err(de::Error::custom(NO_DATA))
            }
        }
    }
}

struct LeadArray<'a, F> {
    sink: &'a mut F,
    failure: &'a mut Option<ExportError>,
}

impl<'de, F> DeserializeSeed<'de> for LeadArray<'_, F>
where
    F: FnMut(Lead) -> Result<(), ExportError>,
{
    type Value = usize;

    fn deserialize<D>(self, deserializer: D) -> Result<usize, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(self)
    }
}

impl<'de, F> Visitor<'de> for LeadArray<'_, F>
where
    F: FnMut(Lead) -> Result<(), ExportError>,
{
    type Value = usize;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an array of leads")
    }

    fn visit_seq<S>(self, mut seq: S) -> Result<usize, S::Error>
    where
        S: SeqAccess<'de>,
    {
        let LeadArray { sink, failure } = self;
        let mut count = 0usize;
        while let Some(lead) = seq.next_element::<Lead>()? {
            if let Err(err) = sink(lead) {
                *failure = Some(err);
                return Err(de::Error::custom("lead sink failed"));
            }
            count += 1;
        }
        Ok(count)
    }
}
