use serde_json::Value;
use time::format_description::well_known::Rfc3339;

use super::*;

/// Data keys in first-seen order across the whole export. Rows only grow:
/// a key first seen in a later lead never appears in earlier rows.
#[derive(Debug, Default)]
pub struct ColumnOrder {
    keys: Vec<String>,
}

impl ColumnOrder {
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// `[leadId, data fields..., clientVersion, host, referrer, userAgent, created]`
    pub fn row(&mut self, lead: &Lead) -> Result<Vec<String>, ExportError> {
        for key in lead.data.keys() {
            if !self.keys.iter().any(|k| k == key) {
                self.keys.push(key.clone());
            }
        }

        let mut record = Vec::with_capacity(self.keys.len() + 6);
        record.push(lead.lead_id.clone());
        for key in &self.keys {
            match lead.data.get(key) {
                Some(value) => record.push(scalar_cell(key, value)?),
                None => record.push(String::new()),
            }
        }

        let sys = &lead.system;
        let created = sys
            .created
            .format(&Rfc3339)
            .map_err(|e| ExportError::Framing(format!("failed to format created time: {}", e)))?;
        record.extend([
            sys.client_version.clone(),
            sys.host.clone(),
            sys.referrer.clone(),
            sys.user_agent.clone(),
            created,
        ]);
        Ok(record)
    }
}

/// Renders a string, bool, integer or float. Anything else is rejected.
pub fn scalar_cell(key: &str, value: &Value) -> Result<String, ExportError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Ok(u.to_string())
            } else {
                Ok(n.as_f64().unwrap_or_default().to_string())
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => Err(ExportError::UnsupportedValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Rejects leads whose `data` map holds a value outside the supported types.
pub fn check_data_values(lead: &Lead) -> Result<(), ExportError> {
    for (key, value) in &lead.data {
        scalar_cell(key, value)?;
    }
    Ok(())
}
