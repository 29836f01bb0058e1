use anyhow::{Context, Result};
use redis::Connection;

use crate::scan::Keyspace;
use crate::synth::SynthRecord;

/// Open a blocking connection from a Redis URL.
pub fn connect(url: &str) -> Result<Connection> {
    let client = redis::Client::open(url).with_context(|| format!("invalid Redis URL: {url}"))?;
    client
        .get_connection()
        .with_context(|| format!("failed to connect to {url}"))
}

/// Submit all synthetic records in a single non-transactional pipeline.
///
/// One HSET / JSON.SET / SET per record; a transmission failure aborts the
/// whole batch with no partial-success reporting.
pub fn submit_batch(con: &mut Connection, records: &[(String, SynthRecord)]) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let mut pipe = redis::pipe();
    for (key, record) in records {
        match record {
            SynthRecord::Hash(fields) => {
                pipe.cmd("HSET").arg(key);
                for (field, value) in fields {
                    pipe.arg(field).arg(value);
                }
                pipe.ignore();
            }
            SynthRecord::Json(fields) => {
                pipe.cmd("JSON.SET")
                    .arg(key)
                    .arg("$")
                    .arg(json_payload(fields))
                    .ignore();
            }
            SynthRecord::Str(value) => {
                pipe.cmd("SET").arg(key).arg(value).ignore();
            }
        }
    }

    pipe.query::<()>(con)
        .context("pipelined write of synthetic records failed")?;
    Ok(())
}

fn json_payload(fields: &[(String, String)]) -> String {
    let obj: serde_json::Map<String, serde_json::Value> = fields
        .iter()
        .map(|(f, v)| (f.clone(), serde_json::Value::String(v.clone())))
        .collect();
    serde_json::Value::Object(obj).to_string()
}

impl Keyspace for Connection {
    fn scan_page(&mut self, cursor: u64, count: u64) -> Result<(u64, Vec<String>)> {
        Ok(redis::cmd("SCAN")
            .arg(cursor)
            .arg("COUNT")
            .arg(count)
            .query(self)?)
    }

    fn key_type(&mut self, key: &str) -> Result<String> {
        Ok(redis::cmd("TYPE").arg(key).query(self)?)
    }

    // MEMORY USAGE returns nil for a key that vanished after SCAN listed it
    fn memory_usage(&mut self, key: &str) -> Result<Option<u64>> {
        Ok(redis::cmd("MEMORY").arg("USAGE").arg(key).query(self)?)
    }
}
