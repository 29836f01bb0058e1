//! Synthetic record generation.
//!
//! Each record is uniformly chosen among three Redis value types: a hash, a
//! RedisJSON document, or a plain string. Hash and JSON records carry 1-10
//! fields named by position; every generated string is 1-20 ASCII letters.

use indicatif::ProgressBar;
use rand::RngExt;
use std::fmt;

use crate::utils::random_letters;

/// Max number of fields in a synthetic hash/JSON record.
pub const MAX_FIELDS: usize = 10;
/// Max length of a generated field value or string record.
pub const MAX_FIELD_LEN: usize = 20;

/// A synthetic record, tagged by the Redis value type it will be stored as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthRecord {
    Hash(Vec<(String, String)>),
    Json(Vec<(String, String)>),
    Str(String),
}

impl SynthRecord {
    /// The type label Redis reports for this record via TYPE.
    pub fn type_label(&self) -> &'static str {
        match self {
            SynthRecord::Hash(_) => "hash",
            SynthRecord::Json(_) => "ReJSON-RL",
            SynthRecord::Str(_) => "string",
        }
    }
}

/// Counts of generated records per type variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub hash: u64,
    pub json: u64,
    pub string: u64,
}

impl Tally {
    pub fn record(&mut self, record: &SynthRecord) {
        match record {
            SynthRecord::Hash(_) => self.hash += 1,
            SynthRecord::Json(_) => self.json += 1,
            SynthRecord::Str(_) => self.string += 1,
        }
    }

    pub fn sum(&self) -> u64 {
        self.hash + self.json + self.string
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hash: {} ReJSON-RL: {} string: {}",
            self.hash, self.json, self.string
        )
    }
}

fn random_fields(rng: &mut impl RngExt) -> Vec<(String, String)> {
    (0..rng.random_range(1..=MAX_FIELDS))
        .map(|i| {
            let value = random_letters(rng.random_range(1..=MAX_FIELD_LEN), rng);
            (format!("field{i}"), value)
        })
        .collect()
}

/// Generate exactly `n` synthetic records under keys `key:0` .. `key:{n-1}`,
/// picking the type variant uniformly per record.
///
/// Re-running against a non-empty keyspace overwrites prior keys with the
/// same indices; the strictly increasing suffix is the only collision guard.
pub fn generate_records(
    n: u64,
    rng: &mut impl RngExt,
    pb: &ProgressBar,
) -> (Vec<(String, SynthRecord)>, Tally) {
    let mut records = Vec::with_capacity(n as usize);
    let mut tally = Tally::default();

    for i in 0..n {
        let record = match rng.random_range(0..3) {
            0 => SynthRecord::Hash(random_fields(rng)),
            1 => SynthRecord::Json(random_fields(rng)),
            _ => SynthRecord::Str(random_letters(rng.random_range(1..=MAX_FIELD_LEN), rng)),
        };
        tally.record(&record);
        records.push((format!("key:{i}"), record));
        pb.inc(1);
        pb.set_message(tally.to_string());
    }

    (records, tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generate(n: u64, seed: u64) -> (Vec<(String, SynthRecord)>, Tally) {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_records(n, &mut rng, &ProgressBar::hidden())
    }

    #[test]
    fn produces_exactly_n_records_and_tally_sums_to_n() {
        for n in [0, 1, 30, 257] {
            let (records, tally) = generate(n, 42);
            assert_eq!(records.len() as u64, n);
            assert_eq!(tally.sum(), n);
        }
    }

    #[test]
    fn keys_use_increasing_index_suffix() {
        let (records, _) = generate(30, 7);
        for (i, (key, _)) in records.iter().enumerate() {
            assert_eq!(key, &format!("key:{i}"));
        }
    }

    #[test]
    fn field_counts_and_string_lengths_stay_in_bounds() {
        let (records, _) = generate(500, 9);
        for (_, record) in &records {
            match record {
                SynthRecord::Hash(fields) | SynthRecord::Json(fields) => {
                    assert!((1..=MAX_FIELDS).contains(&fields.len()));
                    for (name, value) in fields {
                        assert!(name.starts_with("field"));
                        assert!((1..=MAX_FIELD_LEN).contains(&value.len()));
                        assert!(value.chars().all(|c| c.is_ascii_alphabetic()));
                    }
                }
                SynthRecord::Str(s) => {
                    assert!((1..=MAX_FIELD_LEN).contains(&s.len()));
                    assert!(s.chars().all(|c| c.is_ascii_alphabetic()));
                }
            }
        }
    }

    #[test]
    fn tally_matches_record_variants() {
        let (records, tally) = generate(200, 3);
        let hashes = records
            .iter()
            .filter(|(_, r)| matches!(r, SynthRecord::Hash(_)))
            .count() as u64;
        let jsons = records
            .iter()
            .filter(|(_, r)| matches!(r, SynthRecord::Json(_)))
            .count() as u64;
        let strings = records
            .iter()
            .filter(|(_, r)| matches!(r, SynthRecord::Str(_)))
            .count() as u64;
        assert_eq!((tally.hash, tally.json, tally.string), (hashes, jsons, strings));
    }
}
