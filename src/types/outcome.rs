use mongodb::bson::{Bson, Document};
use std::fmt;

/// Counts reported by a single-document update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateCounts {
    pub matched: u64,
    pub modified: u64,
}

/// What a catalog step produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Documents(Vec<Document>),
    Updated(UpdateCounts),
    Deleted(u64),
    IndexCreated(String),
    ExecutionStats(Document),
}

impl Outcome {
    pub fn documents(&self) -> Option<&[Document]> {
        match self {
            Outcome::Documents(docs) => Some(docs),
            _ => None,
        }
    }
}

fn write_json(f: &mut fmt::Formatter<'_>, value: &serde_json::Value) -> fmt::Result {
    let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
    write!(f, "{}", pretty)
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Documents(docs) => {
                let array = Bson::Array(docs.iter().cloned().map(Bson::Document).collect());
                write_json(f, &array.into_relaxed_extjson())
            }
            Outcome::Updated(counts) => write!(f, "{}", counts.modified),
            Outcome::Deleted(count) => write!(f, "{}", count),
            Outcome::IndexCreated(name) => write!(f, "{}", name),
            Outcome::ExecutionStats(stats) => {
                write_json(f, &Bson::Document(stats.clone()).into_relaxed_extjson())
            }
        }
    }
}
