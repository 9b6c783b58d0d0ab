//! The catalog of operations run against the books collection.
//!
//! Every operation is a [`Step`]: a stable name, the label printed next to its
//! result, and a [`Request`] describing exactly one store call. The blocks
//! below are concatenated by [`catalog`] in the order they must run.

pub mod advanced;
pub mod aggregation;
pub mod crud;
pub mod indexing;

use crate::settings::Settings;
use crate::store::{BookStore, FindQuery};
use crate::types::outcome::Outcome;
use handle_errors::Error as CustomError;
use mongodb::bson::Document;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    FindDocuments(FindQuery),
    UpdateOne { filter: Document, update: Document },
    DeleteOne { filter: Document },
    Aggregate(Vec<Document>),
    CreateIndex { keys: Document },
    Explain { filter: Document, verbosity: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub name: &'static str,
    pub label: String,
    pub request: Request,
}

impl Step {
    pub fn new(name: &'static str, label: impl Into<String>, request: Request) -> Self {
        Self {
            name,
            label: label.into(),
            request,
        }
    }

    #[instrument(skip(self, store), fields(step = self.name))]
    pub async fn execute<S: BookStore>(&self, store: &S) -> Result<Outcome, CustomError> {
        let outcome = match &self.request {
            Request::FindDocuments(query) => Outcome::Documents(store.find_documents(query).await?),
            Request::UpdateOne { filter, update } => {
                Outcome::Updated(store.update_one(filter.clone(), update.clone()).await?)
            }
            Request::DeleteOne { filter } => Outcome::Deleted(store.delete_one(filter.clone()).await?),
            Request::Aggregate(pipeline) => Outcome::Documents(store.aggregate(pipeline.clone()).await?),
            Request::CreateIndex { keys } => {
                Outcome::IndexCreated(store.create_index(keys.clone()).await?)
            }
            Request::Explain { filter, verbosity } => {
                Outcome::ExecutionStats(store.explain(filter.clone(), verbosity).await?)
            }
        };
        Ok(outcome)
    }
}

/// All steps, in the order they run.
pub fn catalog(settings: &Settings) -> Vec<Step> {
    let mut steps = crud::steps(settings);
    steps.extend(advanced::steps(settings));
    steps.extend(aggregation::steps());
    steps.extend(indexing::steps(settings));
    steps
}

/// Keeps only the named steps, preserving catalog order.
pub fn select(steps: Vec<Step>, names: &[String]) -> Result<Vec<Step>, CustomError> {
    if names.is_empty() {
        return Ok(steps);
    }
    if let Some(unknown) = names
        .iter()
        .find(|name| !steps.iter().any(|step| step.name == name.as_str()))
    {
        return Err(CustomError::InvalidSetting {
            key: "step",
            reason: format!("no step named `{}`", unknown),
        });
    }
    Ok(steps
        .into_iter()
        .filter(|step| names.iter().any(|name| name == step.name))
        .collect())
}
