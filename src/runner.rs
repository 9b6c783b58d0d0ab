use crate::queries::Step;
use crate::settings::Settings;
use crate::store::{BookStore, MongoStore};
use crate::types::outcome::Outcome;
use handle_errors::{Error as CustomError, report_error};
use tracing::info;

/// Runs `steps` in order, handing each outcome to `on_outcome`.
/// The first failing step stops the run.
pub async fn run_steps<S, F>(store: &S, steps: &[Step], mut on_outcome: F) -> Result<(), CustomError>
where
    S: BookStore,
    F: FnMut(&Step, &Outcome),
{
    for step in steps {
        let outcome = step
            .execute(store)
            .await
            .map_err(|e| CustomError::step_failed(step.name, e))?;
        info!(step = step.name, "step completed");
        on_outcome(step, &outcome);
    }
    Ok(())
}

pub fn print_outcome(step: &Step, outcome: &Outcome) {
    println!("{}: {}", step.label, outcome);
}

#[derive(Debug, Clone)]
pub struct LibraryQueryRunner {
    settings: Settings,
    steps: Vec<Step>,
}

impl LibraryQueryRunner {
    pub fn new(settings: Settings, steps: Vec<Step>) -> Self {
        Self { settings, steps }
    }

    /// Connects to the configured MongoDB deployment and runs every step.
    /// Failures are logged, never returned.
    pub async fn run(&self) {
        let store = match MongoStore::new(&self.settings).await {
            Ok(store) => store,
            Err(e) => {
                report_error(&e);
                return;
            }
        };
        // Already reported by run_with.
        self.run_with(store).await.ok();
    }

    /// Runs the steps against `store`, reports a failure once and always
    /// closes the store before returning.
    pub async fn run_with<S: BookStore>(&self, store: S) -> Result<(), CustomError> {
        let result = self.drive(&store).await;
        if let Err(e) = &result {
            report_error(e);
        }
        store.close().await;
        info!("connection closed");
        println!("Connection closed");
        result
    }

    async fn drive<S: BookStore>(&self, store: &S) -> Result<(), CustomError> {
        store.ping().await?;
        info!(
            database = %self.settings.database_name,
            collection = %self.settings.collection_name,
            "connected"
        );
        println!("Connected to MongoDB");
        run_steps(store, &self.steps, print_outcome).await
    }
}
