pub mod queries;
pub mod runner;
pub mod settings;
pub mod store;
pub mod types;

pub use queries::{Request, Step, catalog};
pub use runner::{LibraryQueryRunner, run_steps};
pub use settings::Settings;
pub use store::{BookStore, FindQuery, MongoStore};
pub use types::book::Book;
pub use types::outcome::{Outcome, UpdateCounts};
