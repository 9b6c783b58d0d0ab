use config::Config;
use handle_errors::Error as CustomError;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub log_level: String,
    pub mongodb_uri: String,
    pub database_name: String,
    pub collection_name: String,
    pub genre: String,
    pub author: String,
    pub year_after: i32,
    pub price_title: String,
    pub new_price: f64,
    pub delete_title: String,
    pub page: u64,
    pub page_size: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            mongodb_uri: "mongodb://127.0.0.1:27017".to_string(),
            database_name: "libraryDB".to_string(),
            collection_name: "books".to_string(),
            genre: "Science Fiction".to_string(),
            author: "George Orwell".to_string(),
            year_after: 2010,
            price_title: "1984".to_string(),
            new_price: 19.99,
            delete_title: "The Great Gatsby".to_string(),
            page: 2,
            page_size: 5,
        }
    }
}

impl Settings {
    /// Layers the settings file at `path` (optional), `LIBRARY_*` variables
    /// and `MONGODB_URL` over the defaults.
    pub fn load(path: &str) -> Result<Self, CustomError> {
        let config = Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("LIBRARY").try_parsing(true))
            .set_override_option("mongodb_uri", env::var("MONGODB_URL").ok())?
            .build()?;
        let settings = config.try_deserialize::<Settings>()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        if self.page == 0 {
            return Err(CustomError::InvalidSetting {
                key: "page",
                reason: "pages are numbered from 1".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(CustomError::InvalidSetting {
                key: "page_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.database_name.is_empty() {
            return Err(CustomError::InvalidSetting {
                key: "database_name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.collection_name.is_empty() {
            return Err(CustomError::InvalidSetting {
                key: "collection_name",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Number of documents to skip before the configured page.
    pub fn page_offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Tracing filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> String {
        format!(
            "library_queries={},handle_errors={},mongodb=warn",
            self.log_level, self.log_level
        )
    }
}
