use crate::settings::Settings;
use crate::types::outcome::UpdateCounts;
use futures::TryStreamExt;
use handle_errors::Error as CustomError;
use mongodb::bson::{Document, doc};
use mongodb::options::FindOptions;
use mongodb::{Client, Collection, Database, IndexModel};

/// A find request: filter plus the cursor modifiers the catalog uses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindQuery {
    pub filter: Document,
    pub projection: Option<Document>,
    pub sort: Option<Document>,
    pub skip: Option<u64>,
    pub limit: Option<i64>,
}

impl FindQuery {
    pub fn new(filter: Document) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn projection(mut self, projection: Document) -> Self {
        self.projection = Some(projection);
        self
    }

    pub fn sort(mut self, sort: Document) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    fn options(&self) -> FindOptions {
        let mut options = FindOptions::default();
        options.projection = self.projection.clone();
        options.sort = self.sort.clone();
        options.skip = self.skip;
        options.limit = self.limit;
        options
    }
}

/// The calls the catalog makes against the books collection.
#[allow(async_fn_in_trait)]
pub trait BookStore {
    async fn ping(&self) -> Result<(), CustomError>;
    async fn find_documents(&self, query: &FindQuery) -> Result<Vec<Document>, CustomError>;
    async fn update_one(
        &self,
        filter: Document,
        update: Document,
    ) -> Result<UpdateCounts, CustomError>;
    async fn delete_one(&self, filter: Document) -> Result<u64, CustomError>;
    async fn aggregate(&self, pipeline: Vec<Document>) -> Result<Vec<Document>, CustomError>;
    /// Returns the index name. Creating an index that already exists is a no-op.
    async fn create_index(&self, keys: Document) -> Result<String, CustomError>;
    /// Runs `filter` as a find in explain mode and returns its execution statistics.
    async fn explain(&self, filter: Document, verbosity: &str) -> Result<Document, CustomError>;
    /// Releases the connection. Consumes the store so it happens once.
    async fn close(self);
}

#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    db: Database,
    books: Collection<Document>,
}

impl MongoStore {
    pub async fn new(settings: &Settings) -> Result<Self, CustomError> {
        let client = Client::with_uri_str(&settings.mongodb_uri)
            .await
            .map_err(CustomError::Connection)?;
        let db = client.database(&settings.database_name);
        let books = db.collection::<Document>(&settings.collection_name);

        Ok(Self { client, db, books })
    }
}

impl BookStore for MongoStore {
    async fn ping(&self) -> Result<(), CustomError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(CustomError::Connection)?;
        Ok(())
    }

    async fn find_documents(&self, query: &FindQuery) -> Result<Vec<Document>, CustomError> {
        let cursor = self
            .books
            .find(query.filter.clone())
            .with_options(query.options())
            .await
            .map_err(CustomError::DbError)?;
        cursor.try_collect().await.map_err(CustomError::DbError)
    }

    async fn update_one(
        &self,
        filter: Document,
        update: Document,
    ) -> Result<UpdateCounts, CustomError> {
        let result = self
            .books
            .update_one(filter, update)
            .await
            .map_err(CustomError::DbError)?;
        Ok(UpdateCounts {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete_one(&self, filter: Document) -> Result<u64, CustomError> {
        let result = self
            .books
            .delete_one(filter)
            .await
            .map_err(CustomError::DbError)?;
        Ok(result.deleted_count)
    }

    async fn aggregate(&self, pipeline: Vec<Document>) -> Result<Vec<Document>, CustomError> {
        let cursor = self
            .books
            .aggregate(pipeline)
            .await
            .map_err(CustomError::DbError)?;
        cursor.try_collect().await.map_err(CustomError::DbError)
    }

    async fn create_index(&self, keys: Document) -> Result<String, CustomError> {
        let index = IndexModel::builder().keys(keys).build();
        let result = self
            .books
            .create_index(index)
            .await
            .map_err(CustomError::DbError)?;
        Ok(result.index_name)
    }

    async fn explain(&self, filter: Document, verbosity: &str) -> Result<Document, CustomError> {
        let reply = self
            .db
            .run_command(explain_command(self.books.name(), filter, verbosity))
            .await
            .map_err(CustomError::DbError)?;
        execution_stats(&reply, verbosity)
    }

    async fn close(self) {
        self.client.shutdown().await;
    }
}

fn explain_command(collection: &str, filter: Document, verbosity: &str) -> Document {
    doc! {
        "explain": { "find": collection, "filter": filter },
        "verbosity": verbosity,
    }
}

fn execution_stats(reply: &Document, verbosity: &str) -> Result<Document, CustomError> {
    match reply.get_document("executionStats") {
        Ok(stats) => Ok(stats.clone()),
        Err(_) => Err(CustomError::Rejected(format!(
            "explain reply has no executionStats for verbosity `{}`",
            verbosity
        ))),
    }
}
