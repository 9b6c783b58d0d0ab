use super::{Request, Step};
use crate::settings::Settings;
use mongodb::bson::doc;

pub const EXECUTION_STATS: &str = "executionStats";

pub fn steps(settings: &Settings) -> Vec<Step> {
    vec![
        Step::new(
            "title_index",
            "Index created on title",
            Request::CreateIndex {
                keys: doc! { "title": 1 },
            },
        ),
        Step::new(
            "author_year_index",
            "Compound index created",
            Request::CreateIndex {
                keys: doc! { "author": 1, "published_year": -1 },
            },
        ),
        Step::new(
            "explain_title_query",
            format!("Explain for title query ({})", settings.price_title),
            Request::Explain {
                filter: doc! { "title": &settings.price_title },
                verbosity: EXECUTION_STATS,
            },
        ),
    ]
}
