use super::{Request, Step};
use crate::settings::Settings;
use crate::store::FindQuery;
use mongodb::bson::doc;

pub fn steps(settings: &Settings) -> Vec<Step> {
    let limit = i64::try_from(settings.page_size).unwrap_or(i64::MAX);

    vec![
        Step::new(
            "in_stock_after_year",
            format!("Books in stock and published after {}", settings.year_after),
            Request::FindDocuments(FindQuery::new(doc! {
                "in_stock": true,
                "published_year": { "$gt": settings.year_after },
            })),
        ),
        Step::new(
            "projection",
            "Projected books",
            Request::FindDocuments(
                FindQuery::default()
                    .projection(doc! { "title": 1, "author": 1, "price": 1, "_id": 0 }),
            ),
        ),
        Step::new(
            "price_ascending",
            "Books sorted by price (asc)",
            Request::FindDocuments(FindQuery::default().sort(doc! { "price": 1 })),
        ),
        Step::new(
            "price_descending",
            "Books sorted by price (desc)",
            Request::FindDocuments(FindQuery::default().sort(doc! { "price": -1 })),
        ),
        // Default find order, no sort.
        Step::new(
            "pagination",
            format!("Page {} books", settings.page),
            Request::FindDocuments(
                FindQuery::default()
                    .skip(settings.page_offset())
                    .limit(limit),
            ),
        ),
    ]
}
