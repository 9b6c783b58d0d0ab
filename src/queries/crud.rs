use super::{Request, Step};
use crate::settings::Settings;
use crate::store::FindQuery;
use mongodb::bson::doc;

pub fn steps(settings: &Settings) -> Vec<Step> {
    vec![
        Step::new(
            "books_by_genre",
            format!("Books in genre {}", settings.genre),
            Request::FindDocuments(FindQuery::new(doc! { "genre": &settings.genre })),
        ),
        Step::new(
            "books_after_year",
            format!("Books published after {}", settings.year_after),
            Request::FindDocuments(FindQuery::new(
                doc! { "published_year": { "$gt": settings.year_after } },
            )),
        ),
        Step::new(
            "books_by_author",
            format!("Books by author {}", settings.author),
            Request::FindDocuments(FindQuery::new(doc! { "author": &settings.author })),
        ),
        // Reports the modified count, so a re-run with the same price prints 0.
        Step::new(
            "update_price",
            format!("Price updated for {}", settings.price_title),
            Request::UpdateOne {
                filter: doc! { "title": &settings.price_title },
                update: doc! { "$set": { "price": settings.new_price } },
            },
        ),
        Step::new(
            "delete_by_title",
            format!("Book deleted ({})", settings.delete_title),
            Request::DeleteOne {
                filter: doc! { "title": &settings.delete_title },
            },
        ),
    ]
}
