use super::{Request, Step};
use mongodb::bson::doc;

pub fn steps() -> Vec<Step> {
    vec![
        Step::new(
            "average_price_by_genre",
            "Average price by genre",
            Request::Aggregate(vec![
                doc! { "$group": { "_id": "$genre", "averagePrice": { "$avg": "$price" } } },
                doc! { "$sort": { "_id": 1 } },
            ]),
        ),
        // Ties on totalBooks go to the lexicographically first author.
        Step::new(
            "top_author",
            "Author with the most books",
            Request::Aggregate(vec![
                doc! { "$group": { "_id": "$author", "totalBooks": { "$sum": 1 } } },
                doc! { "$sort": { "totalBooks": -1, "_id": 1 } },
                doc! { "$limit": 1 },
            ]),
        ),
        Step::new(
            "books_by_decade",
            "Books by decade",
            Request::Aggregate(vec![
                doc! {
                    "$group": {
                        "_id": { "$floor": { "$divide": ["$published_year", 10] } },
                        "count": { "$sum": 1 },
                    }
                },
                doc! {
                    "$project": {
                        "decade": { "$multiply": ["$_id", 10] },
                        "count": 1,
                        "_id": 0,
                    }
                },
                doc! { "$sort": { "decade": 1 } },
            ]),
        ),
    ]
}
