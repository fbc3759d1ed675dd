use diesel::{QueryDsl, QueryResult, RunQueryDsl, SqliteConnection};

use crate::{models::Book, schema::book};

/// Every book as an `id,name` entry, ordered by id.
#[tracing::instrument(
    "Listing book entries",
    skip_all
)]
pub fn list_book_entries(conn: &mut SqliteConnection) -> QueryResult<Vec<String>>{
    let books = book::table
        .order(book::bookid)
        .load::<Book>(conn)?;

    Ok(books.iter().map(Book::entry).collect())
}
