use chrono::{Local, NaiveDate};
use diesel::{ExpressionMethods, QueryDsl, QueryResult, RunQueryDsl, SqliteConnection};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{BookChoice, SalePrice, Selection},
    models::{Order, OrderHistoryEntry},
    schema::{book, orders},
};

use super::sequence::{insert_with_next_id, IdSequence};

/// Today's date in the host's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Orders of a customer joined with their book names, most recent first.
#[tracing::instrument(
    "Getting order history",
    skip(conn)
)]
pub fn order_history(conn: &mut SqliteConnection, custid: i32) -> QueryResult<Vec<OrderHistoryEntry>>{
    orders::table
        .inner_join(book::table)
        .filter(orders::custid.eq(custid))
        .select((
            orders::orderid,
            book::bookname,
            orders::saleprice,
            orders::orderdate
        ))
        .order((orders::orderdate.desc(), orders::orderid.desc()))
        .load::<OrderHistoryEntry>(conn)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecordedSale{
    pub orderid: i32,
    pub orderdate: NaiveDate
}

/// Records a sale of `book` to the selected customer, dated today.
#[tracing::instrument(
    "Recording sale",
    skip(conn)
)]
pub fn record_sale(
    conn: &mut SqliteConnection,
    customer: &Selection,
    book: BookChoice,
    price: SalePrice,
    retries: u32
) -> QueryResult<RecordedSale>{
    let orderdate = today();

    let orderid = insert_with_next_id(conn, IdSequence::OrderId, retries, |conn, orderid| {
        diesel::insert_into(orders::table)
            .values(Order{
                orderid,
                custid: customer.custid,
                bookid: book.bookid(),
                saleprice: price.value(),
                orderdate
            })
            .execute(conn)
    })?;

    tracing::info!(orderid, %orderdate, "Sale recorded");
    Ok(RecordedSale{ orderid, orderdate })
}
