//! Sequential identifiers: the next id of a table is its current maximum plus one.
use diesel::{
    dsl::max,
    result::{DatabaseErrorKind, Error as DieselError},
    QueryDsl, QueryResult, RunQueryDsl, SqliteConnection,
};

use crate::schema::{customer, orders};

/// Id columns handed out by the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSequence{
    OrderId,
    CustomerId
}

impl IdSequence {
    pub fn name(&self) -> &'static str {
        match self {
            IdSequence::OrderId => "Orders.orderid",
            IdSequence::CustomerId => "Customer.custid"
        }
    }

    fn current_max(&self, conn: &mut SqliteConnection) -> QueryResult<Option<i32>>{
        match self {
            IdSequence::OrderId => orders::table
                .select(max(orders::orderid))
                .get_result(conn),
            IdSequence::CustomerId => customer::table
                .select(max(customer::custid))
                .get_result(conn)
        }
    }
}

/// Returns 1 for an empty table, otherwise the current maximum plus one.
///
/// Fails instead of wrapping when the maximum is already `i32::MAX`.
pub fn next_id(conn: &mut SqliteConnection, sequence: IdSequence) -> QueryResult<i32>{
    let next = match sequence.current_max(conn)? {
        None => 1,
        Some(current) => current.checked_add(1).ok_or_else(|| {
            DieselError::QueryBuilderError(
                format!("{} is exhausted, no id after {}", sequence.name(), current).into()
            )
        })?
    };

    tracing::debug!(sequence = sequence.name(), next, "Allocated id");
    Ok(next)
}

/// Allocates the next id and runs `insert` with it inside one `BEGIN IMMEDIATE`
/// transaction, so no other writer can slip in between the read and the insert.
///
/// A unique-key violation means the id was taken anyway (e.g. by a writer outside
/// this process); the allocation is retried up to `retries` more times. Any other
/// error is returned as is.
#[tracing::instrument(
    "Allocating id and inserting row",
    skip(conn, insert),
    fields(sequence = sequence.name())
)]
pub fn insert_with_next_id<F>(
    conn: &mut SqliteConnection,
    sequence: IdSequence,
    retries: u32,
    mut insert: F
) -> QueryResult<i32>
where
    F: FnMut(&mut SqliteConnection, i32) -> QueryResult<usize>
{
    let mut attempt = 0;

    loop {
        let res = conn.immediate_transaction::<i32, DieselError, _>(|conn| {
            let id = next_id(conn, sequence)?;
            insert(conn, id)?;
            Ok(id)
        });

        match res {
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) if attempt < retries => {
                attempt += 1;
                tracing::warn!(attempt, "Allocated id already taken, retrying");
            },
            other => return other
        }
    }
}
