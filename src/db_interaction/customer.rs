use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, QueryResult, RunQueryDsl, SqliteConnection};

use crate::{domain::CustomerName, models::Customer, schema::customer};

use super::sequence::{insert_with_next_id, IdSequence};

/// Outcome of an exact-name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerLookup{
    NotFound,
    Found(Customer),
    // Several customers share the name; none of them is picked
    Ambiguous(Vec<Customer>)
}

#[tracing::instrument(
    "Finding customer by name",
    skip(conn)
)]
pub fn find_customer(conn: &mut SqliteConnection, name: &str) -> QueryResult<CustomerLookup>{
    let mut matches = customer::table
        .filter(customer::name.eq(name))
        .order(customer::custid)
        .load::<Customer>(conn)?;

    let lookup = match matches.len() {
        0 => CustomerLookup::NotFound,
        1 => CustomerLookup::Found(matches.remove(0)),
        n => {
            tracing::warn!(matches = n, "Customer name is not unique");
            CustomerLookup::Ambiguous(matches)
        }
    };

    Ok(lookup)
}

#[tracing::instrument(
    "Getting customer by id",
    skip(conn)
)]
pub fn get_customer(conn: &mut SqliteConnection, custid: i32) -> QueryResult<Option<Customer>>{
    customer::table
        .find(custid)
        .first::<Customer>(conn)
        .optional()
}

// Registration form after validation; address and phone are stored as given
#[derive(Debug, Clone)]
pub struct NewCustomer{
    pub name: CustomerName,
    pub address: String,
    pub phone: String
}

/// Inserts the customer under the next free `custid` and returns that id.
#[tracing::instrument(
    "Registering customer",
    skip(conn)
)]
pub fn register_customer(
    conn: &mut SqliteConnection,
    new_customer: NewCustomer,
    retries: u32
) -> QueryResult<i32>{
    let custid = insert_with_next_id(conn, IdSequence::CustomerId, retries, |conn, custid| {
        let row = Customer{
            custid,
            name: new_customer.name.inner(),
            address: Some(new_customer.address.clone()),
            phone: Some(new_customer.phone.clone())
        };

        diesel::insert_into(customer::table)
            .values(row)
            .execute(conn)
    })?;

    tracing::info!(custid, "Customer registered");
    Ok(custid)
}
