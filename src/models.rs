use chrono::NaiveDate;
use diesel::prelude::{Insertable, Queryable};
use serde::{Deserialize, Serialize};

use crate::schema::{book, customer, orders};

#[derive(Queryable, Insertable, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = book)]
pub struct Book{
    pub bookid: i32,
    pub bookname: String,
    pub publisher: Option<String>,
    pub price: Option<i32>
}

impl Book {
    /// The `id,name` entry offered by the sale form.
    pub fn entry(&self) -> String {
        format!("{},{}", self.bookid, self.bookname)
    }
}

#[derive(Queryable, Insertable, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = customer)]
pub struct Customer{
    pub custid: i32,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>
}

#[derive(Queryable, Insertable, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = orders)]
pub struct Order{
    pub orderid: i32,
    pub custid: i32,
    pub bookid: i32,
    pub saleprice: i32,
    pub orderdate: NaiveDate
}

// Row of Orders joined with Book
#[derive(Queryable, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderHistoryEntry{
    pub orderid: i32,
    pub bookname: String,
    pub saleprice: i32,
    pub orderdate: NaiveDate
}
