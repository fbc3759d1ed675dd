use serde::{Deserialize, Serialize};

use crate::models::{Customer, OrderHistoryEntry};

pub mod get;
pub mod post;
pub mod select;

/// A selected customer together with their order history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CustomerView{
    pub customer: Customer,
    pub orders: Vec<OrderHistoryEntry>,
    pub notice: Option<String>
}

impl CustomerView {
    pub fn new(customer: Customer, orders: Vec<OrderHistoryEntry>) -> Self{
        let notice = orders
            .is_empty()
            .then(|| "No past orders, new customer".to_string());

        CustomerView{ customer, orders, notice }
    }
}
