use serde::{Deserialize, Serialize};

use crate::models::Customer;

// Customer the next sale is recorded for
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Selection{
    pub custid: i32,
    pub name: String
}

impl From<&Customer> for Selection {
    fn from(customer: &Customer) -> Self {
        Selection{
            custid: customer.custid,
            name: customer.name.clone()
        }
    }
}
