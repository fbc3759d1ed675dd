pub mod book;
pub mod customer;
pub mod health_check;
pub mod order;
pub mod selection;

pub use book::get::get_books;
pub use customer::{get::lookup_customer, post::register_customer, select::select_customer};
pub use health_check::health_check;
pub use order::post::post_order;
pub use selection::{clear_selection, get_selection};
