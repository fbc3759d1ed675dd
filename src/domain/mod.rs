pub mod book_choice;
pub mod customer_name;
pub mod sale_price;
pub mod selection;

pub use book_choice::BookChoice;
pub use customer_name::CustomerName;
pub use sale_price::SalePrice;
pub use selection::Selection;
