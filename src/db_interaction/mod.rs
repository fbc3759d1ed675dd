use std::error::Error;

use diesel::sqlite::Sqlite;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub mod book;
pub mod customer;
pub mod orders;
pub mod sequence;

pub use book::list_book_entries;
pub use customer::{find_customer, get_customer, register_customer, CustomerLookup, NewCustomer};
pub use orders::{order_history, record_sale, today, RecordedSale};
pub use sequence::{insert_with_next_id, next_id, IdSequence};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub fn run_migrations(connection: &mut impl MigrationHarness<Sqlite>)
    -> Result<(), Box<dyn Error + Send + Sync + 'static>>
{
    connection.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}
