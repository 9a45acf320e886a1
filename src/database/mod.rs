pub mod connection;
pub mod games;
pub mod setup;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
