//! Connection management. All statements go through a single serialized
//! write connection.

pub mod pragmas;
pub mod write_connection;

pub use write_connection::WriteConnection;
