//! Persistence layer — the profile store boundary and its backends.

pub mod http;
pub mod libsql_backend;
pub mod memory;
pub mod migrations;
pub mod traits;
pub mod wire;

pub use http::HttpProfileStore;
pub use libsql_backend::LibSqlProfileStore;
pub use memory::MemoryProfileStore;
pub use traits::ProfileStore;
pub use wire::ProfileRecord;
