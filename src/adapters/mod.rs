// Adapters layer: concrete implementations for external systems (SQLite
// storage, OMDb HTTP lookup).

pub mod omdb;
pub mod sqlite;
