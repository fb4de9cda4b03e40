pub mod dictionary;
pub mod error;
pub mod language;
pub mod segment;
pub mod store;
