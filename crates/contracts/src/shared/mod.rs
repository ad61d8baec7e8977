pub mod aggregate;
pub mod collection;
pub mod list_query;
pub mod settings;
