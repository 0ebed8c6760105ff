//! CLI command implementations.

pub mod page;
pub mod search;

pub use page::BuildPageCommand;
pub use search::SearchCommand;
