pub mod handlers;
pub mod listing;
pub mod search;
