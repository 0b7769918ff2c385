mod book_service;
mod errors;
mod filter;

pub use book_service::{
    ServiceDependencies, add_book, delete_book, edit_book, get_book, list_books,
};
pub use errors::{BookApplicationError, Result};
pub use filter::{BookFilter, InvalidFlag, parse_flag};
