//! The address book and its batched iterator.

pub mod address_book;
pub mod batches;

pub use address_book::AddressBook;
pub use batches::Batches;
