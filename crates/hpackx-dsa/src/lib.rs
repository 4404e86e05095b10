#![no_std]
extern crate alloc;

pub mod field;
pub mod table;

pub use field::HeaderField;
pub use table::{IndexOutOfRange, StaticTable, MAX_ENTRIES, STANDARD_ENTRIES};
