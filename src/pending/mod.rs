//! Display-time repair of a pending (still streaming) Markdown buffer.

mod balance;

pub use balance::{close_open_delimiters, close_open_delimiters_with, open_delimiters, OpenDelimiters};
