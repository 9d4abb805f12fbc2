pub mod algorithms;
pub mod slice;

pub use algorithms::{chunked, integer};
