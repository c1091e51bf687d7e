pub mod error;
pub mod lis;
pub mod parse;

pub use error::{Error, Result};
pub use lis::{
    longest_increasing_subsequence, longest_increasing_subsequence_length, Subsequence,
};
pub use parse::parse_sequence;
