//! Delimited-text parsing

mod delimited;

pub use delimited::DelimitedParser;
