// hackmatch: bag-of-words matching between students and startups.
//
// This is the library root. Each module is one stage of the matching
// pipeline, plus the CSV input and report output around it.

pub mod config;
pub mod features;
pub mod output;
pub mod pipeline;
pub mod ranking;
pub mod records;
pub mod text;
