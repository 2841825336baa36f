// Ranking: pairwise similarity between the two sides.

pub mod distance;
pub mod engine;
