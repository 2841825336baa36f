// Feature extraction: shared vocabulary and per-record binary vectors.

pub mod extractor;
pub mod vocabulary;
