//! The ranking engine: normalization, section extraction, similarity scoring,
//! and batch ranking of resumes against a job description

pub mod document;
pub mod normalize;
pub mod ranker;
pub mod score;
pub mod sections;
pub mod similarity;

pub use ranker::{CandidateScore, Ranker};
