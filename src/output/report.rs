//! Screening report structures

use crate::ranking::document::Document;
use crate::ranking::ranker::CandidateScore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One screening pass: every resume scored against a single job description.
/// Rows keep the input order; any sorting happens at presentation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub job_file: String,
    pub generated_at: DateTime<Utc>,
    pub engine_version: String,
    pub resume_count: usize,
    pub candidates: Vec<CandidateReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateReport {
    pub file_name: String,
    /// Final comparable score in (0, 1)
    pub score: f32,
    pub skills_similarity: f32,
    pub experience_similarity: f32,
    pub education_similarity: f32,
    pub skill_matches: usize,
    pub skill_boost: f32,
    pub word_count: usize,
    /// Set when upstream text acquisition failed and the candidate was scored
    /// on empty content (midpoint)
    pub extraction_failed: bool,
}

impl CandidateReport {
    pub fn from_score(document: &Document, candidate: &CandidateScore, extraction_failed: bool) -> Self {
        Self {
            file_name: document.file_name().to_string(),
            score: candidate.score,
            skills_similarity: candidate.fields.skills,
            experience_similarity: candidate.fields.experience,
            education_similarity: candidate.fields.education,
            skill_matches: candidate.skill_matches,
            skill_boost: candidate.fields.boost,
            word_count: document.word_count,
            extraction_failed,
        }
    }
}

impl ScreeningReport {
    pub fn new(job_file: String, candidates: Vec<CandidateReport>) -> Self {
        Self {
            job_file,
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_count: candidates.len(),
            candidates,
        }
    }

    /// Candidates sorted by descending score, for leaderboard-style display.
    pub fn ranked(&self) -> Vec<&CandidateReport> {
        let mut ranked: Vec<&CandidateReport> = self.candidates.iter().collect();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }
}
