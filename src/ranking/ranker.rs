//! Batch ranking of resumes against a single job description

use crate::ranking::normalize::TextNormalizer;
use crate::ranking::score::{aggregate, skill_boost, skill_match_count, FieldScores};
use crate::ranking::sections::{SectionExtractor, SectionLabel};
use crate::ranking::similarity::similarity;
use log::debug;

/// The job description's three field values, extracted once per ranking pass
/// and shared read-only across all resume computations.
struct JobProfile {
    skills: String,
    experience: String,
    education: String,
}

/// Score for one resume, with the per-field breakdown kept for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore {
    /// Final comparable score, strictly inside (0, 1)
    pub score: f32,
    pub fields: FieldScores,
    pub skill_matches: usize,
}

/// Pure ranking engine. Owns no state beyond its compiled patterns; every
/// invocation is a function of (job text, resume texts) alone.
pub struct Ranker {
    normalizer: TextNormalizer,
    extractor: SectionExtractor,
}

impl Ranker {
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            extractor: SectionExtractor::new(),
        }
    }

    /// Score every resume against the job description. The output vector
    /// mirrors the input order; sorting for display is the caller's concern.
    pub fn rank(&self, job_text: &str, resume_texts: &[String]) -> Vec<f32> {
        self.rank_detailed(job_text, resume_texts)
            .into_iter()
            .map(|candidate| candidate.score)
            .collect()
    }

    /// Like [`Ranker::rank`], keeping the per-field breakdown per resume.
    ///
    /// Resumes are scored independently; a structurally empty resume does not
    /// disturb its neighbours, it simply lands on the sigmoid midpoint.
    pub fn rank_detailed(&self, job_text: &str, resume_texts: &[String]) -> Vec<CandidateScore> {
        let job = self.job_profile(job_text);

        resume_texts
            .iter()
            .map(|resume_text| self.score_resume(&job, resume_text))
            .collect()
    }

    /// Extract the job's field values. A job description without a labeled
    /// section falls back to the whole normalized text: the job is assumed
    /// topically homogeneous.
    fn job_profile(&self, job_text: &str) -> JobProfile {
        let normalized = self.normalizer.normalize(job_text);

        let field = |label: SectionLabel| {
            let body = self.extractor.extract(&normalized, label);
            if body.is_empty() {
                normalized.clone()
            } else {
                body
            }
        };

        JobProfile {
            skills: field(SectionLabel::Skills),
            experience: field(SectionLabel::Experience),
            education: field(SectionLabel::Education),
        }
    }

    fn score_resume(&self, job: &JobProfile, resume_text: &str) -> CandidateScore {
        let normalized = self.normalizer.normalize(resume_text);

        // Resume fallback policy: an absent section stays empty, which makes
        // the corresponding field similarity 0.
        let skills = self.extractor.extract(&normalized, SectionLabel::Skills);
        let experience = self.extractor.extract(&normalized, SectionLabel::Experience);
        let education = self.extractor.extract(&normalized, SectionLabel::Education);

        let skill_matches = skill_match_count(&job.skills, &skills);

        let fields = FieldScores {
            skills: similarity(&job.skills, &skills),
            experience: similarity(&job.experience, &experience),
            education: similarity(&job.education, &education),
            boost: skill_boost(skill_matches),
        };

        let score = aggregate(&fields);
        debug!(
            "scored resume: {:.4} (skills {:.3}, experience {:.3}, education {:.3}, {} skill matches)",
            score, fields.skills, fields.experience, fields.education, skill_matches
        );

        CandidateScore {
            score,
            fields,
            skill_matches,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}
