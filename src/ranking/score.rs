//! Score aggregation: fixed field weights, skill-overlap boost, sigmoid squash

use std::collections::HashSet;

pub const SKILLS_WEIGHT: f32 = 0.4;
pub const EXPERIENCE_WEIGHT: f32 = 0.4;
pub const EDUCATION_WEIGHT: f32 = 0.2;

/// Increment applied per exactly-matched skill token. The boost has no upper
/// cap: enough exact matches can push the pre-squash sum past 1.0, so a
/// resume that is mostly a skill-token list can outscore a well-matched prose
/// resume. The squash keeps the final score inside (0, 1) regardless.
pub const SKILL_MATCH_BOOST: f32 = 0.05;

/// Per-field similarities plus the skill boost for one resume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldScores {
    pub skills: f32,
    pub experience: f32,
    pub education: f32,
    pub boost: f32,
}

/// Count the whitespace-delimited tokens the two skill sections share.
/// Set semantics: duplicates collapse, order is irrelevant.
pub fn skill_match_count(job_skills: &str, resume_skills: &str) -> usize {
    let job: HashSet<&str> = job_skills.split_whitespace().collect();
    let resume: HashSet<&str> = resume_skills.split_whitespace().collect();
    job.intersection(&resume).count()
}

pub fn skill_boost(match_count: usize) -> f32 {
    match_count as f32 * SKILL_MATCH_BOOST
}

/// Weighted sum of the three field similarities plus the boost, squashed
/// through the logistic function into (0, 1). An all-zero input lands exactly
/// on the sigmoid midpoint, 0.5: an empty resume scores at the midpoint, not
/// at the floor.
pub fn aggregate(scores: &FieldScores) -> f32 {
    let raw = SKILLS_WEIGHT * scores.skills
        + EXPERIENCE_WEIGHT * scores.experience
        + EDUCATION_WEIGHT * scores.education
        + scores.boost;
    sigmoid(raw)
}

pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO: FieldScores = FieldScores {
        skills: 0.0,
        experience: 0.0,
        education: 0.0,
        boost: 0.0,
    };

    #[test]
    fn test_all_zero_input_scores_midpoint() {
        assert_eq!(aggregate(&ZERO), 0.5);
    }

    #[test]
    fn test_skill_match_count_set_semantics() {
        assert_eq!(skill_match_count("python sql", "python sql java"), 2);
        assert_eq!(skill_match_count("python python sql", "sql python"), 2);
        assert_eq!(skill_match_count("python", "java"), 0);
        assert_eq!(skill_match_count("", "python"), 0);
    }

    #[test]
    fn test_boost_per_match_weight() {
        assert_eq!(skill_boost(0), 0.0);
        assert_eq!(skill_boost(2), 0.1);
    }

    #[test]
    fn test_boost_is_uncapped() {
        // 30 exact matches push the boost past 1.0 before the squash.
        assert!(skill_boost(30) > 1.0);
    }

    #[test]
    fn test_score_strictly_bounded() {
        let extreme = FieldScores {
            skills: 1.0,
            experience: 1.0,
            education: 1.0,
            boost: skill_boost(200),
        };
        let score = aggregate(&extreme);
        assert!(score > 0.0 && score < 1.0);
        assert!(aggregate(&ZERO) > 0.0 && aggregate(&ZERO) < 1.0);
    }

    #[test]
    fn test_more_matches_strictly_increase_score() {
        let mut previous = aggregate(&ZERO);
        for matches in 1..20 {
            let scores = FieldScores {
                boost: skill_boost(matches),
                ..ZERO
            };
            let current = aggregate(&scores);
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn test_perfect_fields_beat_sigmoid_of_one() {
        let perfect = FieldScores {
            skills: 1.0,
            experience: 1.0,
            education: 1.0,
            boost: 0.0,
        };
        // 0.4 + 0.4 + 0.2 = 1.0 exactly
        assert_eq!(aggregate(&perfect), sigmoid(1.0));
        assert!(aggregate(&perfect) > 0.731);
    }
}
