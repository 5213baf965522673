//! Output formatters: console leaderboard, JSON, Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{CandidateReport, ScreeningReport};
use colored::Colorize;

/// Trait for formatting screening reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String>;
}

/// Console formatter with a colored leaderboard table
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tools
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable reports
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        // colored honours NO_COLOR etc. on its own; this is the config switch
        if !use_colors {
            colored::control::set_override(false);
        }
        Self { use_colors, detailed }
    }

    fn score_cell(&self, candidate: &CandidateReport) -> String {
        let percent = format!("{:>5.1}%", candidate.score * 100.0);
        if !self.use_colors {
            return percent;
        }
        if candidate.score >= 0.7 {
            percent.green().bold().to_string()
        } else if candidate.score >= 0.5 {
            percent.yellow().to_string()
        } else {
            percent.red().to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!(
            "\n{}\n",
            "Resume Screening Leaderboard".bold().underline()
        ));
        out.push_str(&format!(
            "Job: {}  ({} resumes, engine v{})\n\n",
            report.job_file, report.resume_count, report.engine_version
        ));

        if report.candidates.is_empty() {
            out.push_str("No resumes in this batch.\n");
            return Ok(out);
        }

        out.push_str(&format!(
            "{:<4} {:<32} {:>7} {:>8}\n",
            "#", "Resume", "Score", "Matches"
        ));

        for (position, candidate) in report.ranked().iter().enumerate() {
            let note = if candidate.extraction_failed {
                "  (no text extracted)".dimmed().to_string()
            } else {
                String::new()
            };
            out.push_str(&format!(
                "{:<4} {:<32} {:>7} {:>8}{}\n",
                position + 1,
                candidate.file_name,
                self.score_cell(candidate),
                candidate.skill_matches,
                note
            ));

            if self.detailed {
                out.push_str(&format!(
                    "     skills {:>5.1}%  experience {:>5.1}%  education {:>5.1}%  boost {:+.2}  ({} words)\n",
                    candidate.skills_similarity * 100.0,
                    candidate.experience_similarity * 100.0,
                    candidate.education_similarity * 100.0,
                    candidate.skill_boost,
                    candidate.word_count
                ));
            }
        }

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Resume Screening Report\n\n");
        out.push_str(&format!("- **Job:** {}\n", report.job_file));
        out.push_str(&format!(
            "- **Generated:** {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        out.push_str(&format!("- **Resumes:** {}\n\n", report.resume_count));

        if report.candidates.is_empty() {
            out.push_str("_No resumes in this batch._\n");
            return Ok(out);
        }

        out.push_str("| # | Resume | Score | Skills | Experience | Education | Skill matches |\n");
        out.push_str("|---|--------|-------|--------|------------|-----------|---------------|\n");

        for (position, candidate) in report.ranked().iter().enumerate() {
            let name = if candidate.extraction_failed {
                format!("{} ⚠", candidate.file_name)
            } else {
                candidate.file_name.clone()
            };
            out.push_str(&format!(
                "| {} | {} | {:.1}% | {:.1}% | {:.1}% | {:.1}% | {} |\n",
                position + 1,
                name,
                candidate.score * 100.0,
                candidate.skills_similarity * 100.0,
                candidate.experience_similarity * 100.0,
                candidate.education_similarity * 100.0,
                candidate.skill_matches
            ));
        }

        Ok(out)
    }
}

/// Dispatches a report to the formatter matching the requested output format.
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn format(
        report: &ScreeningReport,
        format: OutputFormat,
        use_colors: bool,
        detailed: bool,
    ) -> Result<String> {
        match format {
            OutputFormat::Console => {
                ConsoleFormatter::new(use_colors, detailed).format_report(report)
            }
            OutputFormat::Json => JsonFormatter::new(true).format_report(report),
            OutputFormat::Markdown => MarkdownFormatter.format_report(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ScreeningReport {
        let candidates = vec![
            CandidateReport {
                file_name: "alice.pdf".to_string(),
                score: 0.82,
                skills_similarity: 0.9,
                experience_similarity: 0.7,
                education_similarity: 0.5,
                skill_matches: 4,
                skill_boost: 0.2,
                word_count: 320,
                extraction_failed: false,
            },
            CandidateReport {
                file_name: "bob.pdf".to_string(),
                score: 0.5,
                skills_similarity: 0.0,
                experience_similarity: 0.0,
                education_similarity: 0.0,
                skill_matches: 0,
                skill_boost: 0.0,
                word_count: 0,
                extraction_failed: true,
            },
        ];
        ScreeningReport::new("job.txt".to_string(), candidates)
    }

    #[test]
    fn test_console_format_lists_all_candidates() {
        let report = sample_report();
        let out = ConsoleFormatter::new(false, false).format_report(&report).unwrap();
        assert!(out.contains("alice.pdf"));
        assert!(out.contains("bob.pdf"));
        assert!(out.contains("no text extracted"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let report = sample_report();
        let out = JsonFormatter::new(true).format_report(&report).unwrap();
        let parsed: ScreeningReport = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.resume_count, 2);
        assert_eq!(parsed.candidates[0].file_name, "alice.pdf");
    }

    #[test]
    fn test_markdown_format_has_table() {
        let report = sample_report();
        let out = MarkdownFormatter.format_report(&report).unwrap();
        assert!(out.contains("| 1 | alice.pdf |"));
        assert!(out.contains("# Resume Screening Report"));
    }

    #[test]
    fn test_empty_batch_formats_cleanly() {
        let report = ScreeningReport::new("job.txt".to_string(), Vec::new());
        for format in [OutputFormat::Console, OutputFormat::Json, OutputFormat::Markdown] {
            let out = ReportGenerator::format(&report, format, false, false).unwrap();
            assert!(!out.is_empty());
        }
    }
}
