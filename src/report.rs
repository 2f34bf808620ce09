//! Generation report collection and display
//!
//! Summarizes what a run produced per book: counts of emitted directories and
//! files, stubs left untouched, and source arguments that were skipped.

use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Outcome for one source directory.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ProjectReport {
    /// Source directory as given on the command line
    pub source: PathBuf,
    /// Generated book directory
    pub book_dir: PathBuf,
    /// Number of directory entries in SUMMARY.md
    pub directories: usize,
    /// Number of file entries in SUMMARY.md
    pub files: usize,
    /// Whether the root README.md was left as found
    pub readme_kept: bool,
    /// Existing stubs and managed documents that were not rewritten
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub kept_stubs: Vec<PathBuf>,
}

/// Outcome for a whole run.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct GenerationReport {
    pub projects: Vec<ProjectReport>,
    /// Arguments that did not name an existing directory
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn total_entries(&self) -> usize {
        self.projects.iter().map(|p| p.directories + p.files).sum()
    }
}

/// Print the report to stdout with optional color.
pub fn print_report(report: &GenerationReport, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    let mut path_color = ColorSpec::new();
    path_color.set_fg(Some(Color::Cyan));
    let mut warn_color = ColorSpec::new();
    warn_color.set_fg(Some(Color::Yellow));

    for project in &report.projects {
        stdout.set_color(&bold)?;
        write!(stdout, "{}", project.source.display())?;
        stdout.reset()?;
        write!(stdout, " -> ")?;
        stdout.set_color(&path_color)?;
        writeln!(stdout, "{}", project.book_dir.display())?;
        stdout.reset()?;

        writeln!(
            stdout,
            "  {} directories, {} files",
            project.directories, project.files
        )?;
        if project.readme_kept {
            writeln!(stdout, "  README.md kept")?;
        }
        for kept in &project.kept_stubs {
            stdout.set_color(&warn_color)?;
            write!(stdout, "  kept")?;
            stdout.reset()?;
            writeln!(stdout, " {}", kept.display())?;
        }
    }

    for skipped in &report.skipped {
        stdout.set_color(&warn_color)?;
        write!(stdout, "skipped")?;
        stdout.reset()?;
        writeln!(stdout, " {} (not a directory)", skipped.display())?;
    }

    if report.projects.len() > 1 {
        writeln!(
            stdout,
            "\n{} books, {} entries",
            report.projects.len(),
            report.total_entries()
        )?;
    }

    Ok(())
}

/// Print the report as JSON.
pub fn print_report_json(report: &GenerationReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_entries() {
        let report = GenerationReport {
            projects: vec![
                ProjectReport {
                    directories: 2,
                    files: 3,
                    ..Default::default()
                },
                ProjectReport {
                    directories: 1,
                    files: 0,
                    ..Default::default()
                },
            ],
            skipped: Vec::new(),
        };
        assert_eq!(report.total_entries(), 6);
    }

    #[test]
    fn test_json_omits_empty_lists() {
        let report = GenerationReport {
            projects: vec![ProjectReport {
                source: PathBuf::from("proj"),
                book_dir: PathBuf::from("proj_gitbook"),
                directories: 1,
                files: 1,
                ..Default::default()
            }],
            skipped: Vec::new(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("skipped").is_none());
        assert!(json["projects"][0].get("kept_stubs").is_none());
        assert_eq!(json["projects"][0]["source"], "proj");
        assert_eq!(json["projects"][0]["files"], 1);
    }
}
