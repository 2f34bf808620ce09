//! Book projects: one generated GitBook per source directory

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{GenError, Result};
use crate::output::{
    FsEmitter, SUMMARY, SummaryWriter, WriteOutcome, WritePolicy, write_document,
};
use crate::report::{GenerationReport, ProjectReport};
use crate::string_utils::{book_dir_name, refine_dirname};
use crate::tree::{BookWalker, README, WalkerConfig};

/// Appended to every source directory name to form the book directory.
pub const DEFAULT_BOOK_SUFFIX: &str = "_gitbook";

/// Body line of the root README.md.
pub const DEFAULT_ATTRIBUTION: &str = "The book structure is generated by [gitbook_gen](https://github.com/yeasy/code_snippet/#gitbook_gen).";

/// Everything a generation run needs, threaded explicitly through each book.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub walker: WalkerConfig,
    /// Directory the books are created in
    pub output_root: PathBuf,
    pub book_suffix: String,
    pub attribution: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            walker: WalkerConfig::default(),
            output_root: PathBuf::from("."),
            book_suffix: DEFAULT_BOOK_SUFFIX.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
        }
    }
}

/// Layout of the book generated for one source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookProject {
    source: PathBuf,
    title: String,
    root: PathBuf,
}

impl BookProject {
    pub fn new(source: &Path, config: &GeneratorConfig) -> Self {
        let title = refine_dirname(&source.to_string_lossy());
        let root = config
            .output_root
            .join(book_dir_name(&title, &config.book_suffix));
        Self {
            source: source.to_path_buf(),
            title,
            root,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn readme_path(&self) -> PathBuf {
        self.root.join(README)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.root.join(SUMMARY)
    }

    /// Create the book directory, its README.md (only if missing) and a fresh
    /// SUMMARY.md. Returns the open summary and whether README.md was kept.
    pub fn init(&self, attribution: &str) -> Result<(SummaryWriter, bool)> {
        fs::create_dir_all(&self.root).map_err(|e| GenError::io(&self.root, e))?;

        let readme = self.readme_path();
        let content = format!("# {}\n\n{}", self.title, attribution);
        let kept = match write_document(&readme, &content, WritePolicy::KeepExisting)? {
            WriteOutcome::Written => false,
            WriteOutcome::Kept => {
                warn!(
                    "{} already exists, stop writing content={}",
                    readme.display(),
                    content
                );
                true
            }
        };

        let summary = SummaryWriter::create(&self.summary_path())?;
        Ok((summary, kept))
    }

    /// Initialize the book and fill it from the source tree.
    pub fn build(&self, walker: &BookWalker, attribution: &str) -> Result<ProjectReport> {
        info!("Will init the output dir={}", self.root.display());
        let (summary, readme_kept) = self.init(attribution)?;

        let mut emitter = FsEmitter::new(&self.root, summary);
        let counts = walker.walk(&self.source, &mut emitter)?;
        let kept_stubs = emitter.finish()?;

        Ok(ProjectReport {
            source: self.source.clone(),
            book_dir: self.root.clone(),
            directories: counts.dirs,
            files: counts.files,
            readme_kept,
            kept_stubs,
        })
    }
}

/// Generate one book per source directory, in argument order.
///
/// Arguments that are not existing directories are logged and skipped. The
/// first filesystem error aborts the run.
pub fn generate<P: AsRef<Path>>(
    sources: &[P],
    config: &GeneratorConfig,
) -> Result<GenerationReport> {
    let walker = BookWalker::new(config.walker.clone())?;
    let mut report = GenerationReport::default();

    for source in sources {
        let source = source.as_ref();
        if !source.is_dir() {
            warn!("dir name {} does not exist", source.display());
            report.skipped.push(source.to_path_buf());
            continue;
        }

        let project = BookProject::new(source, config);
        report
            .projects
            .push(project.build(&walker, &config.attribution)?);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    fn config_for(tree: &TestTree) -> GeneratorConfig {
        GeneratorConfig {
            output_root: tree.path().join("out"),
            ..Default::default()
        }
    }

    #[test]
    fn test_project_layout() {
        let config = GeneratorConfig {
            output_root: PathBuf::from("/books"),
            ..Default::default()
        };
        let project = BookProject::new(Path::new("./code/app/"), &config);
        assert_eq!(project.title(), "code/app");
        assert_eq!(project.root(), Path::new("/books/code_app_gitbook"));
        assert_eq!(
            project.summary_path(),
            Path::new("/books/code_app_gitbook/SUMMARY.md")
        );
    }

    #[test]
    fn test_init_writes_readme_and_summary() {
        let tree = TestTree::new();
        let config = config_for(&tree);
        let project = BookProject::new(Path::new("proj"), &config);

        let (summary, kept) = project.init(&config.attribution).unwrap();
        summary.finish().unwrap();
        assert!(!kept);

        assert_eq!(
            tree.read("out/proj_gitbook/README.md"),
            format!("# proj\n\n{}\n", DEFAULT_ATTRIBUTION)
        );
        assert_eq!(
            tree.read("out/proj_gitbook/SUMMARY.md"),
            "# Summary\n\n* [Introduction](README.md)\n"
        );
    }

    #[test]
    fn test_init_keeps_existing_readme() {
        let tree = TestTree::new();
        tree.add_file("out/proj_gitbook/README.md", "# My Book\n\nCustom intro.\n");
        let config = config_for(&tree);
        let project = BookProject::new(Path::new("proj"), &config);

        let (summary, kept) = project.init(&config.attribution).unwrap();
        summary.finish().unwrap();
        assert!(kept);
        assert_eq!(
            tree.read("out/proj_gitbook/README.md"),
            "# My Book\n\nCustom intro.\n"
        );
    }

    #[test]
    fn test_generate_skips_missing_and_continues() {
        let tree = TestTree::new();
        tree.add_file("proj/main.go", "package main");
        let config = config_for(&tree);
        let missing = tree.path().join("missing");
        let proj = tree.path().join("proj");

        let report = generate(&[missing.clone(), proj], &config).unwrap();
        assert_eq!(report.skipped, vec![missing]);
        assert_eq!(report.projects.len(), 1);
        assert_eq!(report.projects[0].files, 1);
    }

    #[test]
    fn test_generate_rejects_bad_pattern_before_writing() {
        let tree = TestTree::new();
        tree.add_dir("proj");
        let mut config = config_for(&tree);
        config.walker.ignore_patterns.push("[".to_string());

        let result = generate(&[tree.path().join("proj")], &config);
        assert!(matches!(result, Err(GenError::InvalidPattern { .. })));
        assert!(!tree.exists("out"));
    }
}
