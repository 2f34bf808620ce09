//! String utility functions for naming books after their source directory.

/// Normalize a source directory argument for use as a title and book name.
///
/// Drops `.` components and empty segments (so `./yeasy_book/` becomes
/// `yeasy_book`), keeps a leading `/`, and joins the rest with `/`. An
/// argument with nothing left becomes `.`.
///
/// # Example
///
/// ```
/// use gitbook_gen::string_utils::refine_dirname;
///
/// assert_eq!(refine_dirname("./yeasy_book/"), "yeasy_book");
/// assert_eq!(refine_dirname("src/./core"), "src/core");
/// assert_eq!(refine_dirname("./"), ".");
/// ```
pub fn refine_dirname(name: &str) -> String {
    let absolute = name.starts_with(['/', '\\']);
    let parts: Vec<&str> = name
        .split(['/', '\\'])
        .filter(|p| !p.is_empty() && *p != ".")
        .collect();

    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Flatten a refined directory name into a single path segment and add `suffix`.
///
/// # Example
///
/// ```
/// use gitbook_gen::string_utils::book_dir_name;
///
/// assert_eq!(book_dir_name("src/core", "_gitbook"), "src_core_gitbook");
/// ```
pub fn book_dir_name(refined: &str, suffix: &str) -> String {
    let mut name = refined.replace(['/', '\\'], "_");
    name.push_str(suffix);
    name
}
