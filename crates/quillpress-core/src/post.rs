use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{QuillpressError, Result};

/// Delimiter line for the TOML front matter block
pub const FRONT_MATTER_FENCE: &str = "+++";

/// A content entry parsed from a post file.
///
/// `title` is mandatory and `categories` is an explicit option: a post
/// with no `categories` key and a post with `categories = []` both report
/// no labels through [`Post::category_labels`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// Identifier derived from the file stem
    pub slug: String,
    pub title: String,
    /// Publication date (quoted `"YYYY-MM-DD"` in front matter)
    pub date: Option<NaiveDate>,
    pub draft: bool,
    pub categories: Option<Vec<String>>,
    /// Source file the post was parsed from
    pub path: PathBuf,
}

/// Raw front matter shape; validated into a `Post` after parsing
#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: Option<String>,
    date: Option<NaiveDate>,
    #[serde(default)]
    draft: bool,
    categories: Option<Vec<String>>,
}

impl Post {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(path, &content)
    }

    /// Parse a post from file content.
    ///
    /// Fails fast on a missing front matter block, a missing title, or a
    /// `categories` value that is not an array of strings. Offending posts
    /// are never coerced or skipped.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let raw = extract_front_matter(path, content)?;

        let fm: FrontMatter =
            toml::from_str(raw).map_err(|e| QuillpressError::FrontMatter {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let title = fm.title.ok_or_else(|| QuillpressError::MissingTitle {
            path: path.to_path_buf(),
        })?;

        let slug = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            slug,
            title,
            date: fm.date,
            draft: fm.draft,
            categories: fm.categories,
            path: path.to_path_buf(),
        })
    }

    /// Category labels on this post.
    ///
    /// Returns `None` both when the field is absent and when it is present
    /// but empty, so either case falls back to the Uncategorized bucket.
    pub fn category_labels(&self) -> Option<&[String]> {
        match self.categories.as_deref() {
            None | Some([]) => None,
            Some(labels) => Some(labels),
        }
    }
}

/// Extract the TOML between the opening and closing `+++` fences
fn extract_front_matter<'a>(path: &Path, content: &'a str) -> Result<&'a str> {
    let missing = || QuillpressError::FrontMatterMissing {
        path: path.to_path_buf(),
    };

    let trimmed = content.trim_start_matches('\u{feff}');
    let rest = trimmed.strip_prefix(FRONT_MATTER_FENCE).ok_or_else(missing)?;
    let end = rest.find("\n+++").ok_or_else(missing)?;
    Ok(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Post> {
        Post::parse(Path::new("content/hello-world.md"), content)
    }

    #[test]
    fn test_parse_full_front_matter() {
        let post = parse(
            "+++\ntitle = \"Hello World\"\ndate = \"2024-03-01\"\ncategories = [\"rust\", \"blog\"]\n+++\nBody text.\n",
        )
        .unwrap();

        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.title, "Hello World");
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert!(!post.draft);
        assert_eq!(
            post.categories,
            Some(vec!["rust".to_string(), "blog".to_string()])
        );
    }

    #[test]
    fn test_parse_minimal_front_matter() {
        let post = parse("+++\ntitle = \"Hello\"\n+++\n").unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.date, None);
        assert_eq!(post.categories, None);
    }

    #[test]
    fn test_parse_draft_flag() {
        let post = parse("+++\ntitle = \"WIP\"\ndraft = true\n+++\n").unwrap();
        assert!(post.draft);
    }

    #[test]
    fn test_missing_fence_is_rejected() {
        let err = parse("title = \"Hello\"\n").unwrap_err();
        assert!(matches!(err, QuillpressError::FrontMatterMissing { .. }));
    }

    #[test]
    fn test_unclosed_fence_is_rejected() {
        let err = parse("+++\ntitle = \"Hello\"\n").unwrap_err();
        assert!(matches!(err, QuillpressError::FrontMatterMissing { .. }));
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let err = parse("+++\ncategories = [\"rust\"]\n+++\n").unwrap_err();
        assert!(matches!(err, QuillpressError::MissingTitle { .. }));
    }

    #[test]
    fn test_non_string_categories_are_rejected() {
        let err = parse("+++\ntitle = \"Hello\"\ncategories = [1, 2]\n+++\n").unwrap_err();
        assert!(matches!(err, QuillpressError::FrontMatter { .. }));

        let err = parse("+++\ntitle = \"Hello\"\ncategories = \"rust\"\n+++\n").unwrap_err();
        assert!(matches!(err, QuillpressError::FrontMatter { .. }));
    }

    #[test]
    fn test_category_labels_folds_empty_into_none() {
        let absent = parse("+++\ntitle = \"A\"\n+++\n").unwrap();
        assert_eq!(absent.category_labels(), None);

        let empty = parse("+++\ntitle = \"A\"\ncategories = []\n+++\n").unwrap();
        assert_eq!(empty.category_labels(), None);

        let labeled = parse("+++\ntitle = \"A\"\ncategories = [\"x\"]\n+++\n").unwrap();
        assert_eq!(labeled.category_labels().map(|l| l.len()), Some(1));
    }
}
