//! Post sources.
//!
//! The category functions scan whatever ordered post sequence an
//! [`ArticleSource`] hands them. [`ContentDir`] is the filesystem source:
//! it walks a content directory, parses front matter, and applies the
//! publication policy (draft filtering, newest-first ordering).

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::config::ContentConfig;
use crate::error::{QuillpressError, Result};
use crate::post::Post;

const IGNORED_FILES: &[&str] = &[".DS_Store", ".gitignore", ".gitkeep", "_index.md"];

/// Supplies the ordered post sequence the category functions operate over
pub trait ArticleSource {
    /// Posts, already filtered and ordered by this source's policy
    fn sorted_articles(&self) -> Result<Vec<Post>>;
}

/// A content directory on disk, scanned per config rules
#[derive(Debug, Clone)]
pub struct ContentDir {
    root: PathBuf,
    config: ContentConfig,
    exclude_patterns: Vec<Pattern>,
}

impl ContentDir {
    pub fn new(root: impl Into<PathBuf>, config: ContentConfig) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(QuillpressError::ContentDirNotFound { path: root });
        }

        let exclude_patterns = config
            .exclude
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            root,
            config,
            exclude_patterns,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn should_ignore(&self, relative: &Path) -> bool {
        if let Some(name) = relative.file_name() {
            if IGNORED_FILES.contains(&name.to_string_lossy().as_ref()) {
                return true;
            }
        }

        let relative_str = relative.to_string_lossy();
        self.exclude_patterns.iter().any(|p| p.matches(&relative_str))
    }

    fn is_content_file(&self, path: &Path) -> bool {
        match path.extension() {
            Some(ext) => {
                let ext = ext.to_string_lossy();
                self.config.extensions.iter().any(|e| e == ext.as_ref())
            }
            None => false,
        }
    }

    /// Parse every content file under the root, unordered, drafts included.
    ///
    /// Any unparsable post fails the whole scan; a silently skipped post
    /// would corrupt the category aggregates built on top.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.root).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() || !self.is_content_file(path) {
                continue;
            }

            let relative = match path.strip_prefix(&self.root) {
                Ok(r) => r,
                Err(_) => continue,
            };

            if self.should_ignore(relative) {
                continue;
            }

            posts.push(Post::from_file(path)?);
        }

        Ok(posts)
    }
}

impl ArticleSource for ContentDir {
    /// Newest first, title ascending as tiebreak, undated posts last.
    /// Drafts are skipped unless the config opts in.
    fn sorted_articles(&self) -> Result<Vec<Post>> {
        let mut posts = self.load_posts()?;

        if !self.config.include_drafts {
            posts.retain(|p| !p.draft);
        }

        posts.sort_by(|a, b| match (&a.date, &b.date) {
            (Some(da), Some(db)) => db.cmp(da).then_with(|| a.title.cmp(&b.title)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.title.cmp(&b.title),
        });

        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_post(dir: &Path, name: &str, front_matter: &str) {
        let content = format!("+++\n{}\n+++\nBody.\n", front_matter);
        fs::write(dir.join(name), content).unwrap();
    }

    fn content_dir(temp: &TempDir, config: ContentConfig) -> ContentDir {
        ContentDir::new(temp.path(), config).unwrap()
    }

    #[test]
    fn test_missing_root_is_rejected() {
        let err = ContentDir::new("/nonexistent/content", ContentConfig::default()).unwrap_err();
        assert!(matches!(err, QuillpressError::ContentDirNotFound { .. }));
    }

    #[test]
    fn test_sorted_articles_newest_first() {
        let temp = TempDir::new().unwrap();
        write_post(temp.path(), "old.md", "title = \"Old\"\ndate = \"2024-01-01\"");
        write_post(temp.path(), "new.md", "title = \"New\"\ndate = \"2024-03-01\"");
        write_post(temp.path(), "undated.md", "title = \"Undated\"");

        let source = content_dir(&temp, ContentConfig::default());
        let posts = source.sorted_articles().unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();

        assert_eq!(titles, vec!["New", "Old", "Undated"]);
    }

    #[test]
    fn test_title_breaks_date_ties() {
        let temp = TempDir::new().unwrap();
        write_post(temp.path(), "b.md", "title = \"B\"\ndate = \"2024-01-01\"");
        write_post(temp.path(), "a.md", "title = \"A\"\ndate = \"2024-01-01\"");

        let source = content_dir(&temp, ContentConfig::default());
        let posts = source.sorted_articles().unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();

        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_drafts_are_skipped_by_default() {
        let temp = TempDir::new().unwrap();
        write_post(temp.path(), "live.md", "title = \"Live\"");
        write_post(temp.path(), "wip.md", "title = \"WIP\"\ndraft = true");

        let source = content_dir(&temp, ContentConfig::default());
        let posts = source.sorted_articles().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Live");
    }

    #[test]
    fn test_include_drafts_config() {
        let temp = TempDir::new().unwrap();
        write_post(temp.path(), "live.md", "title = \"Live\"");
        write_post(temp.path(), "wip.md", "title = \"WIP\"\ndraft = true");

        let config = ContentConfig {
            include_drafts: true,
            ..ContentConfig::default()
        };
        let posts = content_dir(&temp, config).sorted_articles().unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn test_non_content_files_are_ignored() {
        let temp = TempDir::new().unwrap();
        write_post(temp.path(), "post.md", "title = \"Post\"");
        fs::write(temp.path().join("notes.txt"), "not a post").unwrap();
        fs::write(temp.path().join("_index.md"), "section listing").unwrap();

        let source = content_dir(&temp, ContentConfig::default());
        let posts = source.load_posts().unwrap();
        assert_eq!(posts.len(), 1);
    }

    #[test]
    fn test_exclude_patterns() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("archive")).unwrap();
        write_post(temp.path(), "post.md", "title = \"Post\"");
        write_post(
            &temp.path().join("archive"),
            "ancient.md",
            "title = \"Ancient\"",
        );

        let config = ContentConfig {
            exclude: vec!["archive/**".to_string()],
            ..ContentConfig::default()
        };
        let posts = content_dir(&temp, config).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Post");
    }

    #[test]
    fn test_unparsable_post_fails_the_scan() {
        let temp = TempDir::new().unwrap();
        write_post(temp.path(), "good.md", "title = \"Good\"");
        write_post(temp.path(), "bad.md", "categories = [\"x\"]");

        let source = content_dir(&temp, ContentConfig::default());
        let err = source.load_posts().unwrap_err();
        assert!(matches!(err, QuillpressError::MissingTitle { .. }));
    }
}
