//! # Category Module
//!
//! Extracts and organizes category metadata across a post sequence.
//!
//! Two pure functions operate over the posts supplied by an
//! [`ArticleSource`](crate::source::ArticleSource):
//!
//! - [`find_all_categories`]: the distinct category labels in use, sorted
//!   ascending.
//! - [`all_categories_with_posts`]: posts grouped per category label, with
//!   an [`UNCATEGORIZED`] bucket for posts carrying no labels.
//!
//! Labels compare by natural string order, case- and whitespace-sensitive;
//! no normalization is performed. Both functions borrow their input and
//! compute results fresh on every call.
//!
//! ## Usage
//!
//! ```rust
//! use std::path::Path;
//!
//! use quillpress_core::category::{all_categories_with_posts, find_all_categories};
//! use quillpress_core::post::Post;
//!
//! # fn main() -> quillpress_core::Result<()> {
//! let posts = vec![
//!     Post::parse(
//!         Path::new("rust-week.md"),
//!         "+++\ntitle = \"Rust Week\"\ncategories = [\"rust\"]\n+++\n",
//!     )?,
//!     Post::parse(Path::new("hello.md"), "+++\ntitle = \"Hello\"\n+++\n")?,
//! ];
//!
//! assert_eq!(find_all_categories(&posts), vec!["rust"]);
//!
//! let groups = all_categories_with_posts(&posts);
//! assert_eq!(groups["rust"][0].title, "Rust Week");
//! assert_eq!(groups["Uncategorized"][0].title, "Hello");
//! # Ok(())
//! # }
//! ```

mod groups;
mod index;

// Re-exports
pub use groups::{all_categories_with_posts, UNCATEGORIZED};
pub use index::find_all_categories;
