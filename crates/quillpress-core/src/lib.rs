pub mod category;
pub mod config;
pub mod error;
pub mod post;
pub mod source;

pub use category::{all_categories_with_posts, find_all_categories, UNCATEGORIZED};
pub use config::{Config, ContentConfig};
pub use error::{QuillpressError, Result};
pub use post::Post;
pub use source::{ArticleSource, ContentDir};
