//! Distinct category labels across a post sequence.

use crate::post::Post;

/// Collect every distinct category label in use across `posts`.
///
/// Labels accumulate in first-seen scan order and the final collection is
/// sorted ascending before it is returned. Empty input, or input with no
/// categorized posts, yields an empty vector.
pub fn find_all_categories(posts: &[Post]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();

    for post in posts {
        if let Some(labels) = post.category_labels() {
            for label in labels {
                if !categories.contains(label) {
                    categories.push(label.clone());
                }
            }
        }
    }

    categories.sort();
    categories
}
