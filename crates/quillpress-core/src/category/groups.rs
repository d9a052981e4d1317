//! Posts grouped under their category labels.

use std::collections::BTreeMap;

use crate::post::Post;

/// Bucket label for posts with no category labels
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Group `posts` under their category labels.
///
/// Every post with labels is appended to each listed label's bucket, one
/// append per occurrence - a post listing the same label twice lands in
/// that bucket twice. Posts with no labels go to the [`UNCATEGORIZED`]
/// bucket, which admits a given post at most once. After the scan each
/// bucket is sorted ascending by title and empty buckets are dropped, so
/// [`UNCATEGORIZED`] only shows up when unlabeled posts exist.
///
/// The `BTreeMap` keeps keys in ascending byte order; `"Uncategorized"`
/// sorts before lowercase labels.
pub fn all_categories_with_posts(posts: &[Post]) -> BTreeMap<String, Vec<&Post>> {
    let mut groups: BTreeMap<String, Vec<&Post>> = BTreeMap::new();
    groups.insert(UNCATEGORIZED.to_string(), Vec::new());

    for post in posts {
        match post.category_labels() {
            Some(labels) => {
                for label in labels {
                    groups.entry(label.clone()).or_default().push(post);
                }
            }
            None => {
                let bucket = groups.entry(UNCATEGORIZED.to_string()).or_default();
                if !bucket.contains(&post) {
                    bucket.push(post);
                }
            }
        }
    }

    for bucket in groups.values_mut() {
        bucket.sort_by(|a, b| a.title.cmp(&b.title));
    }

    groups.retain(|_, bucket| !bucket.is_empty());
    groups
}
