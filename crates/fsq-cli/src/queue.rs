//! Duplicate-suppressing download queue
//!
//! Several categories share one icon (every "default" icon of a branch), and
//! a category can be reached more than once when selected roots nest. The
//! queue keeps the first category for each id and for each icon prefix.

use crate::error::Result;
use crate::selection::Selection;
use crate::taxonomy::{trace, TraceOptions};
use fsq_common::Category;
use std::collections::HashSet;
use tracing::{debug, trace as log_trace};

/// Ordered set of categories whose icons will be downloaded
#[derive(Debug, Default, Clone)]
pub struct DownloadQueue {
    entries: Vec<Category>,
    ids: HashSet<String>,
    prefixes: HashSet<String>,
}

impl DownloadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `category` unless an entry with the same id or the same icon
    /// prefix is already queued. Returns whether it was added.
    pub fn push(&mut self, category: &Category) -> bool {
        if self.ids.contains(&category.id) || self.prefixes.contains(&category.icon.prefix) {
            log_trace!(id = %category.id, name = %category.name, "Skipping duplicate icon");
            return false;
        }

        self.ids.insert(category.id.clone());
        self.prefixes.insert(category.icon.prefix.clone());
        self.entries.push(category.clone());
        true
    }

    /// Walk `categories` and queue every category the selection covers
    pub fn collect(categories: &[Category], selection: &Selection, max_depth: usize) -> Result<Self> {
        let mut queue = Self::new();

        trace(
            categories,
            &TraceOptions::quiet(max_depth),
            &mut std::io::sink(),
            |category, parents| {
                if selection.is_selected(category, parents) {
                    queue.push(category);
                }
            },
        )?;

        debug!(queued = queue.len(), "Collected download queue");
        Ok(queue)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Category> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a DownloadQueue {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::taxonomy::tests::{category, sample_tree};

    fn ids(queue: &DownloadQueue) -> Vec<&str> {
        queue.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_push_keeps_order() {
        let mut queue = DownloadQueue::new();
        assert!(queue.push(&category("b", "B", vec![])));
        assert!(queue.push(&category("a", "A", vec![])));
        assert_eq!(ids(&queue), vec!["b", "a"]);
    }

    #[test]
    fn test_push_rejects_same_id() {
        let mut queue = DownloadQueue::new();
        let mut first = category("a", "A", vec![]);
        first.icon.prefix = "https://x/categories_v2/one_".to_string();
        let mut second = category("a", "A again", vec![]);
        second.icon.prefix = "https://x/categories_v2/two_".to_string();

        assert!(queue.push(&first));
        assert!(!queue.push(&second));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().map(|c| c.name.as_str()), Some("A"));
    }

    #[test]
    fn test_push_rejects_same_icon_prefix() {
        let mut queue = DownloadQueue::new();
        let mut first = category("a", "A", vec![]);
        let mut second = category("b", "B", vec![]);
        first.icon.prefix = "https://x/categories_v2/food/default_".to_string();
        second.icon.prefix = first.icon.prefix.clone();
        second.icon.suffix = ".gif".to_string();

        assert!(queue.push(&first));
        assert!(!queue.push(&second));
        assert_eq!(ids(&queue), vec!["a"]);
    }

    #[test]
    fn test_collect_selected_subtree() {
        let tree = sample_tree();
        let queue = DownloadQueue::collect(&tree, &Selection::new(["food"]), 0).unwrap();
        assert_eq!(ids(&queue), vec!["food", "asian", "sushi", "pizza"]);
    }

    #[test]
    fn test_collect_nested_selection_has_no_duplicates() {
        let tree = sample_tree();
        let queue = DownloadQueue::collect(&tree, &Selection::new(["food", "asian"]), 0).unwrap();
        assert_eq!(ids(&queue), vec!["food", "asian", "sushi", "pizza"]);
    }

    #[test]
    fn test_collect_inner_selection() {
        let tree = sample_tree();
        let queue = DownloadQueue::collect(&tree, &Selection::new(["asian", "books"]), 0).unwrap();
        assert_eq!(ids(&queue), vec!["asian", "sushi", "books"]);
    }

    #[test]
    fn test_collect_respects_depth() {
        let tree = sample_tree();
        let queue = DownloadQueue::collect(&tree, &Selection::new(["food"]), 2).unwrap();
        assert_eq!(ids(&queue), vec!["food", "asian", "pizza"]);
    }

    #[test]
    fn test_collect_shared_default_icon() {
        let mut tree = sample_tree();
        let shared = "https://ss3.4sqi.net/img/categories_v2/food/default_".to_string();
        tree[0].icon.prefix = shared.clone();
        tree[0].categories[1].icon.prefix = shared;

        let queue = DownloadQueue::collect(&tree, &Selection::new(["food"]), 0).unwrap();
        assert_eq!(ids(&queue), vec!["food", "asian", "sushi"]);
    }

    #[test]
    fn test_collect_nothing_selected() {
        let tree = sample_tree();
        let queue = DownloadQueue::collect(&tree, &Selection::new(["missing"]), 0).unwrap();
        assert!(queue.is_empty());
        assert!(queue.into_vec().is_empty());
    }
}
