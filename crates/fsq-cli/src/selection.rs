//! Which categories get icons
//!
//! A category is selected when its own id, or the id of any ancestor, is in
//! the selection. Picking "Food" therefore selects every restaurant type
//! below it.

use crate::config::split_ids;
use fsq_common::Category;
use std::collections::HashSet;

/// Root categories downloaded when nothing else is configured
pub const DEFAULT_CATEGORY_IDS: &[&str] = &[
    "4d4b7105d754a06374d81259", // Food
    "4bf58dd8d48988d1e5931735", // Music Venues
    "4bf58dd8d48988d1a1941735", // College Cafeteria
    "4d4b7105d754a06376d81259", // Nightlife Spot
];

/// Set of selected root category ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma separated list of ids
    pub fn from_csv(ids: &str) -> Self {
        Self::new(split_ids(ids))
    }

    /// Whether `id` is one of the selected roots
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Whether `category` or one of its `parents` is selected
    pub fn is_selected(&self, category: &Category, parents: &[&Category]) -> bool {
        self.contains(&category.id) || parents.iter().any(|parent| self.contains(&parent.id))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY_IDS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::tests::category;

    #[test]
    fn test_default_selection() {
        let selection = Selection::default();
        assert_eq!(selection.len(), 4);
        assert!(selection.contains("4d4b7105d754a06374d81259"));
        assert!(!selection.contains("4d4b7105d754a06377d81259"));
    }

    #[test]
    fn test_selected_by_own_id() {
        let selection = Selection::new(["food"]);
        let food = category("food", "Food", vec![]);
        assert!(selection.is_selected(&food, &[]));
    }

    #[test]
    fn test_selected_through_ancestor() {
        let selection = Selection::new(["food"]);
        let food = category("food", "Food", vec![]);
        let asian = category("asian", "Asian", vec![]);
        let sushi = category("sushi", "Sushi", vec![]);

        assert!(selection.is_selected(&sushi, &[&food, &asian]));
        assert!(!selection.is_selected(&sushi, &[&asian]));
    }

    #[test]
    fn test_from_csv() {
        let selection = Selection::from_csv("a, b ,,c");
        assert_eq!(selection.len(), 3);
        assert!(selection.contains("b"));
        assert!(Selection::from_csv(" , ").is_empty());
    }
}
