//! Category tree traversal
//!
//! [`trace`] walks the taxonomy depth-first in document order. Every visited
//! category is handed to a callback together with its ancestor chain, which
//! is how selection propagates from a chosen root to all of its descendants.
//!
//! ```
//! use fsq_cli::taxonomy::{trace, TraceOptions};
//! # let categories: Vec<fsq_common::Category> = Vec::new();
//!
//! let mut names = Vec::new();
//! trace(&categories, &TraceOptions::default(), &mut std::io::sink(), |category, parents| {
//!     names.push((parents.len(), category.name.clone()));
//! })
//! .unwrap();
//! ```

use fsq_common::Category;
use std::io::{self, Write};

/// How far and how loudly to walk the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceOptions {
    /// Number of levels to visit; 0 means no limit
    pub max_depth: usize,

    /// Append the category id to each verbose line
    pub show_id: bool,

    /// Write one line per visited category to the output
    pub verbose: bool,
}

impl TraceOptions {
    /// Options for printing the tree
    pub fn verbose(max_depth: usize, show_id: bool) -> Self {
        Self {
            max_depth,
            show_id,
            verbose: true,
        }
    }

    /// Options for a silent walk
    pub fn quiet(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Whether children of a category at `indent` are visited
    fn descends_below(&self, indent: usize) -> bool {
        self.max_depth == 0 || indent + 1 < self.max_depth
    }
}

/// Verbose line for a category: two spaces per level, a bullet, the name
/// and optionally the id in parentheses
pub fn render_line(category: &Category, indent: usize, show_id: bool) -> String {
    let mut line = format!("{}* {}", "  ".repeat(indent), category.name);
    if show_id {
        line.push_str(&format!(" ({})", category.id));
    }
    line
}

/// Walk `categories` depth-first, calling `foreach(category, parents)` for
/// every visited node
///
/// `parents` runs from the root down to the direct parent and is empty for
/// top-level categories. When `options.verbose` is set, each category's line
/// is written to `out` before its callback runs.
pub fn trace<W, F>(
    categories: &[Category],
    options: &TraceOptions,
    out: &mut W,
    mut foreach: F,
) -> io::Result<()>
where
    W: Write + ?Sized,
    F: FnMut(&Category, &[&Category]),
{
    let mut parents = Vec::new();
    walk(categories, options, 0, &mut parents, out, &mut foreach)
}

fn walk<'a, W, F>(
    categories: &'a [Category],
    options: &TraceOptions,
    indent: usize,
    parents: &mut Vec<&'a Category>,
    out: &mut W,
    foreach: &mut F,
) -> io::Result<()>
where
    W: Write + ?Sized,
    F: FnMut(&Category, &[&Category]),
{
    for category in categories {
        if options.verbose {
            writeln!(out, "{}", render_line(category, indent, options.show_id))?;
        }

        foreach(category, parents.as_slice());

        if options.descends_below(indent) && category.has_children() {
            parents.push(category);
            let result = walk(&category.categories, options, indent + 1, parents, out, foreach);
            parents.pop();
            result?;
        }
    }

    Ok(())
}
