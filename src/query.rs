//! Query engine over in-memory task collections.
//!
//! Pure functions: nothing here mutates the store document. Results are
//! re-sorted by ascending id after filtering, so output order never
//! depends on the order filters were applied in or on the order of the
//! underlying store.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::task::Task;

/// Filter specification for `list` and `recommend`.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Include completed tasks (the default excludes them).
    pub include_done: bool,
    /// Keep tasks sharing at least one of these tags (OR semantics).
    pub tags: Vec<String>,
    /// Exact category match; `None` means unrestricted.
    pub category: Option<String>,
}

/// Apply completion, tag, and category filters, returning clones sorted
/// by ascending id.
pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    let mut matched: Vec<Task> = tasks
        .iter()
        .filter(|task| filter.include_done || !task.done)
        .filter(|task| {
            filter.tags.is_empty() || task.tags.iter().any(|tag| filter.tags.contains(tag))
        })
        .filter(|task| {
            filter
                .category
                .as_deref()
                .map_or(true, |category| task.category == category)
        })
        .cloned()
        .collect();
    sort_by_id(&mut matched);
    matched
}

/// Case-insensitive substring search over titles and tags, sorted by
/// ascending id.
pub fn search_tasks(tasks: &[Task], query: &str) -> Vec<Task> {
    let needle = query.to_lowercase();
    let mut matched: Vec<Task> = tasks
        .iter()
        .filter(|task| {
            task.title.to_lowercase().contains(&needle)
                || task
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();
    sort_by_id(&mut matched);
    matched
}

/// Sort tasks ascending by id.
pub fn sort_by_id(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| task.id);
}

/// Uniform sample without replacement of `min(count, candidates.len())`
/// tasks, re-sorted by ascending id for display.
///
/// A seed makes the draw deterministic for testing; without one the rng
/// is seeded from the OS.
pub fn sample_tasks(candidates: &[Task], count: usize, seed: Option<u64>) -> Vec<Task> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut pool: Vec<Task> = candidates.to_vec();
    pool.shuffle(&mut rng);
    pool.truncate(count.min(candidates.len()));
    sort_by_id(&mut pool);
    pool
}
