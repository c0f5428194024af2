//! Parallel processing utilities

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Progress update information for per-file operations
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub current: usize,
    pub total: usize,
    pub message: String,
}

impl ProgressUpdate {
    /// Create a new progress update
    pub fn new(current: usize, total: usize, message: impl Into<String>) -> Self {
        Self {
            current,
            total,
            message: message.into(),
        }
    }

    /// Calculate progress percentage
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.current as f64 / self.total as f64) * 100.0
        }
    }
}

/// Map `f` over `items`, on the rayon pool when `parallel` is set.
///
/// Results keep the order of `items`. The callback sees one update per item
/// once that item is done; with a parallel run updates may arrive in any
/// order but `current` is strictly increasing.
pub fn process_with_progress<T, F, R, P>(
    items: Vec<T>,
    parallel: bool,
    f: F,
    progress_callback: P,
) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Send + Sync,
    P: Fn(ProgressUpdate) + Send + Sync,
{
    let total = items.len();
    let counter = AtomicUsize::new(0);

    let run = |item: T| {
        let result = f(item);
        let current = counter.fetch_add(1, Ordering::Relaxed) + 1;
        progress_callback(ProgressUpdate::new(
            current,
            total,
            format!("Processing file {}/{}", current, total),
        ));
        result
    };

    if parallel {
        items.into_par_iter().map(run).collect()
    } else {
        items.into_iter().map(run).collect()
    }
}
