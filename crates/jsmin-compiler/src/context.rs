//! Per-compilation context.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Options and the resources a compilation has touched.
#[derive(Debug, Clone, Default)]
pub struct CompileContext {
    verbose: bool,
    visited: HashSet<PathBuf>,
}

impl CompileContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report per-resource sizes at `info` rather than `debug`.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn add_visited(&mut self, resource: impl Into<PathBuf>) {
        self.visited.insert(resource.into());
    }

    pub fn is_visited(&self, resource: &Path) -> bool {
        self.visited.contains(resource)
    }

    pub fn clear_visited(&mut self) {
        self.visited.clear();
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
