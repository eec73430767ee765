//! Mutable state of one backtracking search

/// Candidate path plus visited markers.
///
/// `visited[v]` is true exactly when `v` is on `path`; only `push`, `pop`
/// and `reset` mutate either, which keeps the two in step.
#[derive(Debug, Clone)]
pub struct SearchState {
    path: Vec<usize>,
    visited: Vec<bool>,
}

impl SearchState {
    pub fn new(n: usize) -> Self {
        Self {
            path: Vec::with_capacity(n),
            visited: vec![false; n],
        }
    }

    /// Append `vertex` to the path and mark it visited.
    ///
    /// Returns false, leaving the state untouched, if it is already visited.
    pub fn push(&mut self, vertex: usize) -> bool {
        if self.visited[vertex] {
            return false;
        }
        self.visited[vertex] = true;
        self.path.push(vertex);
        true
    }

    /// Remove the last vertex from the path and unmark it
    pub fn pop(&mut self) -> Option<usize> {
        let vertex = self.path.pop()?;
        self.visited[vertex] = false;
        Some(vertex)
    }

    #[inline]
    pub fn is_visited(&self, vertex: usize) -> bool {
        self.visited[vertex]
    }

    /// True once every vertex is on the path
    pub fn is_complete(&self) -> bool {
        self.path.len() == self.visited.len()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Clear the path and all visited markers
    pub fn reset(&mut self) {
        while self.pop().is_some() {}
    }

    pub fn into_path(self) -> Vec<usize> {
        self.path
    }
}
