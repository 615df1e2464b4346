//! In-memory to-do list.

/// Ordered list of task descriptions.
///
/// Descriptions are trimmed on insert. Empty and duplicate entries are
/// ignored so a picked suggestion can be added without checking first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<String>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task. Returns `false` if it was empty or already listed.
    pub fn add(&mut self, task: &str) -> bool {
        let task = task.trim();
        if task.is_empty() || self.tasks.iter().any(|t| t == task) {
            return false;
        }
        self.tasks.push(task.to_string());
        true
    }

    /// Remove the task at `index` (0-based), if any.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.tasks.len()).then(|| self.tasks.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tasks.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(String::as_str)
    }

    /// The most recently added task
    pub fn last(&self) -> Option<&str> {
        self.tasks.last().map(String::as_str)
    }
}
