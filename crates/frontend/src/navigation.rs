//! Client-side navigation

use std::cell::RefCell;

/// Moves the user to another page
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn push(&self, path: &str);
}

/// Navigator that records every visited path
#[derive(Debug)]
pub struct History {
    entries: RefCell<Vec<String>>,
}

impl History {
    /// Start at `path`
    pub fn starting_at(path: impl Into<String>) -> Self {
        Self {
            entries: RefCell::new(vec![path.into()]),
        }
    }

    /// The page currently shown
    pub fn current(&self) -> String {
        self.entries.borrow().last().cloned().unwrap_or_default()
    }

    /// Every visited path, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl Navigator for History {
    fn push(&self, path: &str) {
        tracing::debug!(path, "Navigating");
        self.entries.borrow_mut().push(path.to_string());
    }
}
