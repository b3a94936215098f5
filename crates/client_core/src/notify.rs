use std::collections::VecDeque;

use tracing::debug;

pub const DEFAULT_TOAST_LIMIT: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Bounded queue of pending toasts; the oldest is dropped once full.
#[derive(Debug, Clone)]
pub struct Toaster {
    limit: usize,
    pending: VecDeque<Toast>,
}

impl Toaster {
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            limit,
            pending: VecDeque::new(),
        }
    }

    pub fn push(&mut self, toast: Toast) {
        while self.pending.len() >= self.limit {
            if let Some(dropped) = self.pending.pop_front() {
                debug!(title = %dropped.title, "toast dropped by newer notification");
            }
        }
        self.pending.push_back(toast);
    }

    pub fn pending(&self) -> impl Iterator<Item = &Toast> {
        self.pending.iter()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn drain(&mut self) -> Vec<Toast> {
        self.pending.drain(..).collect()
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_LIMIT)
    }
}
