use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{LaunchMode, ToolInvocation};

/// Side effect observed by a test double.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Launched { mode: LaunchMode, invocation: ToolInvocation },
    Removed(PathBuf),
}

/// Shared, ordered log of side effects across test doubles.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    events: Arc<Mutex<Vec<Event>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Rendered command lines of every launch, in order.
    pub fn commands(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Launched { invocation, .. } => Some(invocation.to_string()),
                Event::Removed(_) => None,
            })
            .collect()
    }

    /// Launch modes of every launch, in order.
    pub fn modes(&self) -> Vec<LaunchMode> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Launched { mode, .. } => Some(mode),
                Event::Removed(_) => None,
            })
            .collect()
    }

    pub fn removed(&self) -> Vec<PathBuf> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Removed(path) => Some(path),
                Event::Launched { .. } => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}
