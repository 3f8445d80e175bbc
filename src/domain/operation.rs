use std::collections::BTreeSet;
use std::fmt;

/// One of the five orchestrator operations.
///
/// Declaration order is execution order: when several operations are
/// requested together they always run in this sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    BuildPdf,
    BuildDocx,
    Clean,
    View,
    Archive,
}

impl Operation {
    /// All operations in execution order.
    pub const ALL: [Operation; 5] = [
        Operation::BuildPdf,
        Operation::BuildDocx,
        Operation::Clean,
        Operation::View,
        Operation::Archive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Operation::BuildPdf => "build-pdf",
            Operation::BuildDocx => "build-docx",
            Operation::Clean => "clean",
            Operation::View => "view",
            Operation::Archive => "archive",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The set of operations selected for one invocation.
///
/// Iteration yields each selected operation once, in declared order,
/// regardless of the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationPlan {
    operations: BTreeSet<Operation>,
}

impl OperationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `operation` when `selected` is true.
    pub fn select(mut self, operation: Operation, selected: bool) -> Self {
        if selected {
            self.operations.insert(operation);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Operation> + '_ {
        self.operations.iter().copied()
    }
}

impl FromIterator<Operation> for OperationPlan {
    fn from_iter<T: IntoIterator<Item = Operation>>(iter: T) -> Self {
        Self { operations: iter.into_iter().collect() }
    }
}
