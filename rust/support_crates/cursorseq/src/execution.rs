//! Execution hint for the preprocessing passes of [`Except`](crate::except::Except)
//! and [`GroupBy`](crate::group_by::GroupBy).

/// How a preprocessing pass (sortedness check, lookup-set build, ordering
/// check) is executed.
///
/// The hint never changes results and never makes cursors shareable across
/// threads: a `Parallel` pass runs on the rayon pool and returns synchronously.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Execution {
    #[default]
    Sequential,
    Parallel,
}

impl Execution {
    pub fn is_parallel(self) -> bool {
        matches!(self, Execution::Parallel)
    }
}
