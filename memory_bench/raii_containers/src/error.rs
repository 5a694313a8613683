use std::alloc::Layout;

/// Failure to obtain storage from the global allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// The requested number of slots does not fit in a `Layout`.
    CapacityOverflow,
    /// The allocator returned null for a valid request.
    AllocFailed {
        capacity: usize,
        layout: Layout,
    },
}

impl AllocError {
    /// Escalates the error the way the standard collections do: overflow
    /// panics, allocator failure aborts through `handle_alloc_error`.
    pub(crate) fn handle(self) -> ! {
        match self {
            Self::CapacityOverflow => panic!("capacity overflow"),
            Self::AllocFailed { layout, .. } => std::alloc::handle_alloc_error(layout),
        }
    }
}

impl std::fmt::Display for AllocError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityOverflow => write!(f, "capacity overflow"),
            Self::AllocFailed { capacity, layout } => write!(
                f,
                "allocation of {} slots ({} bytes) failed",
                capacity,
                layout.size()
            ),
        }
    }
}

impl std::error::Error for AllocError {}
