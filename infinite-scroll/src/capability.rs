use alloc::sync::Arc;

/// Whether more content may exist at an edge.
///
/// Either a fixed flag or a predicate that is evaluated fresh on every check, so an external
/// pagination source can report exhaustion without rebuilding the options.
#[derive(Clone)]
pub enum CanLoadMore {
    Constant(bool),
    Predicate(Arc<dyn Fn() -> bool + Send + Sync>),
}

impl CanLoadMore {
    pub fn predicate(f: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Arc::new(f))
    }

    pub fn evaluate(&self) -> bool {
        match self {
            Self::Constant(v) => *v,
            Self::Predicate(f) => f(),
        }
    }
}

impl Default for CanLoadMore {
    fn default() -> Self {
        Self::Constant(false)
    }
}

impl From<bool> for CanLoadMore {
    fn from(value: bool) -> Self {
        Self::Constant(value)
    }
}

impl core::fmt::Debug for CanLoadMore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}
