use crate::Edge;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A load was requested for an edge that already has one in flight.
    #[error("load requested for the {0} edge while it is already loading")]
    AlreadyLoading(Edge),
}
