use crate::{Edge, Error};

/// How a load attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// Loading/error state of one edge.
///
/// Only [`EdgeState::begin`] and [`EdgeState::finish`] mutate it, so a state can never be
/// loading and displaying an error at the same time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeState {
    is_loading: bool,
    is_displaying_error: bool,
}

impl EdgeState {
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_displaying_error(&self) -> bool {
        self.is_displaying_error
    }

    /// Starts a load attempt: clears any displayed error and marks the edge as loading.
    ///
    /// Fails without touching the state if a load is already in flight.
    pub fn begin(&mut self, edge: Edge) -> Result<(), Error> {
        if self.is_loading {
            iswarn!(edge = edge.as_str(), "EdgeState::begin while already loading");
            return Err(Error::AlreadyLoading(edge));
        }
        self.is_displaying_error = false;
        self.is_loading = true;
        Ok(())
    }

    /// Ends the in-flight attempt. A failure leaves the error displayed until the next attempt.
    pub fn finish(&mut self, outcome: LoadOutcome) {
        debug_assert!(self.is_loading, "EdgeState::finish without a load in flight");
        self.is_loading = false;
        self.is_displaying_error = outcome == LoadOutcome::Failed;
    }
}

/// Both edge states. Each is owned by its edge; neither is ever reset by the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeStates {
    pub top: EdgeState,
    pub bottom: EdgeState,
}

impl EdgeStates {
    pub fn get(&self, edge: Edge) -> &EdgeState {
        match edge {
            Edge::Top => &self.top,
            Edge::Bottom => &self.bottom,
        }
    }

    pub fn get_mut(&mut self, edge: Edge) -> &mut EdgeState {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Bottom => &mut self.bottom,
        }
    }
}
