//! Local UI chrome state: requests from the sidebar to the planner host.
//!
//! DESIGN
//! ======
//! The toolbar never touches the engine. It queues a placement request and
//! bumps `placement_seq`; the host watches the sequence number, drains the
//! queue, and applies each request in order.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use canvas::furniture::FurnitureKind;

/// UI state shared between the sidebar and the planner host.
#[derive(Clone, Debug, Default)]
pub struct PlannerUiState {
    /// Bumped on every placement request.
    pub placement_seq: u64,
    pending_placements: Vec<FurnitureKind>,
}

impl PlannerUiState {
    /// Queue a request to add one item of `kind`.
    pub fn request_placement(&mut self, kind: FurnitureKind) {
        self.pending_placements.push(kind);
        self.placement_seq = self.placement_seq.saturating_add(1);
    }

    /// Drain queued placement requests, oldest first.
    pub fn take_placements(&mut self) -> Vec<FurnitureKind> {
        std::mem::take(&mut self.pending_placements)
    }

    #[must_use]
    pub fn has_pending_placements(&self) -> bool {
        !self.pending_placements.is_empty()
    }
}
