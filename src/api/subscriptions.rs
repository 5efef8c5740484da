use tracing::trace;

use crate::render::Renderer;

use super::{BrushCommitted, ScatterPlotController};

pub type SubscriptionId = u64;

impl<R: Renderer> ScatterPlotController<R> {
    /// Registers a handler invoked once per brush commit, cleared or not.
    pub fn on_brush_committed(
        &mut self,
        handler: impl FnMut(&BrushCommitted) + 'static,
    ) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    /// Removes a handler. Returns `true` when removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscription, _)| *subscription != id);
        self.subscribers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub(super) fn dispatch_brush_committed(&mut self, event: &BrushCommitted) {
        trace!(subscribers = self.subscribers.len(), "dispatch brush commit");
        for (_, handler) in &mut self.subscribers {
            handler(event);
        }
    }
}
