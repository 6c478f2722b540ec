use tokio::sync::broadcast;

use crate::dto::sse::ServerEvent;

/// Depth of the viewer channel. A viewer that falls further behind than this
/// skips ahead instead of blocking writers.
const FEED_CAPACITY: usize = 16;

/// Fan-out pipe carrying score events to every connected viewer.
pub struct ScoreFeed {
    sender: broadcast::Sender<ServerEvent>,
}

impl ScoreFeed {
    /// Create an empty feed with no viewers attached.
    pub fn new() -> Self {
        let (sender, _receiver) = broadcast::channel(FEED_CAPACITY);
        Self { sender }
    }

    /// Attach a viewer. Only events published after this call are delivered.
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    /// Push an event to every attached viewer. Delivery is best effort; a
    /// feed without viewers drops the event without reporting an error.
    pub fn publish(&self, event: ServerEvent) {
        let _ = self.sender.send(event);
    }
}

impl Default for ScoreFeed {
    fn default() -> Self {
        Self::new()
    }
}
