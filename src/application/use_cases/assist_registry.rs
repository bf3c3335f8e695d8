use tokio::sync::{broadcast, Mutex};
use tracing::debug;

use crate::domain::{AssistEvent, AssistState};

const EVENT_CAPACITY: usize = 256;

/// Owns the session's [`AssistState`] and republishes every applied event.
///
/// Presentation layers either poll [`AssistRegistry::snapshot`] or subscribe
/// to the event stream.
pub struct AssistRegistry {
    state: Mutex<AssistState>,
    events: broadcast::Sender<AssistEvent>,
}

impl AssistRegistry {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: Mutex::new(AssistState::new()),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AssistEvent> {
        self.events.subscribe()
    }

    /// Apply `event` to the state, then publish it. Publishing happens under
    /// the lock so subscribers observe events in the order they were applied.
    pub async fn dispatch(&self, event: AssistEvent) {
        let mut state = self.state.lock().await;
        state.apply(&event);
        debug!(
            "AssistRegistry: applied {:?} for {} ({})",
            event.marker(),
            event.feature(),
            event.request_id()
        );
        // Sending only fails when nobody is subscribed.
        let _ = self.events.send(event);
    }

    pub async fn snapshot(&self) -> AssistState {
        self.state.lock().await.clone()
    }
}

impl Default for AssistRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssistOutput, Feature, InFlightMarker};
    use uuid::Uuid;

    #[tokio::test]
    async fn dispatch_updates_snapshot_and_notifies_subscribers() {
        let registry = AssistRegistry::new();
        let mut rx = registry.subscribe();
        let request_id = Uuid::new_v4();

        registry
            .dispatch(AssistEvent::Started {
                request_id,
                feature: Feature::PassageSummary,
                marker: InFlightMarker::Item("R1".into()),
            })
            .await;
        registry
            .dispatch(AssistEvent::Fulfilled {
                request_id,
                feature: Feature::PassageSummary,
                marker: InFlightMarker::Item("R1".into()),
                output: AssistOutput::Text("Alex likes school.".into()),
            })
            .await;

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert!(!first.is_settled());
        assert!(second.is_settled());
        assert_eq!(second.request_id(), request_id);

        let state = registry.snapshot().await;
        assert_eq!(state.in_flight(Feature::PassageSummary), None);
        assert_eq!(
            state.result(Feature::PassageSummary, "R1"),
            Some(&AssistOutput::Text("Alex likes school.".into()))
        );
    }

    #[tokio::test]
    async fn dispatch_without_subscribers_still_applies() {
        let registry = AssistRegistry::new();
        registry
            .dispatch(AssistEvent::Started {
                request_id: Uuid::new_v4(),
                feature: Feature::ConversationStarter,
                marker: InFlightMarker::Keyless,
            })
            .await;
        assert!(registry
            .snapshot()
            .await
            .is_loading(Feature::ConversationStarter, None));
    }
}
