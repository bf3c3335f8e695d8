use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AssistOutput, Feature, InFlightMarker};

/// A transition of one assist invocation.
///
/// Every invocation produces exactly one `Started` followed by exactly one
/// `Fulfilled` or `Failed` carrying the same `request_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssistEvent {
    Started {
        request_id: Uuid,
        feature: Feature,
        marker: InFlightMarker,
    },
    Fulfilled {
        request_id: Uuid,
        feature: Feature,
        marker: InFlightMarker,
        output: AssistOutput,
    },
    Failed {
        request_id: Uuid,
        feature: Feature,
        marker: InFlightMarker,
        /// Banner text, already prefixed with `API Error: `.
        message: String,
    },
}

impl AssistEvent {
    pub fn request_id(&self) -> Uuid {
        match self {
            AssistEvent::Started { request_id, .. }
            | AssistEvent::Fulfilled { request_id, .. }
            | AssistEvent::Failed { request_id, .. } => *request_id,
        }
    }

    pub fn feature(&self) -> Feature {
        match self {
            AssistEvent::Started { feature, .. }
            | AssistEvent::Fulfilled { feature, .. }
            | AssistEvent::Failed { feature, .. } => *feature,
        }
    }

    pub fn marker(&self) -> &InFlightMarker {
        match self {
            AssistEvent::Started { marker, .. }
            | AssistEvent::Fulfilled { marker, .. }
            | AssistEvent::Failed { marker, .. } => marker,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, AssistEvent::Started { .. })
    }
}

/// Session state of every assist feature: in-flight markers, result maps and
/// the shared error banner.
///
/// Only [`AssistState::apply`] mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssistState {
    in_flight: BTreeMap<Feature, InFlightMarker>,
    results: BTreeMap<Feature, BTreeMap<String, AssistOutput>>,
    conversation_starter: Option<String>,
    last_error: Option<String>,
}

impl AssistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &AssistEvent) {
        match event {
            AssistEvent::Started {
                feature, marker, ..
            } => {
                self.last_error = None;
                // One marker per feature; a newer trigger replaces an older one.
                self.in_flight.insert(*feature, marker.clone());
            }
            AssistEvent::Fulfilled {
                feature,
                marker,
                output,
                ..
            } => {
                match marker {
                    InFlightMarker::Item(key) => {
                        self.results
                            .entry(*feature)
                            .or_default()
                            .insert(key.clone(), output.clone());
                    }
                    InFlightMarker::Keyless => {
                        self.conversation_starter = Some(output.to_string());
                    }
                }
                self.in_flight.remove(feature);
            }
            AssistEvent::Failed {
                feature, message, ..
            } => {
                self.in_flight.remove(feature);
                self.last_error = Some(message.clone());
            }
        }
    }

    pub fn in_flight(&self, feature: Feature) -> Option<&InFlightMarker> {
        self.in_flight.get(&feature)
    }

    /// Whether the loading indicator for (`feature`, `key`) should show. Pass
    /// `None` as the key for the conversation starter.
    pub fn is_loading(&self, feature: Feature, key: Option<&str>) -> bool {
        self.in_flight(feature).is_some_and(|m| m.matches(key))
    }

    pub fn any_in_flight(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn result(&self, feature: Feature, key: &str) -> Option<&AssistOutput> {
        self.results.get(&feature).and_then(|r| r.get(key))
    }

    pub fn results(&self, feature: Feature) -> impl Iterator<Item = (&str, &AssistOutput)> + '_ {
        self.results
            .get(&feature)
            .into_iter()
            .flat_map(|r| r.iter().map(|(k, v)| (k.as_str(), v)))
    }

    pub fn result_count(&self) -> usize {
        self.results.values().map(BTreeMap::len).sum::<usize>()
            + usize::from(self.conversation_starter.is_some())
    }

    pub fn conversation_starter(&self) -> Option<&str> {
        self.conversation_starter.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(key: &str) -> InFlightMarker {
        InFlightMarker::Item(key.to_string())
    }

    fn started(feature: Feature, marker: InFlightMarker) -> AssistEvent {
        AssistEvent::Started {
            request_id: Uuid::new_v4(),
            feature,
            marker,
        }
    }

    fn fulfilled(feature: Feature, marker: InFlightMarker, text: &str) -> AssistEvent {
        AssistEvent::Fulfilled {
            request_id: Uuid::new_v4(),
            feature,
            marker,
            output: AssistOutput::from_raw(feature, text),
        }
    }

    fn failed(feature: Feature, marker: InFlightMarker, message: &str) -> AssistEvent {
        AssistEvent::Failed {
            request_id: Uuid::new_v4(),
            feature,
            marker,
            message: message.to_string(),
        }
    }

    #[test]
    fn started_sets_marker_and_clears_error() {
        let mut state = AssistState::new();
        state.apply(&failed(Feature::PassageSummary, item("R1"), "API Error: boom"));
        assert!(state.last_error().is_some());

        state.apply(&started(Feature::VocabularyExample, item("V1")));
        assert_eq!(state.in_flight(Feature::VocabularyExample), Some(&item("V1")));
        assert!(state.is_loading(Feature::VocabularyExample, Some("V1")));
        assert!(!state.is_loading(Feature::VocabularyExample, Some("V2")));
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn fulfilled_writes_result_and_clears_marker() {
        let mut state = AssistState::new();
        state.apply(&started(Feature::VocabularyExample, item("V1")));
        state.apply(&fulfilled(Feature::VocabularyExample, item("V1"), "An example."));

        assert_eq!(state.in_flight(Feature::VocabularyExample), None);
        assert_eq!(
            state.result(Feature::VocabularyExample, "V1"),
            Some(&AssistOutput::Text("An example.".into()))
        );
    }

    #[test]
    fn failed_keeps_previous_result() {
        let mut state = AssistState::new();
        state.apply(&fulfilled(Feature::LessonExplanation, item("L1"), "first"));
        state.apply(&started(Feature::LessonExplanation, item("L1")));
        state.apply(&failed(Feature::LessonExplanation, item("L1"), "API Error: nope"));

        assert_eq!(
            state.result(Feature::LessonExplanation, "L1"),
            Some(&AssistOutput::Text("first".into()))
        );
        assert_eq!(state.last_error(), Some("API Error: nope"));
        assert!(!state.any_in_flight());
    }

    #[test]
    fn newer_trigger_overwrites_marker_and_settlement_clears_it() {
        let mut state = AssistState::new();
        state.apply(&started(Feature::GrammarExamples, item("G1")));
        state.apply(&started(Feature::GrammarExamples, item("G2")));
        assert!(state.is_loading(Feature::GrammarExamples, Some("G2")));
        assert!(!state.is_loading(Feature::GrammarExamples, Some("G1")));

        // G1 settles first and clears the shared marker even though G2 is still out.
        state.apply(&fulfilled(Feature::GrammarExamples, item("G1"), "x\ny"));
        assert_eq!(state.in_flight(Feature::GrammarExamples), None);
        assert_eq!(
            state.result(Feature::GrammarExamples, "G1"),
            Some(&AssistOutput::Lines(vec!["x".into(), "y".into()]))
        );
    }

    #[test]
    fn keyless_feature_stores_single_starter() {
        let mut state = AssistState::new();
        state.apply(&started(Feature::ConversationStarter, InFlightMarker::Keyless));
        assert!(state.is_loading(Feature::ConversationStarter, None));

        state.apply(&fulfilled(
            Feature::ConversationStarter,
            InFlightMarker::Keyless,
            "What did you cook this week?",
        ));
        assert_eq!(state.conversation_starter(), Some("What did you cook this week?"));
        assert!(!state.is_loading(Feature::ConversationStarter, None));
        assert_eq!(state.result_count(), 1);
    }

    #[test]
    fn features_do_not_share_markers() {
        let mut state = AssistState::new();
        state.apply(&started(Feature::VocabularyExample, item("V1")));
        state.apply(&started(Feature::PassageSummary, item("R1")));
        state.apply(&failed(Feature::PassageSummary, item("R1"), "API Error: x"));

        assert!(state.is_loading(Feature::VocabularyExample, Some("V1")));
        assert_eq!(state.in_flight(Feature::PassageSummary), None);
    }

    #[test]
    fn event_serializes_with_type_tag() {
        let event = failed(Feature::PassageSummary, item("R1"), "API Error: x");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "failed");
        assert_eq!(json["feature"], "passage_summary");
        assert_eq!(json["marker"]["item"], "R1");
    }
}
