//! End-to-end assist flows: trigger, pending marker, settlement and the
//! shared error slot, driven by scripted clients.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use wordwise::{
    AssistError, AssistEvent, AssistOutput, AssistRegistry, Feature, GenerativeClient,
    GrammarTopic, InFlightMarker, Level, ReadingPassage, RequestAssistUseCase, VocabularyEntry,
};

/// Answers calls in order, each after its own delay.
struct ScriptedClient {
    replies: Mutex<VecDeque<(Duration, Result<String, AssistError>)>>,
}

impl ScriptedClient {
    fn new(replies: Vec<(Duration, Result<String, AssistError>)>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
        })
    }

    fn always(reply: Result<String, AssistError>, times: usize) -> Arc<Self> {
        Self::new(vec![(Duration::ZERO, reply); times])
    }
}

#[async_trait]
impl GenerativeClient for ScriptedClient {
    async fn generate(&self, _prompt: &str) -> Result<String, AssistError> {
        let (delay, reply) = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("more calls than scripted replies");
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        reply
    }
}

/// Holds every call until the gate is opened.
struct GatedClient {
    gate: Arc<Notify>,
    reply: Result<String, AssistError>,
}

#[async_trait]
impl GenerativeClient for GatedClient {
    async fn generate(&self, _prompt: &str) -> Result<String, AssistError> {
        self.gate.notified().await;
        self.reply.clone()
    }
}

fn ambitious() -> VocabularyEntry {
    VocabularyEntry::new(
        "V1",
        "Ambitious",
        "Having a strong desire and determination to succeed.",
        "She is ambitious about her career goals.",
        "Adjective",
    )
}

fn benevolent() -> VocabularyEntry {
    VocabularyEntry::new(
        "V2",
        "Benevolent",
        "Well-meaning and kindly.",
        "His benevolent actions helped many people in need.",
        "Adjective",
    )
}

fn use_case(client: Arc<dyn GenerativeClient>) -> RequestAssistUseCase {
    RequestAssistUseCase::new(client, Arc::new(AssistRegistry::new()))
}

#[tokio::test]
async fn test_vocabulary_example_is_stored_under_entry_id() {
    let client = ScriptedClient::always(Ok("She fought hard to win the scholarship.".into()), 1);
    let assist = use_case(client);

    let output = assist.vocabulary_example(&ambitious()).await.unwrap();
    assert_eq!(
        output,
        AssistOutput::Text("She fought hard to win the scholarship.".into())
    );

    let state = assist.registry().snapshot().await;
    assert_eq!(state.result(Feature::VocabularyExample, "V1"), Some(&output));
    assert_eq!(state.in_flight(Feature::VocabularyExample), None);
    assert_eq!(state.last_error(), None);
}

#[tokio::test]
async fn test_failure_keeps_results_and_sets_banner() {
    let client = ScriptedClient::new(vec![
        (Duration::ZERO, Ok("A first summary.".into())),
        (
            Duration::ZERO,
            Err(AssistError::service(429, "rate limited")),
        ),
    ]);
    let assist = use_case(client);
    let passage = ReadingPassage::new(
        "R1",
        "My Day",
        Level::Beginner,
        "Alex wakes at 7 AM, has breakfast, then school. Loves learning!",
    );

    assist.summarize_passage(&passage).await.unwrap();
    let err = assist.summarize_passage(&passage).await.unwrap_err();
    assert_eq!(err.banner(), "API Error: rate limited");

    let state = assist.registry().snapshot().await;
    assert_eq!(state.last_error(), Some("API Error: rate limited"));
    assert_eq!(
        state.result(Feature::PassageSummary, "R1"),
        Some(&AssistOutput::Text("A first summary.".into()))
    );
    assert!(!state.is_loading(Feature::PassageSummary, Some("R1")));
}

#[tokio::test]
async fn test_grammar_examples_are_split_into_lines() {
    let client = ScriptedClient::always(Ok("- Example one\n\n- Example two\n".into()), 1);
    let assist = use_case(client);
    let topic = GrammarTopic::new(
        "G2",
        "Verbs",
        "Action or state.",
        "E.g., run, is. Tenses: past, present, future.",
    );

    assist.grammar_examples(&topic).await.unwrap();

    let state = assist.registry().snapshot().await;
    assert_eq!(
        state.result(Feature::GrammarExamples, "G2"),
        Some(&AssistOutput::Lines(vec![
            "- Example one".into(),
            "- Example two".into()
        ]))
    );
}

#[tokio::test]
async fn test_repeated_trigger_overwrites_with_latest_result() {
    let client = ScriptedClient::always(Ok("Same again.".into()), 2);
    let assist = use_case(client);

    assist.vocabulary_example(&ambitious()).await.unwrap();
    let first = assist.registry().snapshot().await;
    assist.vocabulary_example(&ambitious()).await.unwrap();
    let second = assist.registry().snapshot().await;

    assert_eq!(
        first.result(Feature::VocabularyExample, "V1"),
        second.result(Feature::VocabularyExample, "V1")
    );
    assert_eq!(second.results(Feature::VocabularyExample).count(), 1);
    assert_eq!(second.in_flight(Feature::VocabularyExample), None);
}

#[tokio::test]
async fn test_marker_is_set_while_call_is_pending() {
    let gate = Arc::new(Notify::new());
    let assist = use_case(Arc::new(GatedClient {
        gate: gate.clone(),
        reply: Ok("Pending no more.".into()),
    }));
    let registry = assist.registry().clone();
    let mut events = registry.subscribe();

    let task = tokio::spawn({
        let assist = assist.clone();
        async move { assist.vocabulary_example(&ambitious()).await }
    });

    let started = events.recv().await.unwrap();
    assert!(matches!(started, AssistEvent::Started { .. }));
    assert_eq!(started.feature(), Feature::VocabularyExample);

    let pending = registry.snapshot().await;
    assert!(pending.is_loading(Feature::VocabularyExample, Some("V1")));
    assert!(!pending.is_loading(Feature::VocabularyExample, Some("V2")));
    assert!(pending.any_in_flight());
    assert_eq!(pending.result(Feature::VocabularyExample, "V1"), None);

    gate.notify_one();
    task.await.unwrap().unwrap();

    let settled = events.recv().await.unwrap();
    assert!(settled.is_settled());
    assert_eq!(settled.request_id(), started.request_id());

    let state = registry.snapshot().await;
    assert!(!state.any_in_flight());
    assert_eq!(
        state.result(Feature::VocabularyExample, "V1"),
        Some(&AssistOutput::Text("Pending no more.".into()))
    );
}

#[tokio::test]
async fn test_marker_is_cleared_after_failure() {
    let gate = Arc::new(Notify::new());
    let assist = use_case(Arc::new(GatedClient {
        gate: gate.clone(),
        reply: Err(AssistError::transport("connection reset")),
    }));
    let registry = assist.registry().clone();
    let mut events = registry.subscribe();

    let task = tokio::spawn({
        let assist = assist.clone();
        async move { assist.conversation_starter().await }
    });

    events.recv().await.unwrap();
    assert_eq!(
        registry.snapshot().await.in_flight(Feature::ConversationStarter),
        Some(&InFlightMarker::Keyless)
    );

    gate.notify_one();
    assert!(task.await.unwrap().is_err());

    let state = registry.snapshot().await;
    assert_eq!(state.in_flight(Feature::ConversationStarter), None);
    assert_eq!(state.conversation_starter(), None);
    assert_eq!(state.last_error(), Some("API Error: connection reset"));
}

#[tokio::test]
async fn test_faster_second_item_does_not_lose_slower_first_result() {
    let client = ScriptedClient::new(vec![
        (Duration::from_millis(150), Ok("Slow ambitious.".into())),
        (Duration::from_millis(10), Ok("Fast benevolent.".into())),
    ]);
    let assist = use_case(client);
    let (v1, v2) = (ambitious(), benevolent());

    let (a, b) = tokio::join!(assist.vocabulary_example(&v1), assist.vocabulary_example(&v2));
    a.unwrap();
    b.unwrap();

    let state = assist.registry().snapshot().await;
    assert_eq!(
        state.result(Feature::VocabularyExample, "V1"),
        Some(&AssistOutput::Text("Slow ambitious.".into()))
    );
    assert_eq!(
        state.result(Feature::VocabularyExample, "V2"),
        Some(&AssistOutput::Text("Fast benevolent.".into()))
    );
    assert_eq!(state.in_flight(Feature::VocabularyExample), None);
}

#[tokio::test]
async fn test_last_settled_call_wins_for_same_item() {
    let client = ScriptedClient::new(vec![
        (Duration::from_millis(150), Ok("Issued first, settled last.".into())),
        (Duration::from_millis(10), Ok("Issued second, settled first.".into())),
    ]);
    let assist = use_case(client);
    let entry = ambitious();

    let (a, b) = tokio::join!(
        assist.vocabulary_example(&entry),
        assist.vocabulary_example(&entry)
    );
    a.unwrap();
    b.unwrap();

    let state = assist.registry().snapshot().await;
    assert_eq!(
        state.result(Feature::VocabularyExample, "V1"),
        Some(&AssistOutput::Text("Issued first, settled last.".into()))
    );
    assert_eq!(state.in_flight(Feature::VocabularyExample), None);
}

#[tokio::test]
async fn test_features_settle_independently() {
    let client = ScriptedClient::new(vec![
        (
            Duration::from_millis(50),
            Err(AssistError::MalformedResponse),
        ),
        (Duration::from_millis(10), Ok("Hi! What did you eat today?".into())),
    ]);
    let assist = use_case(client);
    let entry = ambitious();

    let (vocab, starter) = tokio::join!(
        assist.vocabulary_example(&entry),
        assist.conversation_starter()
    );
    assert!(vocab.unwrap_err().is_malformed());
    starter.unwrap();

    let state = assist.registry().snapshot().await;
    assert_eq!(
        state.conversation_starter(),
        Some("Hi! What did you eat today?")
    );
    assert_eq!(state.results(Feature::VocabularyExample).count(), 0);
    assert_eq!(
        state.last_error(),
        Some("API Error: Invalid API response structure.")
    );
    assert!(!state.any_in_flight());
}
