use serde::{Deserialize, Serialize};

use super::ContentItem;

/// One of the generative study assists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    VocabularyExample,
    PassageSummary,
    GrammarExamples,
    LessonExplanation,
    ConversationStarter,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::VocabularyExample,
        Feature::PassageSummary,
        Feature::GrammarExamples,
        Feature::LessonExplanation,
        Feature::ConversationStarter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::VocabularyExample => "vocabulary_example",
            Feature::PassageSummary => "passage_summary",
            Feature::GrammarExamples => "grammar_examples",
            Feature::LessonExplanation => "lesson_explanation",
            Feature::ConversationStarter => "conversation_starter",
        }
    }

    /// Label the presentation layer shows while a request is pending.
    pub fn pending_label(&self) -> &'static str {
        match self {
            Feature::VocabularyExample => "Generating example...",
            Feature::PassageSummary => "Summarizing...",
            Feature::GrammarExamples => "Generating...",
            Feature::LessonExplanation => "Explaining...",
            Feature::ConversationStarter => "Thinking of a topic...",
        }
    }

    pub fn is_keyless(&self) -> bool {
        matches!(self, Feature::ConversationStarter)
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a feature's in-flight marker currently points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InFlightMarker {
    Item(String),
    /// The conversation starter has no item; its marker is a plain flag.
    Keyless,
}

impl InFlightMarker {
    pub fn key(&self) -> Option<&str> {
        match self {
            InFlightMarker::Item(key) => Some(key),
            InFlightMarker::Keyless => None,
        }
    }

    pub fn matches(&self, key: Option<&str>) -> bool {
        self.key() == key
    }
}

/// The input of one assist invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistTrigger {
    Item(ContentItem),
    ConversationStarter,
}

impl AssistTrigger {
    pub fn feature(&self) -> Feature {
        match self {
            AssistTrigger::Item(ContentItem::Vocabulary(_)) => Feature::VocabularyExample,
            AssistTrigger::Item(ContentItem::Passage(_)) => Feature::PassageSummary,
            AssistTrigger::Item(ContentItem::Grammar(_)) => Feature::GrammarExamples,
            AssistTrigger::Item(ContentItem::Lesson(_)) => Feature::LessonExplanation,
            AssistTrigger::ConversationStarter => Feature::ConversationStarter,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            AssistTrigger::Item(item) => Some(item.id()),
            AssistTrigger::ConversationStarter => None,
        }
    }

    pub fn marker(&self) -> InFlightMarker {
        match self {
            AssistTrigger::Item(item) => InFlightMarker::Item(item.id().to_string()),
            AssistTrigger::ConversationStarter => InFlightMarker::Keyless,
        }
    }
}

impl From<ContentItem> for AssistTrigger {
    fn from(item: ContentItem) -> Self {
        AssistTrigger::Item(item)
    }
}

/// A stored generation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssistOutput {
    Text(String),
    Lines(Vec<String>),
}

impl AssistOutput {
    /// Shape raw generated text for `feature`. Grammar examples are kept as one
    /// entry per non-blank line; everything else is stored verbatim.
    pub fn from_raw(feature: Feature, raw: &str) -> Self {
        match feature {
            Feature::GrammarExamples => AssistOutput::Lines(split_lines(raw)),
            _ => AssistOutput::Text(raw.to_string()),
        }
    }

    pub fn as_lines(&self) -> Option<&[String]> {
        match self {
            AssistOutput::Lines(lines) => Some(lines),
            AssistOutput::Text(_) => None,
        }
    }
}

impl std::fmt::Display for AssistOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssistOutput::Text(text) => write!(f, "{text}"),
            AssistOutput::Lines(lines) => write!(f, "{}", lines.join("\n")),
        }
    }
}

/// Split on line breaks, trim each line and drop the blank ones.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
