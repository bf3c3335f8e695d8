use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    id: String,
    word: String,
    definition: String,
    example: String,
    category: String,
}

impl VocabularyEntry {
    pub fn new(
        id: impl Into<String>,
        word: impl Into<String>,
        definition: impl Into<String>,
        example: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            definition: definition.into(),
            example: example.into(),
            category: category.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// The hand-written example shown until a generated one replaces it.
    pub fn example(&self) -> &str {
        &self.example
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingPassage {
    id: String,
    title: String,
    level: Level,
    content: String,
}

impl ReadingPassage {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        level: Level,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            level,
            content: content.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarTopic {
    id: String,
    title: String,
    description: String,
    details: String,
}

impl GrammarTopic {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            details: details.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    id: String,
    title: String,
    level: Level,
    duration: String,
    content: String,
    core_concept: String,
}

impl Lesson {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        level: Level,
        duration: impl Into<String>,
        content: impl Into<String>,
        core_concept: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            level,
            duration: duration.into(),
            content: content.into(),
            core_concept: core_concept.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn core_concept(&self) -> &str {
        &self.core_concept
    }
}

/// A piece of study content that an assist feature can be triggered on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentItem {
    Vocabulary(VocabularyEntry),
    Passage(ReadingPassage),
    Grammar(GrammarTopic),
    Lesson(Lesson),
}

impl ContentItem {
    pub fn id(&self) -> &str {
        match self {
            ContentItem::Vocabulary(v) => v.id(),
            ContentItem::Passage(p) => p.id(),
            ContentItem::Grammar(g) => g.id(),
            ContentItem::Lesson(l) => l.id(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ContentItem::Vocabulary(v) => v.word(),
            ContentItem::Passage(p) => p.title(),
            ContentItem::Grammar(g) => g.title(),
            ContentItem::Lesson(l) => l.title(),
        }
    }
}

impl From<VocabularyEntry> for ContentItem {
    fn from(value: VocabularyEntry) -> Self {
        ContentItem::Vocabulary(value)
    }
}

impl From<ReadingPassage> for ContentItem {
    fn from(value: ReadingPassage) -> Self {
        ContentItem::Passage(value)
    }
}

impl From<GrammarTopic> for ContentItem {
    fn from(value: GrammarTopic) -> Self {
        ContentItem::Grammar(value)
    }
}

impl From<Lesson> for ContentItem {
    fn from(value: Lesson) -> Self {
        ContentItem::Lesson(value)
    }
}

/// The kinds of study content in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Vocabulary,
    Passage,
    Grammar,
    Lesson,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Vocabulary,
        ContentKind::Passage,
        ContentKind::Grammar,
        ContentKind::Lesson,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Vocabulary => "vocabulary",
            ContentKind::Passage => "passage",
            ContentKind::Grammar => "grammar",
            ContentKind::Lesson => "lesson",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "vocabulary" | "vocab" | "words" => Some(ContentKind::Vocabulary),
            "passage" | "passages" | "reading" => Some(ContentKind::Passage),
            "grammar" => Some(ContentKind::Grammar),
            "lesson" | "lessons" => Some(ContentKind::Lesson),
            _ => None,
        }
    }

    pub fn of(item: &ContentItem) -> Self {
        match item {
            ContentItem::Vocabulary(_) => ContentKind::Vocabulary,
            ContentItem::Passage(_) => ContentKind::Passage,
            ContentItem::Grammar(_) => ContentKind::Grammar,
            ContentItem::Lesson(_) => ContentKind::Lesson,
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parse_accepts_aliases() {
        assert_eq!(ContentKind::parse("Vocab"), Some(ContentKind::Vocabulary));
        assert_eq!(ContentKind::parse("reading"), Some(ContentKind::Passage));
        assert_eq!(ContentKind::parse("lessons"), Some(ContentKind::Lesson));
        assert_eq!(ContentKind::parse("quiz"), None);
    }

    #[test]
    fn item_id_and_kind_follow_variant() {
        let item: ContentItem = Lesson::new(
            "L3",
            "Present Simple",
            Level::Beginner,
            "15 min",
            "For habits, routines, facts.",
            "Using the Present Simple tense.",
        )
        .into();
        assert_eq!(item.id(), "L3");
        assert_eq!(item.title(), "Present Simple");
        assert_eq!(ContentKind::of(&item), ContentKind::Lesson);
    }

    #[test]
    fn item_serializes_with_kind_tag() {
        let item: ContentItem = GrammarTopic::new("G1", "Nouns", "Person, place, thing, idea.", "").into();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "grammar");
        assert_eq!(json["title"], "Nouns");
    }
}
