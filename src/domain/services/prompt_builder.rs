//! Prompt templates for the assist features.
//!
//! Item fields are interpolated verbatim; nothing is escaped.

use crate::domain::{AssistTrigger, ContentItem, GrammarTopic, Lesson, ReadingPassage, VocabularyEntry};

pub const CONVERSATION_STARTER_PROMPT: &str =
    "Simple, engaging conversation starter/question for English learners.";

pub fn build_prompt(trigger: &AssistTrigger) -> String {
    match trigger {
        AssistTrigger::Item(ContentItem::Vocabulary(v)) => vocabulary_example_prompt(v),
        AssistTrigger::Item(ContentItem::Passage(p)) => passage_summary_prompt(p),
        AssistTrigger::Item(ContentItem::Grammar(g)) => grammar_examples_prompt(g),
        AssistTrigger::Item(ContentItem::Lesson(l)) => lesson_explanation_prompt(l),
        AssistTrigger::ConversationStarter => CONVERSATION_STARTER_PROMPT.to_string(),
    }
}

pub fn vocabulary_example_prompt(entry: &VocabularyEntry) -> String {
    format!(
        "Short, clear example for \"{}\" (means: {}) for English learners.",
        entry.word(),
        entry.definition()
    )
}

pub fn passage_summary_prompt(passage: &ReadingPassage) -> String {
    format!(
        "Summarize in 1-2 short sentences for learners: \"{}\"",
        passage.content()
    )
}

pub fn grammar_examples_prompt(topic: &GrammarTopic) -> String {
    format!(
        "2-3 simple examples for grammar topic \"{}\" (about: {}) for learners.",
        topic.title(),
        topic.description()
    )
}

pub fn lesson_explanation_prompt(lesson: &Lesson) -> String {
    format!(
        "Explain \"{}\" (lesson: \"{}\") simply for learners. Original: \"{}\"",
        lesson.core_concept(),
        lesson.title(),
        lesson.content()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Level;

    #[test]
    fn vocabulary_prompt_quotes_word() {
        let entry = VocabularyEntry::new(
            "V1",
            "Ambitious",
            "Having a strong desire and determination to succeed.",
            "",
            "Adjective",
        );
        assert_eq!(
            build_prompt(&AssistTrigger::Item(entry.into())),
            "Short, clear example for \"Ambitious\" (means: Having a strong desire and determination to succeed.) for English learners."
        );
    }

    #[test]
    fn passage_prompt_embeds_content() {
        let passage = ReadingPassage::new("R1", "My Day", Level::Beginner, "Alex wakes at 7 AM.");
        assert_eq!(
            passage_summary_prompt(&passage),
            "Summarize in 1-2 short sentences for learners: \"Alex wakes at 7 AM.\""
        );
    }

    #[test]
    fn grammar_prompt_uses_title_and_description() {
        let topic = GrammarTopic::new("G3", "Adjectives", "Describe nouns.", "E.g., tall.");
        assert_eq!(
            grammar_examples_prompt(&topic),
            "2-3 simple examples for grammar topic \"Adjectives\" (about: Describe nouns.) for learners."
        );
    }

    #[test]
    fn lesson_prompt_embeds_raw_quotes_unescaped() {
        let lesson = Lesson::new(
            "L1",
            "Greetings & Intro",
            Level::Beginner,
            "10 min",
            "Learn 'Hello' and \"Goodbye\".",
            "Basic greetings and self-introductions.",
        );
        assert_eq!(
            lesson_explanation_prompt(&lesson),
            "Explain \"Basic greetings and self-introductions.\" (lesson: \"Greetings & Intro\") simply for learners. Original: \"Learn 'Hello' and \"Goodbye\".\""
        );
    }

    #[test]
    fn conversation_prompt_is_fixed() {
        assert_eq!(
            build_prompt(&AssistTrigger::ConversationStarter),
            CONVERSATION_STARTER_PROMPT
        );
    }
}
