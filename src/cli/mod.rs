use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List study content (vocabulary, passage, grammar, lesson; all when omitted)
    List { kind: Option<String> },

    /// Generate a fresh example sentence for a vocabulary word
    Vocab { id: String },

    /// Summarize a reading passage
    Summarize { id: String },

    /// Generate more examples for a grammar topic
    Grammar { id: String },

    /// Explain a lesson's core concept another way
    Explain { id: String },

    /// Suggest a conversation starter
    Converse,

    /// Trigger every assist for every item concurrently and report the final state
    Session,

    /// Grade quiz answers, e.g. --answer Q1=Read --answer Q3=Went
    Quiz {
        #[arg(short, long = "answer", value_parser = parse_answer)]
        answers: Vec<(String, String)>,
    },

    /// Show the ranked leaderboard
    Leaderboard,

    /// Show seeded lesson progress
    Progress {
        /// Seed for reproducible progress values
        #[arg(long)]
        seed: Option<u64>,

        /// Complete one part (25%) of a lesson; repeat to complete more
        #[arg(short, long = "complete", value_name = "LESSON")]
        completed: Vec<String>,
    },

    /// Show the achievement catalog
    Achievements,
}

/// Parse `QUESTION=OPTION`.
fn parse_answer(s: &str) -> Result<(String, String), String> {
    let (id, choice) = s
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=OPTION, got '{s}'"))?;
    let (id, choice) = (id.trim(), choice.trim());
    if id.is_empty() || choice.is_empty() {
        return Err(format!("expected QUESTION=OPTION, got '{s}'"));
    }
    Ok((id.to_string(), choice.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_answer_splits_on_first_equals() {
        assert_eq!(
            parse_answer("Q1=Read"),
            Ok(("Q1".to_string(), "Read".to_string()))
        );
        assert_eq!(
            parse_answer(" Q2 = a=b "),
            Ok(("Q2".to_string(), "a=b".to_string()))
        );
    }

    #[test]
    fn parse_answer_rejects_missing_parts() {
        assert!(parse_answer("Q1").is_err());
        assert!(parse_answer("=Read").is_err());
        assert!(parse_answer("Q1=").is_err());
    }
}
