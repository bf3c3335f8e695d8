use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{
    AchievementsController, AssistController, ContentController, LeaderboardController,
    ProgressController, QuizController, SessionController,
};

pub struct Router<'a> {
    achievements_controller: AchievementsController<'a>,
    content_controller: ContentController<'a>,
    assist_controller: AssistController<'a>,
    session_controller: SessionController<'a>,
    quiz_controller: QuizController<'a>,
    leaderboard_controller: LeaderboardController<'a>,
    progress_controller: ProgressController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            achievements_controller: AchievementsController::new(container),
            content_controller: ContentController::new(container),
            assist_controller: AssistController::new(container),
            session_controller: SessionController::new(container),
            quiz_controller: QuizController::new(container),
            leaderboard_controller: LeaderboardController::new(container),
            progress_controller: ProgressController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::List { kind } => self.content_controller.list(kind).await,
            Commands::Vocab { id } => self.assist_controller.vocabulary_example(id).await,
            Commands::Summarize { id } => self.assist_controller.summarize(id).await,
            Commands::Grammar { id } => self.assist_controller.grammar_examples(id).await,
            Commands::Explain { id } => self.assist_controller.explain(id).await,
            Commands::Converse => self.assist_controller.conversation_starter().await,
            Commands::Session => self.session_controller.run().await,
            Commands::Quiz { answers } => self.quiz_controller.quiz(answers).await,
            Commands::Leaderboard => self.leaderboard_controller.leaderboard().await,
            Commands::Progress { seed, completed } => {
                self.progress_controller.progress(seed, completed).await
            }
            Commands::Achievements => self.achievements_controller.achievements().await,
        }
    }
}
