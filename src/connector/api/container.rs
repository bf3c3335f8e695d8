use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::{
    AssistRegistry, BrowseContentUseCase, ContentRepository, GenerativeClient,
    LessonProgressUseCase, ListAchievementsUseCase, RankLeaderboardUseCase, RequestAssistUseCase,
    RunSessionUseCase, ScoreQuizUseCase,
};
use crate::cli::OutputFormat;
use crate::connector::adapter::{GeminiClient, MockGenerativeClient, StaticContentRepository};

pub struct ContainerConfig {
    /// Answer assists from canned text instead of calling the endpoint.
    pub mock_generation: bool,
    pub format: OutputFormat,
}

/// Wires adapters into use cases for one session. The assist registry is
/// shared by every use case the container hands out.
pub struct Container {
    content_repo: Arc<dyn ContentRepository>,
    client: Arc<dyn GenerativeClient>,
    registry: Arc<AssistRegistry>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let client: Arc<dyn GenerativeClient> = if config.mock_generation {
            debug!("Using mock generative client");
            Arc::new(MockGenerativeClient::new())
        } else {
            let gemini = GeminiClient::from_env();
            debug!("Using Gemini endpoint {}", gemini.url());
            if !gemini.has_api_key() {
                warn!(
                    "GEMINI_API_KEY is not set; requests to {} will likely be rejected",
                    GeminiClient::configured_base_url()
                );
            }
            Arc::new(gemini)
        };

        Self::with_client(config, client)
    }

    /// Build a container around an explicit client, e.g. a test double.
    pub fn with_client(config: ContainerConfig, client: Arc<dyn GenerativeClient>) -> Self {
        Self {
            content_repo: Arc::new(StaticContentRepository::new()),
            client,
            registry: Arc::new(AssistRegistry::new()),
            config,
        }
    }

    pub fn browse_use_case(&self) -> BrowseContentUseCase {
        BrowseContentUseCase::new(self.content_repo.clone())
    }

    pub fn assist_use_case(&self) -> RequestAssistUseCase {
        RequestAssistUseCase::new(self.client.clone(), self.registry.clone())
    }

    pub fn session_use_case(&self) -> RunSessionUseCase {
        RunSessionUseCase::new(self.content_repo.clone(), self.assist_use_case())
    }

    pub fn quiz_use_case(&self) -> ScoreQuizUseCase {
        ScoreQuizUseCase::new(self.content_repo.clone())
    }

    pub fn leaderboard_use_case(&self) -> RankLeaderboardUseCase {
        RankLeaderboardUseCase::new(self.content_repo.clone())
    }

    pub fn progress_use_case(&self) -> LessonProgressUseCase {
        LessonProgressUseCase::new(self.content_repo.clone())
    }

    pub fn achievements_use_case(&self) -> ListAchievementsUseCase {
        ListAchievementsUseCase::new(self.content_repo.clone())
    }

    pub fn registry(&self) -> Arc<AssistRegistry> {
        self.registry.clone()
    }

    pub fn format(&self) -> OutputFormat {
        self.config.format
    }
}
