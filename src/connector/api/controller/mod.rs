pub mod achievements_controller;
pub mod assist_controller;
pub mod content_controller;
pub mod leaderboard_controller;
pub mod progress_controller;
pub mod quiz_controller;
pub mod session_controller;

pub use achievements_controller::AchievementsController;
pub use assist_controller::AssistController;
pub use content_controller::ContentController;
pub use leaderboard_controller::LeaderboardController;
pub use progress_controller::ProgressController;
pub use quiz_controller::QuizController;
pub use session_controller::SessionController;
