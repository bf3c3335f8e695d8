mod assist_registry;
mod browse_content;
mod lesson_progress;
mod list_achievements;
mod rank_leaderboard;
mod request_assist;
mod run_session;
mod score_quiz;

pub use assist_registry::*;
pub use browse_content::*;
pub use lesson_progress::*;
pub use list_achievements::*;
pub use rank_leaderboard::*;
pub use request_assist::*;
pub use run_session::*;
pub use score_quiz::*;
