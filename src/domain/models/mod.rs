mod achievement;
mod assist_state;
mod content_item;
mod feature;
mod leaderboard;
mod progress;
mod quiz;

pub use achievement::*;
pub use assist_state::*;
pub use content_item::*;
pub use feature::*;
pub use leaderboard::*;
pub use progress::*;
pub use quiz::*;
