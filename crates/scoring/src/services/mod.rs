pub mod leaderboard;
pub mod ranking;
pub mod team_scoring;
