pub mod knockout;
pub mod leaderboard;
pub mod predictions;
pub mod service;
pub mod standings;
pub mod validation;
