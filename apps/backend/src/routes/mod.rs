pub mod answers;
pub mod scores;
