pub mod recommend;
pub mod report;
pub mod score;
