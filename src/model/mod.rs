pub mod bands;
pub mod scale;
pub mod score;
