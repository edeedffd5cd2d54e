pub mod answer;
pub mod attempt;
pub mod score;
pub mod trend;
