mod model;
mod repository;

pub use model::{FScoreDB, NewFScoreDB};
pub use repository::FScoreRepository;
