mod model;
mod repository;

pub use model::{NewZScoreDB, ZScoreDB};
pub use repository::ZScoreRepository;
