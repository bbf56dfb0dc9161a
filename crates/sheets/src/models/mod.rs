//! Grid model returned by every [`GridSource`](crate::provider::GridSource).

mod grid;

pub use grid::{SheetGrid, ValueRange};
