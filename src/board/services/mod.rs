//! Application services over the board registries.

mod shared;
mod store;

pub use shared::{SharedBoard, SharedBoardError};
pub use store::{BoardError, BoardResult, Store};
