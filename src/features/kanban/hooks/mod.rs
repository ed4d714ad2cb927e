pub mod use_board;
pub mod use_drag;

pub use use_board::*;
pub use use_drag::*;
