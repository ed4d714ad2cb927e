pub mod board;
pub mod filter;
pub mod form;
pub mod seed;

pub use board::Board;
pub use filter::CardFilter;
pub use form::CardForm;
pub use seed::{demo_cards, team};

