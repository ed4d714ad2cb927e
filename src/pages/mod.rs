pub mod board;
pub mod login;

pub use board::BoardPage;
pub use login::Login;
