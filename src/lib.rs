// Rules engine only; the terminal front end lives in main.rs.
pub mod board;
pub mod check;
pub mod engine;
pub mod error;
pub mod piece;
pub mod save;
pub mod square;
