#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod grid;
pub mod marker;
pub mod overlay;
pub mod problem;
pub mod session;

pub use app::QuizApp;
pub use overlay::Verdict;
pub use problem::Problem;
pub use session::Session;
