// Game-side code: characters and the session that drives them

pub mod characters;
pub mod session;

pub use session::Game;
