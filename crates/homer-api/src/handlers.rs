//! Request handlers.

pub mod bestquote;
pub mod frinkiac;
pub mod health;
pub mod interpret;
pub mod memes;
pub mod presets;

pub use bestquote::*;
pub use frinkiac::*;
pub use health::*;
pub use interpret::*;
pub use memes::*;
pub use presets::*;
