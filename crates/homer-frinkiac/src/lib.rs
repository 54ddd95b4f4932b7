//! Client for the Frinkiac frame/subtitle search service.
//!
//! Frinkiac indexes every Simpsons subtitle line against the frames it was
//! spoken over. This crate wraps its search, caption and image endpoints and
//! builds the URLs its meme renderer understands.

pub mod client;
pub mod error;
pub mod urls;

pub use client::{FrinkiacClient, FrinkiacConfig, MAX_SEARCH_RESULTS};
pub use error::{FrinkiacError, FrinkiacResult};
pub use urls::RendererUrls;
