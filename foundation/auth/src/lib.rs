mod bridge;
pub mod credentials;
pub mod error;
mod misc;
pub mod project;
pub mod token;
pub mod token_source;

pub use bridge::DefaultTokenSourceProvider;
pub use project::{project, Config, Project};
