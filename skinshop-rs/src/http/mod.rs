//! HTTP layer: Axum router, handlers, and responses.
//!
//! Exposes the storefront catalog endpoints (`/api/countries`,
//! `/api/skins`), the shared-contract constants, and static assets.

mod error;
mod handlers;
mod responses;
mod state;

#[cfg(test)]
mod tests;

pub use handlers::router;
pub use state::AppState;
