//! Request middleware and extractors.
//!
//! - [`gate`]: the session gate guarding the admin namespace
//! - [`auth`]: the [`auth::AuthUser`] extractor for handlers behind the gate
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn dashboard(auth_user: AuthUser) -> impl IntoResponse {
//!     format!("hello subject {}", auth_user.subject_id())
//! }
//! ```

pub mod auth;
pub mod gate;
