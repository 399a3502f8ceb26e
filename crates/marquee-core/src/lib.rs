//! # Marquee Core
//!
//! Foundational types shared by every Marquee crate:
//!
//! - [`errors`]: the [`AppError`] type and its JSON response conversion
//! - [`password`]: bcrypt hashing and verification for admin credentials
//!
//! # Example
//!
//! ```ignore
//! use marquee_core::{AppError, verify_password};
//!
//! if !verify_password(&candidate, &account.password_hash)? {
//!     return Err(AppError::unauthorized("Invalid email or password"));
//! }
//! ```

pub mod errors;
pub mod password;

pub use errors::AppError;
pub use password::{hash_password, hash_password_with_cost, verify_password};
