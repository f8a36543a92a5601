//! User accounts and authentication.

pub mod auth;
pub mod password;
pub mod types;

pub use auth::{authenticate, bootstrap_admin, register, AuthError};
pub use types::{Account, NewAccount, Registration};
