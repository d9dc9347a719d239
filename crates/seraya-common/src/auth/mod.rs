//! Admin authentication utilities

mod jwt;
mod password;

pub use jwt::{AdminToken, Claims, JwtService};
pub use password::{hash_password, verify_password, PasswordService};
