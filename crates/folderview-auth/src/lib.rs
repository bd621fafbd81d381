//! # folderview-auth
//!
//! Resolves the owner identity behind each request from an HS256 bearer
//! token.

pub mod jwt;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
