//! Client and operations for the quotation API.

mod auth;
mod client;
mod quotation;

pub use auth::{AuthError, Credentials, LoginResponse, login};
pub use client::{ApiError, Client, ClientError};
pub use quotation::get_quotation;
