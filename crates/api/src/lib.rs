#![forbid(unsafe_code)]

pub mod client;
pub mod entities;
pub mod error;

pub use client::{Api, HttpApi};
pub use error::ApiError;
pub use reqwest::StatusCode;
