//! Client binding for the [Telegram Bot API](https://core.telegram.org/bots/api).
//!
//! The [`bot::Bot`] handle owns a token, a host endpoint and an HTTP
//! transport; one async method per remote operation serializes its parameters
//! as form values, performs a POST and decodes the uniform response envelope.

pub mod basic_types;
pub mod bot;
pub mod endpoints;
pub mod error;
pub mod params;
pub mod proto;
pub mod request;
pub mod response;
pub mod transport;

pub use crate::{
    bot::{Bot, BotConfig},
    error::Error,
};
