//! Weird Gloop API: exchange history and general RuneScape information
//!
//! See https://api.weirdgloop.org for the full documentation

use crate::network::{Client, Transport};

pub mod exchange;
pub mod runescape;
pub mod schema;

#[inline]
fn base_url<T: Transport>(client: &Client<T>, route: &str) -> String {
    format!("{}/{route}", client.config().weirdgloop_host)
}
