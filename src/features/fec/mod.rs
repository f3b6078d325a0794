pub mod client;
pub mod dto;
pub mod helpers;

pub use client::FecClient;
pub use dto::{Chamber, CongressRow, PresidentRow};
