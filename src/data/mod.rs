//! Input loading module

pub mod text;

pub use text::{load_friend_data, parse_friend_data, read_friend_data};
