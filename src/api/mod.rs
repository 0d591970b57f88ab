pub mod client;
pub mod models;
pub mod playlists;
pub mod stats;
pub mod user;
