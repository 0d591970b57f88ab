pub mod controller;
pub mod player;
pub mod telemetry;
