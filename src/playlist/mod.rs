pub mod recommendations;
pub mod store;
pub mod url;
