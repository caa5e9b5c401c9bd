pub mod menu;
pub mod payload;
pub mod ports;
pub mod request;
