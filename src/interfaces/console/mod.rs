//! Terminal front end: the menu loop and the JSON pretty printer.

pub mod json_writer;
pub mod session;
