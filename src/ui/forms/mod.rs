//! Form rendering module
//!
//! - `field_renderer`: email input with inline error line
//! - `email_form`: the dynamic email list, action panel and entered-emails list

mod email_form;
mod field_renderer;

pub use email_form::draw;
