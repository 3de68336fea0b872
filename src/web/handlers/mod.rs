//! HTML rendering handlers for the form flow.

mod index;
mod redirect;
mod shorten;

pub use index::index_handler;
pub use redirect::{redirect_handler, redirect_target};
pub use shorten::shorten_form_handler;
