mod contact_form;
pub use contact_form::*;

mod portfolio;
pub use portfolio::*;

pub mod sections;
