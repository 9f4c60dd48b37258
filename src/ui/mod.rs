pub mod auth;
pub mod common;
pub mod delay;
pub mod footer;
pub mod icon;
pub mod legal;
pub mod markdown;
pub mod navbar;
pub mod pages;
pub mod reveal;
pub mod sections;

pub use footer::Footer;
pub use icon::{Icon, icons};
pub use legal::{LegalModal, provide_legal_context};
pub use navbar::Navbar;
pub use reveal::RevealScript;
