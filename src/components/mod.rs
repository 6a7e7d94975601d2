//! UI Components for linkpage.
//!
//! Each component draws one part of the composed page view.

mod header;
mod icon;
mod link_cards;
mod share;
mod shell;
mod social_links;

pub use header::{Bio, PageFooter, PageHeader};
pub use icon::IconView;
pub use link_cards::LinkCards;
pub use share::ShareFeature;
pub use shell::PageShell;
pub use social_links::SocialLinks;
