// View state of the applicant portal.
// The page model replaces the DOM; handlers only ever touch it through PortalView.

pub mod controller;
pub mod handlers;
pub mod markup;
pub mod page;
pub mod portal;
pub mod section;

pub use portal::PortalView;
