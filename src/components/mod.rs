//! Presentation state for pages.
//!
//! Components hold no server data beyond what they are built from. They turn
//! user intents into callback invocations and never issue requests themselves.

pub mod date_bounds;
pub mod filters;
pub mod pagination;
pub mod selector;
pub mod view;

pub use date_bounds::{BoundsSource, DateBounds};
pub use filters::ListFilters;
pub use pagination::{PageControl, Pagination};
pub use selector::{SelectOption, Selector};
pub use view::{Emptiable, View};
