// Filter UI building blocks: the selection state machine, the filter and
// group widgets, and the status leaves they fall back to.

pub mod filter;
pub mod group;
pub mod items;
pub mod selection;
pub mod status;

pub use filter::{filter, FilterProps, FilterResponse};
pub use group::{filter_group, FilterGroupProps, FilterGroupResponse};
pub use selection::{FilterState, Selection};

/// An available choice a user can select; `label` is the unique key within
/// one filter instance, `count` is display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub count: Option<u32>,
}

impl FilterOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            count: None,
        }
    }

    pub fn with_count(label: impl Into<String>, count: u32) -> Self {
        Self {
            label: label.into(),
            count: Some(count),
        }
    }
}
