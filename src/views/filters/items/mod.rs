// Rendering primitives consumed by the filter widget.

pub mod autocomplete;
pub mod checkbox_row;
