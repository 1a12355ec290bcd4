//! A headless windowed list renderer for fixed-size items.
//!
//! Rendering every row of a 100k-item list is wasteful when only a screenful is visible. This
//! crate computes which contiguous slice of a list intersects the viewport (plus a small
//! buffer on each side), and where that slice sits inside a full-size spacer so the scrollbar
//! behaves as if every item were present.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the container size along the scroll axis (and resize notifications)
//! - the scroll offset
//! - a function that renders one item
//!
//! Entry points, from lowest to highest level:
//! - [`compute_window`]: the pure computation.
//! - [`Windower`]: viewport/scroll state, change notification, scroll-to-index.
//! - [`WindowedList`]: a [`Windower`] bound to a borrowed slice and a `render_item` function.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod extent;
mod list;
mod options;
mod state;
mod types;
mod window;
mod windower;


pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
pub use extent::FixedExtent;
pub use list::{Rendered, WindowedList};
pub use options::{OnChangeCallback, WindowOptions};
pub use state::ViewportState;
pub use types::{Align, Window, WindowItem, WindowRange};
pub use window::{DEFAULT_BUFFER, compute_window};
pub use windower::Windower;
