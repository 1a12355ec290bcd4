use alloc::sync::Arc;

use crate::{DEFAULT_BUFFER, Window};

/// Called with the new window whenever scrolling, resizing or a data change moves it.
///
/// Scrolling within the same item does not change the window and does not fire.
pub type OnChangeCallback = Arc<dyn Fn(&Window) + Send + Sync>;

/// Configuration for [`crate::Windower`].
///
/// Cheap to clone: the callback lives behind an `Arc`.
#[derive(Clone)]
pub struct WindowOptions {
    /// Number of items in the sequence.
    pub count: usize,
    /// Extent of every item along the scroll axis. Zero renders nothing.
    pub item_size: u32,
    /// Extra items materialized before and after the visible range.
    pub buffer: usize,
    /// Container size to start with, before the first resize arrives.
    pub initial_container_size: u32,
    /// Scroll offset to start with. Clamped like any other offset.
    pub initial_offset: u64,
    pub on_change: Option<OnChangeCallback>,
}

impl WindowOptions {
    pub fn new(count: usize, item_size: u32) -> Self {
        Self {
            count,
            item_size,
            buffer: DEFAULT_BUFFER,
            initial_container_size: 0,
            initial_offset: 0,
            on_change: None,
        }
    }

    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn with_initial_container_size(mut self, container_size: u32) -> Self {
        self.initial_container_size = container_size;
        self
    }

    pub fn with_initial_offset(mut self, offset: u64) -> Self {
        self.initial_offset = offset;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Window) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("count", &self.count)
            .field("item_size", &self.item_size)
            .field("buffer", &self.buffer)
            .field("initial_container_size", &self.initial_container_size)
            .field("initial_offset", &self.initial_offset)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
