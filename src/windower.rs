use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::extent::FixedExtent;
use crate::window::{visible_range_in, window_in};
use crate::{Align, ViewportState, Window, WindowItem, WindowOptions, WindowRange};

/// A headless windowing engine for fixed-size items.
///
/// It holds no UI objects and no items. Your adapter feeds it container sizes and scroll
/// offsets, then reads the current [`Window`] (or iterates it with
/// [`Self::for_each_window_item`]) to decide what to render.
///
/// The stored scroll offset never exceeds [`Self::max_scroll_offset`]: every input that can
/// move the maximum (count, item size, container size, scroll position) re-clamps it, so
/// [`Self::scroll_offset`] always describes what is on screen.
#[derive(Clone, Debug)]
pub struct Windower {
    options: WindowOptions,
    container_size: u32,
    scroll_offset: u64,
    // Last computed window; `on_change` fires when a refresh produces a different one.
    window: Window,
}

impl Windower {
    /// Creates a windower from `initial_container_size` and `initial_offset` (clamped).
    ///
    /// Construction does not call `on_change`.
    pub fn new(options: WindowOptions) -> Self {
        wdebug!(
            count = options.count,
            item_size = options.item_size,
            buffer = options.buffer,
            "Windower::new"
        );
        if options.item_size == 0 {
            wwarn!("Windower::new: item_size is zero, nothing will be rendered");
        }
        let mut w = Self {
            container_size: options.initial_container_size,
            scroll_offset: options.initial_offset,
            window: Window::default(),
            options,
        };
        w.scroll_offset = w.clamp_scroll_offset(w.scroll_offset);
        w.window = w.window_for(w.scroll_offset, w.container_size);
        w
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    fn extent(&self) -> FixedExtent {
        FixedExtent::new(self.options.count, self.options.item_size)
    }

    /// Re-clamps the offset and recomputes the window, notifying when it moved.
    fn refresh(&mut self) {
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
        let next = self.window_for(self.scroll_offset, self.container_size);
        if next == self.window {
            return;
        }
        wtrace!(
            start = next.start_index(),
            end = next.end_index(),
            offset = next.offset,
            "window changed"
        );
        self.window = next;
        if let Some(cb) = &self.options.on_change {
            cb(&next);
        }
    }

    /// Replaces the options wholesale. The current container size and scroll offset are kept
    /// (re-clamped against the new geometry); the `initial_*` fields only apply in [`Self::new`].
    pub fn set_options(&mut self, options: WindowOptions) {
        self.options = options;
        wdebug!(
            count = self.options.count,
            item_size = self.options.item_size,
            buffer = self.options.buffer,
            "Windower::set_options"
        );
        self.refresh();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&Window) + Send + Sync + 'static>) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    /// Updates the number of items, e.g. after the caller replaced its sequence.
    ///
    /// A shrinking list pulls the scroll offset back to the new maximum.
    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.refresh();
        wdebug!(count, scroll_offset = self.scroll_offset, "set_count");
    }

    pub fn item_size(&self) -> u32 {
        self.options.item_size
    }

    pub fn set_item_size(&mut self, item_size: u32) {
        if self.options.item_size == item_size {
            return;
        }
        if item_size == 0 {
            wwarn!("set_item_size: item_size is zero, nothing will be rendered");
        }
        self.options.item_size = item_size;
        self.refresh();
    }

    pub fn buffer(&self) -> usize {
        self.options.buffer
    }

    pub fn set_buffer(&mut self, buffer: usize) {
        self.options.buffer = buffer;
        self.refresh();
    }

    pub fn container_size(&self) -> u32 {
        self.container_size
    }

    /// Applies a container resize. A zero-size container is accepted and renders nothing.
    pub fn set_container_size(&mut self, container_size: u32) {
        wtrace!(container_size, "set_container_size");
        self.container_size = container_size;
        self.refresh();
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// Applies a scroll position reported by the UI (wheel, drag, keyboard).
    ///
    /// Returns the stored offset, which is `offset` clamped to `[0, max_scroll_offset]`.
    pub fn set_scroll_offset(&mut self, offset: u64) -> u64 {
        wtrace!(offset, "set_scroll_offset");
        self.scroll_offset = offset;
        self.refresh();
        self.scroll_offset
    }

    /// Scrolls by a signed delta (arrow keys, wheel ticks). Saturates at both ends.
    pub fn scroll_by(&mut self, delta: i64) -> u64 {
        let target = if delta < 0 {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll_offset.saturating_add(delta as u64)
        };
        self.set_scroll_offset(target)
    }

    /// Applies a container size and scroll offset together, with at most one `on_change`.
    ///
    /// The offset is clamped against the new container size, not the old one.
    pub fn apply_viewport_frame(&mut self, container_size: u32, offset: u64) {
        wtrace!(container_size, offset, "apply_viewport_frame");
        self.container_size = container_size;
        self.scroll_offset = offset;
        self.refresh();
    }

    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            container_size: self.container_size,
            scroll_offset: self.scroll_offset,
        }
    }

    pub fn restore_viewport_state(&mut self, state: ViewportState) {
        self.apply_viewport_frame(state.container_size, state.scroll_offset);
    }

    /// Full spacer extent (`count * item_size`).
    pub fn total_extent(&self) -> u64 {
        self.extent().total()
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.extent().max_scroll(self.container_size)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// The window for the current scroll offset and container size, buffer included.
    pub fn window(&self) -> Window {
        self.window
    }

    /// The window a hypothetical viewport would see. Does not touch the stored state.
    pub fn window_for(&self, scroll_offset: u64, container_size: u32) -> Window {
        window_in(
            &self.extent(),
            container_size,
            scroll_offset,
            self.options.buffer,
        )
    }

    /// Items intersecting the viewport, without the buffer.
    pub fn visible_range(&self) -> WindowRange {
        self.visible_range_for(self.scroll_offset, self.container_size)
    }

    pub fn visible_range_for(&self, scroll_offset: u64, container_size: u32) -> WindowRange {
        visible_range_in(&self.extent(), container_size, scroll_offset)
    }

    pub fn for_each_window_item(&self, f: impl FnMut(WindowItem)) {
        emit_items(&self.window, self.options.item_size, f);
    }

    pub fn for_each_window_item_for(
        &self,
        scroll_offset: u64,
        container_size: u32,
        f: impl FnMut(WindowItem),
    ) {
        let window = self.window_for(scroll_offset, container_size);
        emit_items(&window, self.options.item_size, f);
    }

    /// Collects the window items into `out` (clears `out` first).
    ///
    /// Prefer [`Self::for_each_window_item`] with a reused buffer on hot paths.
    pub fn collect_window_items(&self, out: &mut Vec<WindowItem>) {
        out.clear();
        self.for_each_window_item(|it| out.push(it));
    }

    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        self.extent().index_at(offset)
    }

    pub fn item_start(&self, index: usize) -> Option<u64> {
        (index < self.options.count).then(|| self.extent().offset_of(index))
    }

    pub fn item_end(&self, index: usize) -> Option<u64> {
        let start = self.item_start(index)?;
        Some(start.saturating_add(self.options.item_size as u64))
    }

    /// The offset that brings `index` (clamped to the last item) into view with `align`.
    ///
    /// The result is already clamped; an empty or zero-size list yields 0.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        let extent = self.extent();
        if extent.is_degenerate() {
            return 0;
        }
        let top = extent.offset_of(index.min(extent.count() - 1));
        let size = extent.item_size() as u64;
        let view = self.container_size as u64;
        let bottom = top.saturating_add(size);
        let flush_bottom = bottom.saturating_sub(view);

        let target = match align {
            Align::Start => top,
            Align::End => flush_bottom,
            Align::Center => top.saturating_add(size / 2).saturating_sub(view / 2),
            Align::Auto if top < self.scroll_offset => top,
            Align::Auto if bottom > self.scroll_offset.saturating_add(view) => flush_bottom,
            Align::Auto => self.scroll_offset,
        };
        self.clamp_scroll_offset(target)
    }

    /// Scrolls so `index` is placed per `align`. Returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset)
    }
}

fn emit_items(window: &Window, item_size: u32, mut f: impl FnMut(WindowItem)) {
    let mut start = window.offset;
    for index in window.start_index()..window.end_index() {
        f(WindowItem {
            index,
            start,
            size: item_size,
        });
        start = start.saturating_add(item_size as u64);
    }
}
