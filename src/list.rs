use alloc::vec::Vec;

use crate::anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
use crate::{Window, WindowOptions, Windower};

/// Output of [`WindowedList::render`]: the rendered slice and where to place it.
///
/// Adapters size an invisible spacer to `window.total_extent` and translate `children` by
/// `window.offset` inside it, so the scrollbar matches a full, non-windowed render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered<R> {
    pub window: Window,
    pub children: Vec<R>,
}

impl<R> Rendered<R> {
    pub fn spacer_extent(&self) -> u64 {
        self.window.total_extent
    }

    pub fn offset(&self) -> u64 {
        self.window.offset
    }

    /// Absolute index of `children[0]`.
    pub fn first_index(&self) -> usize {
        self.window.start_index()
    }
}

/// A windowed view over a caller-owned slice.
///
/// The list never mutates `items`; it only reads the slice selected by the current window and
/// passes each element with its absolute index to `render_item`.
///
/// ```rust
/// use windowed_list::WindowedList;
///
/// let rows: Vec<String> = (0..10_000).map(|i| format!("row {i}")).collect();
/// let mut list = WindowedList::new(&rows, 100, 600, |row: &String, i| format!("{i}: {row}"))
///     .with_buffer(5);
///
/// list.on_scroll(2_050);
/// let out = list.render();
/// assert_eq!(out.children.len(), 16);
/// assert_eq!(out.offset(), 1_500);
/// assert_eq!(out.children[0], "15: row 15");
/// ```
pub struct WindowedList<'a, T, F> {
    items: &'a [T],
    render_item: F,
    windower: Windower,
}

impl<'a, T, F> WindowedList<'a, T, F> {
    pub fn new<R>(items: &'a [T], item_size: u32, container_size: u32, render_item: F) -> Self
    where
        F: Fn(&T, usize) -> R,
    {
        let options = WindowOptions::new(items.len(), item_size)
            .with_initial_container_size(container_size);
        Self::from_options(items, options, render_item)
    }

    /// Builds a list from full options. `options.count` is replaced by `items.len()`.
    pub fn from_options<R>(items: &'a [T], mut options: WindowOptions, render_item: F) -> Self
    where
        F: Fn(&T, usize) -> R,
    {
        options.count = items.len();
        Self {
            items,
            render_item,
            windower: Windower::new(options),
        }
    }

    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.windower.set_buffer(buffer);
        self
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Replaces the sequence. The next window is computed against the new length.
    pub fn set_items(&mut self, items: &'a [T]) {
        self.items = items;
        self.windower.set_count(items.len());
    }

    /// Captures an anchor for the first visible item, keyed by `key_of`.
    pub fn capture_anchor<K>(&self, key_of: impl FnOnce(&T) -> K) -> Option<ScrollAnchor<K>> {
        let item = self.items.get(self.windower.visible_range().start_index)?;
        capture_first_visible_anchor(&self.windower, |_| key_of(item))
    }

    /// Replaces the sequence and keeps the anchored item where it was.
    ///
    /// Returns `false` (leaving the clamped offset in place) when the anchored item is no
    /// longer present.
    pub fn replace_items_anchored<K: PartialEq>(
        &mut self,
        items: &'a [T],
        anchor: &ScrollAnchor<K>,
        key_of: impl Fn(&T) -> K,
    ) -> bool {
        self.set_items(items);
        apply_anchor(&mut self.windower, anchor, |key| {
            items.iter().position(|item| key_of(item) == *key)
        })
    }

    pub fn windower(&self) -> &Windower {
        &self.windower
    }

    pub fn windower_mut(&mut self) -> &mut Windower {
        &mut self.windower
    }

    /// Call this from the platform's scroll handler. Returns the clamped offset actually applied.
    pub fn on_scroll(&mut self, scroll_offset: u64) -> u64 {
        self.windower.set_scroll_offset(scroll_offset)
    }

    /// Call this from the platform's resize observer.
    pub fn on_resize(&mut self, container_size: u32) {
        self.windower.set_container_size(container_size);
    }

    pub fn window(&self) -> Window {
        self.windower.window()
    }

    pub fn spacer_extent(&self) -> u64 {
        self.windower.total_extent()
    }

    fn slice(&self, window: &Window) -> &'a [T] {
        let end = window.end_index().min(self.items.len());
        let start = window.start_index().min(end);
        &self.items[start..end]
    }

    /// Calls `f(absolute_index, item)` for every item in the current window.
    pub fn for_each_windowed(&self, mut f: impl FnMut(usize, &'a T)) {
        let window = self.window();
        let first = window.start_index();
        for (i, item) in self.slice(&window).iter().enumerate() {
            f(first + i, item);
        }
    }

    /// Renders the current window into `out` (clears `out` first) and returns the window.
    pub fn render_into<R>(&self, out: &mut Vec<R>) -> Window
    where
        F: Fn(&T, usize) -> R,
    {
        out.clear();
        let window = self.window();
        out.reserve(window.len());
        let first = window.start_index();
        for (i, item) in self.slice(&window).iter().enumerate() {
            out.push((self.render_item)(item, first + i));
        }
        window
    }

    pub fn render<R>(&self) -> Rendered<R>
    where
        F: Fn(&T, usize) -> R,
    {
        let mut children = Vec::new();
        let window = self.render_into(&mut children);
        Rendered { window, children }
    }
}

impl<T, F> core::fmt::Debug for WindowedList<'_, T, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowedList")
            .field("len", &self.items.len())
            .field("windower", &self.windower)
            .finish_non_exhaustive()
    }
}
