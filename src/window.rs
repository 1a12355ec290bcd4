use crate::extent::FixedExtent;
use crate::{Window, WindowRange};

/// Default number of extra items materialized on each side of the visible range.
pub const DEFAULT_BUFFER: usize = 3;

/// Computes which items to materialize for a fixed-size list.
///
/// The scroll offset is first clamped to `count * item_size - container_size`, so an offset
/// past the end behaves like a list scrolled to the bottom. The result always satisfies
/// `start_index <= end_index <= count`, and renders at most
/// `ceil(container_size / item_size) + 2 * buffer` items.
///
/// An empty list, a zero `item_size` or a zero `container_size` yields an empty window.
///
/// ```rust
/// use windowed_list::compute_window;
///
/// let w = compute_window(10_000, 100, 600, 2_050, 5);
/// assert_eq!((w.start_index(), w.end_index()), (15, 31));
/// assert_eq!(w.offset, 1_500);
/// assert_eq!(w.total_extent, 1_000_000);
/// ```
pub fn compute_window(
    count: usize,
    item_size: u32,
    container_size: u32,
    scroll_offset: u64,
    buffer: usize,
) -> Window {
    window_in(
        &FixedExtent::new(count, item_size),
        container_size,
        scroll_offset,
        buffer,
    )
}

pub(crate) fn window_in(
    extent: &FixedExtent,
    container_size: u32,
    scroll_offset: u64,
    buffer: usize,
) -> Window {
    let total_extent = extent.total();
    let Some((raw_start, visible_count)) = raw_span(extent, container_size, scroll_offset) else {
        return Window {
            range: WindowRange::default(),
            offset: 0,
            total_extent,
        };
    };

    let start_index = raw_start.saturating_sub(buffer);
    let end_index = raw_start
        .saturating_add(visible_count)
        .saturating_add(buffer)
        .min(extent.count());

    Window {
        range: WindowRange {
            start_index,
            end_index,
        },
        offset: extent.offset_of(start_index),
        total_extent,
    }
}

/// The range that intersects the viewport, without any buffer.
pub(crate) fn visible_range_in(
    extent: &FixedExtent,
    container_size: u32,
    scroll_offset: u64,
) -> WindowRange {
    let Some((raw_start, visible_count)) = raw_span(extent, container_size, scroll_offset) else {
        return WindowRange::default();
    };
    WindowRange {
        start_index: raw_start,
        end_index: raw_start
            .saturating_add(visible_count)
            .min(extent.count()),
    }
}

fn raw_span(
    extent: &FixedExtent,
    container_size: u32,
    scroll_offset: u64,
) -> Option<(usize, usize)> {
    if extent.is_degenerate() || container_size == 0 {
        return None;
    }
    let offset = scroll_offset.min(extent.max_scroll(container_size));
    let raw_start = extent.index_at(offset)?;
    Some((raw_start, extent.visible_count(container_size)))
}
