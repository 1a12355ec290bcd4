/// Where an item should land in the viewport when scrolling to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// Item top at the viewport top.
    Start,
    Center,
    /// Item bottom at the viewport bottom.
    End,
    /// Scroll the least distance that makes the item fully visible; stay put if it already is.
    Auto,
}

/// A contiguous `[start_index, end_index)` span of item indexes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl WindowRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

/// The materialized slice of a list plus where it sits inside the spacer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    /// Indexes to render, buffer included.
    pub range: WindowRange,
    /// Distance from the spacer start to the first rendered item.
    pub offset: u64,
    /// Full extent of the spacer (`count * item_size`).
    pub total_extent: u64,
}

impl Window {
    pub fn start_index(&self) -> usize {
        self.range.start_index
    }

    pub fn end_index(&self) -> usize {
        self.range.end_index
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowItem {
    pub index: usize,
    /// Start offset in the scroll axis, relative to the spacer start.
    pub start: u64,
    pub size: u32,
}

impl WindowItem {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.size as u64)
    }
}
