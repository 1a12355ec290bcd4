/// Index <-> offset conversion for a strip of equally sized items.
///
/// Every place that turns a scroll offset into an item index (or back) goes through this type.
/// Supporting variable item sizes means replacing it with a prefix-sum model that answers the
/// same questions, typically `index_at` as a binary search over cumulative offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedExtent {
    count: usize,
    item_size: u32,
}

impl FixedExtent {
    pub fn new(count: usize, item_size: u32) -> Self {
        Self { count, item_size }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn item_size(&self) -> u32 {
        self.item_size
    }

    /// `true` when there is nothing that could ever be rendered.
    pub fn is_degenerate(&self) -> bool {
        self.count == 0 || self.item_size == 0
    }

    /// Full extent of the strip (the spacer size).
    pub fn total(&self) -> u64 {
        (self.count as u64).saturating_mul(self.item_size as u64)
    }

    /// Start offset of `index`. Indexes past the end map to the end of the strip.
    pub fn offset_of(&self, index: usize) -> u64 {
        (index.min(self.count) as u64).saturating_mul(self.item_size as u64)
    }

    /// Index of the item covering `offset`, clamped to the last item.
    ///
    /// Returns `None` for an empty or zero-sized strip.
    pub fn index_at(&self, offset: u64) -> Option<usize> {
        if self.is_degenerate() {
            return None;
        }
        let index = offset / self.item_size as u64;
        let last = self.count - 1;
        Some(usize::try_from(index).map_or(last, |i| i.min(last)))
    }

    /// Number of item slots needed to cover `container_size`, counting a partial slot as one.
    pub fn visible_count(&self, container_size: u32) -> usize {
        if self.item_size == 0 {
            return 0;
        }
        container_size.div_ceil(self.item_size) as usize
    }

    /// Largest scroll offset that still fills the viewport.
    pub fn max_scroll(&self, container_size: u32) -> u64 {
        self.total().saturating_sub(container_size as u64)
    }
}
