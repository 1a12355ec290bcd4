use crate::Windower;

/// Identifies the item at the top of the viewport, so the view can stay on it after the
/// sequence is replaced.
///
/// Typical use: loading older rows above a chat log or timeline without the content jumping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// Distance from the anchor item's start to the scroll offset.
    pub offset_in_item: u64,
}

/// Captures an anchor for the first visible item.
///
/// `key_for` maps an index of the *current* sequence to a stable identity. Returns `None` when
/// nothing is visible. The stored offset is always clamped, so `offset_in_item` stays below
/// the item size.
pub fn capture_first_visible_anchor<K>(
    w: &Windower,
    key_for: impl FnOnce(usize) -> K,
) -> Option<ScrollAnchor<K>> {
    let visible = w.visible_range();
    if visible.is_empty() {
        return None;
    }
    let index = visible.start_index;
    let start = w.item_start(index)?;
    let offset_in_item = w.scroll_offset().saturating_sub(start);
    debug_assert!(offset_in_item < w.item_size() as u64);
    Some(ScrollAnchor {
        key: key_for(index),
        offset_in_item,
    })
}

/// Scrolls so the anchored item sits where it was captured.
///
/// `key_to_index` maps a key to its index in the *new* sequence; call this after the count has
/// been updated. Returns `false` when the key is gone or out of range.
pub fn apply_anchor<K>(
    w: &mut Windower,
    anchor: &ScrollAnchor<K>,
    key_to_index: impl FnOnce(&K) -> Option<usize>,
) -> bool {
    let Some(index) = key_to_index(&anchor.key) else {
        wdebug!("apply_anchor: anchor key not found");
        return false;
    };
    let Some(start) = w.item_start(index) else {
        wwarn!(index, count = w.count(), "apply_anchor: index out of range");
        return false;
    };
    w.set_scroll_offset(start.saturating_add(anchor.offset_in_item));
    true
}
