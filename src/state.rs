/// A lightweight, serializable snapshot of the viewport: its size and where it is scrolled to.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Restoring a
/// snapshot against a shorter list clamps the offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub container_size: u32,
    pub scroll_offset: u64,
}
