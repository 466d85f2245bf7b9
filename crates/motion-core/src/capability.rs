/// How the page is being driven, decided once when effects are bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCapability {
    /// Hover-capable fine pointer (mouse, trackpad).
    Pointer,
    /// Anything else; treated as touch.
    Touch,
}

/// Media query that selects [`InputCapability::Pointer`].
pub const POINTER_MEDIA_QUERY: &str = "(hover: hover) and (pointer: fine)";

impl InputCapability {
    #[inline]
    pub fn from_media_match(hover_fine_pointer: bool) -> Self {
        if hover_fine_pointer {
            InputCapability::Pointer
        } else {
            InputCapability::Touch
        }
    }
}
