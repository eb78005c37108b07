use infinite_scroll::ScrollTo;

/// The scroll container an [`crate::InfiniteScrollView`] drives.
///
/// The view owns the container exclusively; nothing else should scroll it while the view is
/// alive.
pub trait ScrollContainer {
    /// Handle returned by [`ScrollContainer::scroll_responder`].
    type Responder;
    /// Host-specific property bag accepted by [`ScrollContainer::set_native_props`].
    type NativeProps;

    /// Scrolls to an absolute content offset. Must honour `scroll.animated == false`.
    fn scroll_to(&mut self, scroll: ScrollTo);

    fn scroll_responder(&self) -> Self::Responder;

    fn set_native_props(&mut self, props: Self::NativeProps);
}
