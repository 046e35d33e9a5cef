/// An event delivered over a [`Window`](crate::Window)'s event channel.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Event {
    /// The user asked to close the window.
    CloseRequested,
    /// The window's inner size changed, in physical pixels.
    Resized(u32, u32),
    Focused(bool),
    CursorMoved { x: f32, y: f32 },
}
