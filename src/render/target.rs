/// Fill colours used by the painter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Fence,
    Apple,
    Tail,
    Head,
}

/// A drawing surface in screen space.
///
/// Screen x grows to the right and screen y grows upwards, so tile rows
/// map to negative y values.
pub trait RenderTarget {
    /// Wipe the previous frame
    fn clear(&mut self);

    /// Fill a `size` x `size` square whose top-left corner is `(x, y)`
    fn fill_square(&mut self, x: i32, y: i32, size: i32, color: Color);

    /// Fill a circle centred on `(cx, cy)`
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color);

    fn write_text(&mut self, x: i32, y: i32, text: &str);

    /// Show everything drawn since the last `clear`
    fn present(&mut self);
}

/// Target that discards everything; used when no output is wanted
#[derive(Debug, Default)]
pub struct NullTarget;

impl RenderTarget for NullTarget {
    fn clear(&mut self) {}

    fn fill_square(&mut self, _x: i32, _y: i32, _size: i32, _color: Color) {}

    fn fill_circle(&mut self, _cx: i32, _cy: i32, _radius: i32, _color: Color) {}

    fn write_text(&mut self, _x: i32, _y: i32, _text: &str) {}

    fn present(&mut self) {}
}
