/// A pixel position, `x` growing right and `y` growing down from the
/// top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
