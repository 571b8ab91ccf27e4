use std::ops::Add;

/// Capability bound for matrix cells.
///
/// `Default` supplies the value a cleared cell holds, `PartialEq` drives
/// structural equality and `Add` drives elementwise addition. Overflow follows
/// the element type: plain integers panic in debug builds, so wrap them in
/// [`std::num::Wrapping`] when silent wraparound is wanted.
pub trait Element: Clone + Default + PartialEq + Add<Output = Self> {}

impl<T> Element for T where T: Clone + Default + PartialEq + Add<Output = T> {}
