use std::fmt::Debug;

use num_traits::Num;

/// A trait for types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Every implementor widens
/// losslessly into `f64`, which is the domain all distances are accumulated in.
pub trait IndexableNum:
    private::Sealed + Num + PartialOrd + Copy + Debug + Send + Sync + Into<f64>
{
}

impl IndexableNum for i8 {}
impl IndexableNum for u8 {}
impl IndexableNum for i16 {}
impl IndexableNum for u16 {}
impl IndexableNum for i32 {}
impl IndexableNum for u32 {}
impl IndexableNum for f32 {}
impl IndexableNum for f64 {}

/// Widen a coordinate into the distance domain.
#[inline]
pub(crate) fn widen<N: IndexableNum>(value: N) -> f64 {
    value.into()
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
