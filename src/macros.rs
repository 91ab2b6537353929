//! Convenience construction macro for [`crate::BitArray`].

/// Builds a [`crate::BitArray`] from a literal list of bits, using the
/// process-wide default endian.
///
/// # Example
/// ```
/// use bitarray::bitarr;
///
/// let a = bitarr![true, false, true, true];
/// assert_eq!(a.to01(), "1011");
/// ```
#[macro_export]
macro_rules! bitarr {
    () => {
        $crate::BitArray::empty($crate::EndianArg::Default)
    };
    ($($bit:expr),+ $(,)?) => {
        $crate::BitArray::from_bits([$($bit),+], $crate::EndianArg::Default)
    };
}
