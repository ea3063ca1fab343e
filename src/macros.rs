/// Implements [`crate::codec::FixedWidth`] for a primitive integer type.
///
/// The byte array width is derived from the type itself, so each invocation only names
/// the type:
///
/// ```rust, ignore
///  impl_fixed_width!(u16, i16, u32);
/// ```
macro_rules! impl_fixed_width {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl crate::codec::FixedWidth for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                const SIZE: usize = std::mem::size_of::<$ty>();

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }

                fn from_be_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_be_bytes(bytes)
                }

                fn to_le_bytes(self) -> Self::Bytes {
                    <$ty>::to_le_bytes(self)
                }

                fn to_be_bytes(self) -> Self::Bytes {
                    <$ty>::to_be_bytes(self)
                }
            }
        )+
    };
}
