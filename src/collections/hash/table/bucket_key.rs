/// A key which can be placed directly into one of a fixed number of buckets.
///
/// Implemented for all primitive integer types as `key mod cap`. Signed keys use the Euclidean
/// remainder, so negative keys are still placed within `0..cap`.
pub trait BucketKey {
    /// Returns the index of the bucket that this key belongs to, out of `cap` buckets.
    ///
    /// Implementations may assume that `cap` is not zero.
    fn bucket(&self, cap: usize) -> usize;
}

macro_rules! impl_bucket_key_unsigned {
    ($($int:ty),*) => {
        $(
            impl BucketKey for $int {
                fn bucket(&self, cap: usize) -> usize {
                    // u128 holds every unsigned key and every usize losslessly.
                    (*self as u128 % cap as u128) as usize
                }
            }
        )*
    };
}

macro_rules! impl_bucket_key_signed {
    ($($int:ty),*) => {
        $(
            impl BucketKey for $int {
                fn bucket(&self, cap: usize) -> usize {
                    (*self as i128).rem_euclid(cap as i128) as usize
                }
            }
        )*
    };
}

impl_bucket_key_unsigned!(u8, u16, u32, u64, u128, usize);
impl_bucket_key_signed!(i8, i16, i32, i64, i128, isize);
