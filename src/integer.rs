//! Backend implementations for integers

use crate::traits::BitTest;

#[cfg(feature = "num-bigint")]
use num_bigint::BigUint;

macro_rules! impl_bittest_prim {
    ($($T:ty)*) => {$(
        impl BitTest for $T {
            #[inline]
            fn trailing_zeros(&self) -> usize {
                <$T>::trailing_zeros(*self) as usize
            }
        }
    )*}
}
impl_bittest_prim!(u8 u16 u32 u64 u128 usize);

#[cfg(feature = "num-bigint")]
impl BitTest for BigUint {
    #[inline]
    fn trailing_zeros(&self) -> usize {
        match BigUint::trailing_zeros(self) {
            Some(a) => a as usize,
            None => 0,
        }
    }
}
