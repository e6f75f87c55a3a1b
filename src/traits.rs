use num_integer::{Integer, Roots};
use num_modular::{ModularCoreOps, ModularPow, ModularUnaryOps};
use num_traits::{FromPrimitive, NumRef, RefNum, ToPrimitive, Unsigned};

/// Bit level access to the binary representation of an integer
pub trait BitTest {
    /// Return the exponent of the factor 2 in the number, usually implemented
    /// as trailing_zeros()
    fn trailing_zeros(&self) -> usize;
}

/// Primality test utilities on an integer
pub trait PrimalityUtils: Integer + Clone {
    /// Test if the integer is a strong probable prime to the given base
    /// (one round of the Miller-Rabin test). Intended for odd `self` ≥ 3;
    /// the shortcut paths of [crate::is_probable_prime] handle the rest.
    fn is_sprp(&self, base: Self) -> bool;
}

/// The collection of bounds every generic entry point of this crate puts on
/// its integer type. Satisfied by the primitive unsigned integers and by
/// `BigUint` when the `big-int` feature is enabled.
///
/// The `Unsigned` bound is what keeps negative numbers out of the
/// factorization and primality routines: their behavior is only defined for
/// n ≥ 0, so the invalid range is simply unrepresentable.
pub trait PrimalityBase:
    Integer
    + Roots
    + NumRef
    + Clone
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + BitTest
    + for<'r> ModularCoreOps<&'r Self, &'r Self, Output = Self>
    + for<'r> ModularUnaryOps<&'r Self, Output = Self>
    + for<'r> ModularPow<&'r Self, &'r Self, Output = Self>
{
}
impl<T> PrimalityBase for T where
    T: Integer
        + Roots
        + NumRef
        + Clone
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + BitTest
        + for<'r> ModularCoreOps<&'r T, &'r T, Output = T>
        + for<'r> ModularUnaryOps<&'r T, Output = T>
        + for<'r> ModularPow<&'r T, &'r T, Output = T>
{
}

/// Reference-side companion of [PrimalityBase].
pub trait PrimalityRefBase<Base>: RefNum<Base> + std::ops::Shr<usize, Output = Base> {}
impl<T, Base> PrimalityRefBase<Base> for T where
    T: RefNum<Base> + std::ops::Shr<usize, Output = Base>
{
}
