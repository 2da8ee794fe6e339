#![allow(non_snake_case)]
use num_traits::{Float, FromPrimitive, ToPrimitive};
use std::fmt::{Debug, Display, LowerExp};

/// Main trait for floating point types used in option vectors and
/// floating point solver parameters.
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent
/// trait bounds.  The `Send + Sync` bounds allow a resolver holding
/// floating point settings to be shared between threads.
pub trait FloatT:
    'static + Send + Sync + Float + Default + FromPrimitive + Display + LowerExp + Debug + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Sync
        + Float
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}

/// Trait for converting f64 constants to [`FloatT`](crate::algebra::FloatT)
///
/// This is used by the [resolver settings](crate::options::ResolverSettings)
/// and the [options vector](crate::options::OptionsVector) for converting
/// defaults of primitive type to [`FloatT`](crate::algebra::FloatT).

// NB: `AsFloatT` is a convenience trait for f64 constants
// so that we can do things like (500.).as_T() on constants,
// rather than the awful T::from_f64(500.).unwrap()
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T> AsFloatT<T> for $ty
        where
            T: FromPrimitive + 'static,
        {
            #[inline]
            fn as_T(&self) -> T {
                T::$ident(*self).unwrap()
            }
        }
    };
}
impl_as_FloatT!(f64, from_f64);

/// Integer interpretation of floating point option values.
///
/// Option vectors store integer quantities (iteration limits, thread
/// counts, enumeration codes) as floats.  These conversions return `None`
/// for values that are non-finite, fractional or out of range.
pub trait IntegralValue {
    /// Exact conversion to `i32`
    fn as_exact_i32(&self) -> Option<i32>;
    /// Exact conversion to `i64`
    fn as_exact_i64(&self) -> Option<i64>;
}

impl<T> IntegralValue for T
where
    T: Float + ToPrimitive,
{
    fn as_exact_i32(&self) -> Option<i32> {
        if !self.is_finite() || self.fract() != T::zero() {
            return None;
        }
        self.to_i32()
    }

    fn as_exact_i64(&self) -> Option<i64> {
        if !self.is_finite() || self.fract() != T::zero() {
            return None;
        }
        self.to_i64()
    }
}

#[test]
fn test_integral_value() {
    assert_eq!((3.0f64).as_exact_i32(), Some(3));
    assert_eq!((-7.0f32).as_exact_i64(), Some(-7));
    assert_eq!((2.5f64).as_exact_i32(), None);
    assert_eq!(f64::NAN.as_exact_i32(), None);
    assert_eq!(f64::INFINITY.as_exact_i64(), None);
    assert_eq!((1e12f64).as_exact_i32(), None);
    assert_eq!((1e12f64).as_exact_i64(), Some(1_000_000_000_000));
}
