use std::ops::Add;

mod ordered_float;

pub use ordered_float::OrderedFloat;

/// Types that can be used as edge weights or capacities.
///
/// Weights are only partially ordered (floats), algorithms that need a total
/// order convert them to the associated [`Ord`](Weight::Ord) type.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    type Ord: Ord + From<Self> + Into<Self>;

    fn zero() -> Self;

    /// Whether the type cannot represent negative values.
    fn is_unsigned() -> bool;
}

/// Extraction of a weight from an edge attribute.
pub trait GetWeight<E, W>
where
    W: Weight,
{
    fn get(&self, edge: &E) -> W;
}

impl<F, E, W> GetWeight<E, W> for F
where
    F: Fn(&E) -> W,
    W: Weight,
{
    fn get(&self, edge: &E) -> W {
        (self)(edge)
    }
}

/// The edge attribute is the weight itself.
#[derive(Debug, Clone, Copy)]
pub struct Identity;

impl<E> GetWeight<E, E> for Identity
where
    E: Weight,
{
    fn get(&self, edge: &E) -> E {
        edge.clone()
    }
}

/// Every edge weighs one.
#[derive(Debug, Clone, Copy)]
pub struct Unit;

impl<E, W> GetWeight<E, W> for Unit
where
    W: Weight + From<u8>,
{
    fn get(&self, _edge: &E) -> W {
        W::from(1)
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                <$ty>::default()
            }

            fn is_unsigned() -> bool {
                false
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_ord_is_total() {
        let mut weights: Vec<<f64 as Weight>::Ord> =
            vec![3.0.into(), f64::NEG_INFINITY.into(), 0.5.into()];
        weights.sort();

        let weights: Vec<f64> = weights.into_iter().map(Into::into).collect();
        assert_eq!(weights, vec![f64::NEG_INFINITY, 0.5, 3.0]);
    }

    #[test]
    fn signedness() {
        assert!(u8::is_unsigned());
        assert!(usize::is_unsigned());
        assert!(!i64::is_unsigned());
        assert!(!f32::is_unsigned());
    }

    #[test]
    fn unit_weighs_one() {
        let weight: &dyn GetWeight<&str, u32> = &Unit;
        assert_eq!(weight.get(&"anything"), 1);
        assert_eq!(GetWeight::<(), f64>::get(&Unit, &()), 1.0);
    }
}
