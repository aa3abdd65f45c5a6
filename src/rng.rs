//! Uniform integer helpers underlying shuffling and magic-deck card supply.

use rand::Rng;
use rand::distr::uniform::SampleUniform;

/// Returns a uniformly distributed integer in `[lower, upper]`, inclusive of
/// both bounds.
///
/// # Panics
///
/// Panics if `lower > upper`.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let n = twentyone::rng::random_integer(&mut rng, 0, 2);
/// assert!((0..=2).contains(&n));
/// ```
pub fn random_integer<T, R>(rng: &mut R, lower: T, upper: T) -> T
where
    T: SampleUniform + PartialOrd,
    R: Rng + ?Sized,
{
    rng.random_range(lower..=upper)
}

/// Returns a uniformly distributed integer in `[0, upper)`, exclusive of the
/// upper bound. Used for index selection during shuffling.
///
/// # Panics
///
/// Panics if `upper` is zero.
pub fn random_integer_up_to<R: Rng + ?Sized>(rng: &mut R, upper: usize) -> usize {
    rng.random_range(0..upper)
}
