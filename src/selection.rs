//! Uniform random pick over the watch list

use rand::seq::SliceRandom;
use rand::Rng;

/// The list had nothing to pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no items to select from")]
    EmptyList,
}

/// Pick one item with probability 1/N.
///
/// The previous pick is not excluded and there is no weighting.
pub fn pick_random<'a, R>(items: &'a [String], rng: &mut R) -> Result<&'a str, SelectionError>
where
    R: Rng + ?Sized,
{
    items.choose(rng).map(String::as_str).ok_or(SelectionError::EmptyList)
}
