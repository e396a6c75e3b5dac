//! Order-preserving subsampling of item sequences

use crate::algorithm::mask::{CurveParameters, DitheredCurve, generate_mask};
use crate::io::error::Result;
use std::iter::FusedIterator;
use tracing::debug;

/// Items whose positional mask decision is "keep", in their original order
#[derive(Debug, Clone)]
pub struct Prune<I> {
    items: I,
    mask: DitheredCurve,
}

impl<I: Iterator> Iterator for Prune<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for keep in self.mask.by_ref() {
            let item = self.items.next()?;
            if keep {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.mask.len()))
    }
}

impl<I: Iterator> FusedIterator for Prune<I> {}

/// Keep the subset of `items` selected by a dithered mask of the same length
///
/// The mask length is taken from the item count up front, so the iterator must
/// know its exact length. An empty input yields nothing without evaluating
/// the curve.
///
/// # Errors
///
/// Returns an error if the curve parameters fail validation
pub fn prune<I>(items: I, params: &CurveParameters) -> Result<Prune<I::IntoIter>>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    let items = items.into_iter();
    let mask = generate_mask(items.len(), params)?;
    debug!(items = items.len(), "Pruning sequence");
    Ok(Prune { items, mask })
}

/// Method-call form of [`prune`] for exact-size iterators
pub trait PruneExt: ExactSizeIterator + Sized {
    /// Keep the items selected by a dithered mask over this iterator
    ///
    /// # Errors
    ///
    /// Returns an error if the curve parameters fail validation
    fn prune(self, params: &CurveParameters) -> Result<Prune<Self>> {
        prune(self, params)
    }
}

impl<I: ExactSizeIterator> PruneExt for I {}
