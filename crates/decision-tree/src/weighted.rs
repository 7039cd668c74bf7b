//! Weighted selection primitives.
//!
//! Selectors turn their children into a list of [`WeightedElement`]s,
//! normalize the weights with [`squeeze_weights`] or [`even_out`], and draw
//! one element with [`pick`].

use rand::Rng;

/// An element paired with its selection weight in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedElement<T> {
    pub element: T,
    pub weight: f32,
}

impl<T> WeightedElement<T> {
    /// Creates a weighted element, clamping the weight to `[0, 1]`.
    pub fn new(element: T, weight: f32) -> Self {
        Self {
            element,
            weight: clamp_weight(weight),
        }
    }
}

/// Clamps a weight to `[0, 1]`. NaN becomes 0.
#[inline]
pub fn clamp_weight(weight: f32) -> f32 {
    if weight.is_nan() {
        0.0
    } else {
        weight.clamp(0.0, 1.0)
    }
}

/// Sum of all weights in the list.
pub fn sum_weights<T>(list: &[WeightedElement<T>]) -> f32 {
    list.iter().map(|e| e.weight).sum()
}

/// Nudges the weights so they sum toward 1.
///
/// The gap `1 - sum` is split evenly and added to every weight (subtracted
/// when the weights already exceed 1), then each weight is re-clamped.
/// Relative order between weights is preserved.
pub fn squeeze_weights<T>(list: &mut [WeightedElement<T>]) {
    if list.is_empty() {
        return;
    }

    let extra = (1.0 - sum_weights(list)) / list.len() as f32;
    for element in list.iter_mut() {
        element.weight = clamp_weight(element.weight + extra);
    }
}

/// Gives every element the same weight, `1 / len`.
pub fn even_out<T>(list: &mut [WeightedElement<T>]) {
    if list.is_empty() {
        return;
    }

    let even = clamp_weight(1.0 / list.len() as f32);
    for element in list.iter_mut() {
        element.weight = even;
    }
}

/// Draws one element with probability proportional to its weight.
///
/// Roulette-wheel draw from the heaviest element to the lightest (ties keep
/// list order). Each step rolls in `[0, remaining)` and takes the element if
/// the roll falls under its weight. If rounding leaves nothing selected, the
/// lightest element is returned. Returns `None` only for an empty list.
pub fn pick<'a, T, R>(rng: &mut R, list: &'a [WeightedElement<T>]) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    let mut sorted: Vec<&WeightedElement<T>> = list.iter().collect();
    sorted.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    let mut remaining = sum_weights(list);
    for candidate in &sorted {
        let roll = rng.gen_range(0.0..1.0_f32) * remaining;
        if roll < candidate.weight {
            return Some(&candidate.element);
        }
        remaining -= candidate.weight;
    }

    sorted.last().map(|candidate| &candidate.element)
}
