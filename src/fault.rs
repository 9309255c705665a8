//! Probabilistic error injection.

use crate::config::ErrorRule;
use rand::Rng;

/// Decide whether this request fails with a simulated error.
///
/// Rules are checked in configured order with one uniform draw in [0,1)
/// each; the first rule whose probability exceeds its draw triggers and
/// the rest are not evaluated. Returns the triggered rule, if any.
pub fn evaluate<'a>(rules: &'a [ErrorRule], rng: &mut impl Rng) -> Option<&'a ErrorRule> {
    rules.iter().find(|rule| rng.gen::<f64>() < rule.probability)
}
