//! Probability of finding defective items when sampling a finite lot without replacement.
//! Evaluates the hypergeometric distribution from exact ratios of falling factorials and validates
//! it against a Monte Carlo simulation of the same draws.

pub mod comb;
pub mod compare;
pub mod dist;
pub mod experiment;
pub mod file;
pub mod hypergeometric;
pub mod mc;
pub mod print;
pub mod probs;
pub mod ratio;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
