//! Deferred-evaluation arithmetic over products of positive integers.
//!
//! A [Product] is kept as a list of factors and a [Ratio] as a pair of such lists. Nothing is
//! reduced to a number until [Ratio::evaluate] is called, at which point numerator and denominator
//! factors are paired off in ascending order so that the running value stays close to the final
//! result rather than passing through the (possibly unrepresentable) raw products.

use std::fmt::{Display, Formatter};
use std::ops::{Div, Mul};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    factors: Vec<u64>,
}
impl Product {
    pub fn factors(&self) -> &[u64] {
        &self.factors
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Concatenation of the two factor lists.
    pub fn multiply(&self, other: &Product) -> Product {
        let mut factors = Vec::with_capacity(self.factors.len() + other.factors.len());
        factors.extend_from_slice(&self.factors);
        factors.extend_from_slice(&other.factors);
        Product { factors }
    }

    /// Straight running product. Overflows to infinity once the product exceeds `f64::MAX`.
    pub fn evaluate(&self) -> f64 {
        self.factors.iter().map(|&factor| factor as f64).product()
    }

    fn sorted(&self) -> Vec<u64> {
        let mut factors = self.factors.clone();
        factors.sort_unstable();
        factors
    }
}

impl From<Vec<u64>> for Product {
    fn from(factors: Vec<u64>) -> Self {
        debug_assert!(
            factors.iter().all(|&factor| factor > 0),
            "factors must be positive: {factors:?}"
        );
        Self { factors }
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.factors.is_empty() {
            return write!(f, "1");
        }
        for (index, factor) in self.factors.iter().enumerate() {
            if index != 0 {
                write!(f, "·")?;
            }
            write!(f, "{factor}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ratio {
    pub numerator: Product,
    pub denominator: Product,
}
impl Ratio {
    pub fn new(numerator: Vec<u64>, denominator: Vec<u64>) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    pub fn multiply(&self, other: &Ratio) -> Ratio {
        Ratio {
            numerator: self.numerator.multiply(&other.numerator),
            denominator: self.denominator.multiply(&other.denominator),
        }
    }

    pub fn invert(&self) -> Ratio {
        Ratio {
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone(),
        }
    }

    pub fn divide(&self, other: &Ratio) -> Ratio {
        self.multiply(&other.invert())
    }

    /// Evaluates the ratio by sorting both factor lists in ascending order and accumulating
    /// `numerator[i] / denominator[i]` position by position. A list that runs out of factors
    /// contributes 1 for the remaining positions.
    pub fn evaluate(&self) -> f64 {
        let numerator = self.numerator.sorted();
        let denominator = self.denominator.sorted();
        let len = usize::max(numerator.len(), denominator.len());

        let mut value = 1.0;
        for index in 0..len {
            let top = numerator.get(index).copied().unwrap_or(1);
            let bottom = denominator.get(index).copied().unwrap_or(1);
            value *= top as f64 / bottom as f64;
        }
        value
    }

    /// Evaluates the numerator and denominator independently before dividing.
    pub fn evaluate_unpaired(&self) -> f64 {
        self.numerator.evaluate() / self.denominator.evaluate()
    }
}

impl Mul for Ratio {
    type Output = Ratio;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Div for Ratio {
    type Output = Ratio;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(&rhs)
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) / ({})", self.numerator, self.denominator)
    }
}
