//! Basket position collection.

use serde::{Deserialize, Serialize};

use crate::Symbol;

/// An ordered collection of portfolio positions (ticker and share count).
///
/// Positions keep their insertion order. Adding shares for a ticker that is
/// already held accumulates onto the existing position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    positions: Vec<(Symbol, f64)>,
}

impl Basket {
    /// Create an empty basket.
    #[must_use]
    pub const fn new() -> Self {
        Self { positions: Vec::new() }
    }

    /// Add `shares` of `symbol`, accumulating onto an existing position.
    pub fn add(&mut self, symbol: Symbol, shares: f64) {
        if let Some((_, held)) = self.positions.iter_mut().find(|(s, _)| *s == symbol) {
            *held += shares;
        } else {
            self.positions.push((symbol, shares));
        }
    }

    /// Copy of this basket with `shares` more of `symbol`.
    #[must_use]
    pub fn with_added(&self, symbol: Symbol, shares: f64) -> Self {
        let mut basket = self.clone();
        basket.add(symbol, shares);
        basket
    }

    /// Shares held for `symbol`, if present.
    #[must_use]
    pub fn shares(&self, symbol: &Symbol) -> Option<f64> {
        self.positions.iter().find(|(s, _)| s == symbol).map(|(_, shares)| *shares)
    }

    /// Whether `symbol` is held.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.positions.iter().any(|(s, _)| s == symbol)
    }

    /// Iterate positions in insertion order.
    pub fn positions(&self) -> impl Iterator<Item = (&Symbol, f64)> {
        self.positions.iter().map(|(symbol, shares)| (symbol, *shares))
    }

    /// Iterate held symbols in insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.positions.iter().map(|(symbol, _)| symbol)
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl FromIterator<(Symbol, f64)> for Basket {
    fn from_iter<I: IntoIterator<Item = (Symbol, f64)>>(iter: I) -> Self {
        let mut basket = Self::new();
        for (symbol, shares) in iter {
            basket.add(symbol, shares);
        }
        basket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_accumulates_shares() {
        let mut basket = Basket::new();
        basket.add(Symbol::from("AAPL"), 10.0);
        basket.add(Symbol::from("AAPL"), 2.5);

        assert_eq!(basket.len(), 1);
        assert_eq!(basket.shares(&Symbol::from("AAPL")), Some(12.5));
    }

    #[test]
    fn preserves_insertion_order() {
        let basket: Basket =
            [(Symbol::from("MSFT"), 5.0), (Symbol::from("AAPL"), 10.0)].into_iter().collect();

        let order: Vec<&str> = basket.symbols().map(Symbol::as_str).collect();
        assert_eq!(order, ["MSFT", "AAPL"]);
    }

    #[test]
    fn with_added_leaves_original_untouched() {
        let basket: Basket = [(Symbol::from("JNJ"), 8.0)].into_iter().collect();
        let enlarged = basket.with_added(Symbol::from("JNJ"), 4.0);

        assert_eq!(basket.shares(&Symbol::from("JNJ")), Some(8.0));
        assert_eq!(enlarged.shares(&Symbol::from("JNJ")), Some(12.0));
    }

    #[test]
    fn with_added_inserts_new_symbol() {
        let basket: Basket = [(Symbol::from("JNJ"), 8.0)].into_iter().collect();
        let enlarged = basket.with_added(Symbol::from("PFE"), 3.0);

        assert!(!basket.contains(&Symbol::from("PFE")));
        assert_eq!(enlarged.shares(&Symbol::from("PFE")), Some(3.0));
        assert_eq!(enlarged.len(), 2);
    }

    #[test]
    fn missing_symbol_lookup() {
        let basket = Basket::new();
        assert!(basket.is_empty());
        assert_eq!(basket.shares(&Symbol::from("AAPL")), None);
    }
}
