//! Fixed-order context models. A table of order 'k' maps every context of 'k'
//! consecutive digits to the counts of the digits that followed it.

use std::collections::HashMap;
use std::fmt;

use super::model::{Family, History, Model};
use crate::utils::distribution;
use crate::utils::thresholds::MIN_TABLE_LEN;
use crate::{Probabilities, NUM_DIGITS, UNIFORM};

/// The highest order that the tables are built for.
pub const MAX_ORDER: usize = 5;

/// A sequence of 1 to MAX_ORDER consecutive digits. Two keys are equal only if
/// they have the same order and the same digits in the same positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContextKey {
    digits: [u8; MAX_ORDER],
    order: u8,
}

impl ContextKey {
    pub fn from_slice(digits: &[u8]) -> Self {
        assert!(
            !digits.is_empty() && digits.len() <= MAX_ORDER,
            "Invalid context length"
        );
        let mut key = [0; MAX_ORDER];
        key[..digits.len()].copy_from_slice(digits);
        Self {
            digits: key,
            order: digits.len() as u8,
        }
    }

    /// Returns the key made of the last 'order' digits of 'data', if there
    /// are enough digits.
    pub fn suffix(data: &[u8], order: usize) -> Option<Self> {
        if order == 0 || order > MAX_ORDER || data.len() < order {
            return None;
        }
        Some(Self::from_slice(&data[data.len() - order..]))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.digits[..self.order as usize]
    }

    pub fn order(&self) -> usize {
        self.order as usize
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// The transition counts of a single order, and the normalized rows.
#[derive(Clone, Debug, Default)]
pub struct TransitionTable {
    order: usize,
    counts: HashMap<ContextKey, [u32; NUM_DIGITS]>,
    probabilities: HashMap<ContextKey, Probabilities>,
}

impl TransitionTable {
    /// Count every (context, next digit) pair in 'data'.
    pub fn build(data: &[u8], order: usize) -> Self {
        assert!((1..=MAX_ORDER).contains(&order), "Invalid order");
        let mut counts: HashMap<ContextKey, [u32; NUM_DIGITS]> = HashMap::new();

        if data.len() > order {
            for i in 0..data.len() - order {
                let key = ContextKey::from_slice(&data[i..i + order]);
                let next = data[i + order] as usize;
                counts.entry(key).or_insert([0; NUM_DIGITS])[next] += 1;
            }
        }

        let probabilities = counts
            .iter()
            .map(|(key, row)| (*key, normalize_row(row)))
            .collect();

        Self {
            order,
            counts,
            probabilities,
        }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the number of distinct contexts.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn counts(&self, key: &ContextKey) -> Option<&[u32; NUM_DIGITS]> {
        self.counts.get(key)
    }

    pub fn probabilities(&self, key: &ContextKey) -> Option<&Probabilities> {
        self.probabilities.get(key)
    }

    /// Returns the row of the context formed by the tail of 'data'.
    pub fn tail_probabilities(&self, data: &[u8]) -> Option<&Probabilities> {
        let key = ContextKey::suffix(data, self.order)?;
        self.probabilities(&key)
    }

    /// Returns the counts of the context formed by the tail of 'data'.
    pub fn tail_counts(&self, data: &[u8]) -> Option<&[u32; NUM_DIGITS]> {
        let key = ContextKey::suffix(data, self.order)?;
        self.counts(&key)
    }

    /// Iterate over the contexts and their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&ContextKey, &[u32; NUM_DIGITS])> {
        self.counts.iter()
    }
}

/// Rows with no observations stay all-zero.
fn normalize_row(row: &[u32; NUM_DIGITS]) -> Probabilities {
    let total: u32 = row.iter().sum();
    if total == 0 {
        return [0.0; NUM_DIGITS];
    }
    distribution::from_counts(row)
}

/// The tables of orders 1 to MAX_ORDER.
#[derive(Clone, Debug, Default)]
pub struct ContextTables {
    tables: Vec<TransitionTable>,
}

impl ContextTables {
    /// Build all of the tables. Returns an empty set of tables if the sequence
    /// is too short for the highest order.
    pub fn build(data: &[u8]) -> Self {
        if data.len() < MIN_TABLE_LEN {
            return Self::default();
        }
        let tables = (1..=MAX_ORDER)
            .map(|order| TransitionTable::build(data, order))
            .collect();
        Self { tables }
    }

    /// Returns the table of order 'order', if it was built.
    pub fn order(&self, order: usize) -> Option<&TransitionTable> {
        if order == 0 {
            return None;
        }
        self.tables.get(order - 1)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Predicts the next digit from the row of the last ORDER digits.
pub struct MarkovModel<'a, const ORDER: usize> {
    history: &'a History<'a>,
}

impl<'a, const ORDER: usize> Model<'a> for MarkovModel<'a, ORDER> {
    fn new(history: &'a History<'a>) -> Self {
        Self { history }
    }

    fn name(&self) -> &'static str {
        match ORDER {
            1 => "Markov 1st Order",
            2 => "Markov 2nd Order",
            3 => "Markov 3rd Order",
            4 => "Markov 4th Order",
            _ => "Markov 5th Order",
        }
    }

    fn family(&self) -> Family {
        Family::Pattern
    }

    fn predict(&self) -> Probabilities {
        self.history
            .tables()
            .order(ORDER)
            .and_then(|table| table.tail_probabilities(self.history.data()))
            .copied()
            .unwrap_or(UNIFORM)
    }
}

#[test]
fn test_alternating_table() {
    let data = [1, 2, 1, 2, 1, 2, 1];
    let tables = ContextTables::build(&data);
    let table = tables.order(1).unwrap();
    assert_eq!(table.len(), 2);
    let one = table.probabilities(&ContextKey::from_slice(&[1])).unwrap();
    let two = table.probabilities(&ContextKey::from_slice(&[2])).unwrap();
    assert_eq!(one[2], 1.0);
    assert_eq!(two[1], 1.0);
    assert_eq!(table.counts(&ContextKey::from_slice(&[1])).unwrap()[2], 3);
}

#[test]
fn test_context_key() {
    let a = ContextKey::from_slice(&[1, 2, 3]);
    let b = ContextKey::from_slice(&[1, 2, 3, 0]);
    assert_ne!(a, b);
    assert_eq!(a.to_string(), "1,2,3");
    assert_eq!(ContextKey::suffix(&[9, 1, 2, 3], 3), Some(a));
    assert_eq!(ContextKey::suffix(&[1, 2], 3), None);
}
