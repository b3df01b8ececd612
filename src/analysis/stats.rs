//! Basic statistics of a sequence.

use crate::NUM_DIGITS;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SequenceStats {
    pub len: usize,
    /// The number of occurrences of each digit.
    pub frequency: [u32; NUM_DIGITS],
    pub mean: f64,
    pub last: Option<u8>,
}

impl SequenceStats {
    pub fn from_data(data: &[u8]) -> Self {
        let mut frequency = [0; NUM_DIGITS];
        let mut sum = 0u64;
        for d in data {
            frequency[*d as usize] += 1;
            sum += *d as u64;
        }
        let mean = if data.is_empty() {
            0.0
        } else {
            sum as f64 / data.len() as f64
        };
        Self {
            len: data.len(),
            frequency,
            mean,
            last: data.last().copied(),
        }
    }

    /// Returns the most frequent digit. Ties go to the lower digit.
    pub fn mode(&self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        let mut best = 0;
        for i in 1..NUM_DIGITS {
            if self.frequency[i] > self.frequency[best] {
                best = i;
            }
        }
        Some(best as u8)
    }
}
