//! Parameter accumulation for CSI and DCS sequences.
//!
//! CSI sequences have parameters separated by semicolons:
//! - A parameter with no digits is 0
//! - Digits accumulate into the current parameter (saturating at `u16::MAX`)
//! - A trailing `;` opens a new, empty parameter
//!
//! Defaults such as "0 means 1" are applied by the dispatchers, never here.

use std::fmt;

pub const DEFAULT_MAX_PARAMS: usize = 32;

#[derive(Clone)]
pub struct Params {
    values: Vec<u16>,
    current: u16,
    /// A parameter slot is open (a digit or `;` has been seen since the last flush)
    in_progress: bool,
    max: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PARAMS)
    }
}

impl Params {
    /// Create an empty accumulator keeping at most `max` parameters
    pub fn new(max: usize) -> Self {
        Params {
            values: Vec::with_capacity(max.min(DEFAULT_MAX_PARAMS)),
            current: 0,
            in_progress: false,
            max,
        }
    }

    /// Accumulate a decimal digit (0-9) into the current parameter
    pub fn push_digit(&mut self, digit: u8) {
        self.current = self
            .current
            .saturating_mul(10)
            .saturating_add(u16::from(digit));
        self.in_progress = true;
    }

    /// Handle a `;`: flush the current parameter and open a new one
    pub fn separator(&mut self) {
        self.push(self.current);
        self.current = 0;
        self.in_progress = true;
    }

    /// Flush the in-progress parameter, if any
    pub fn finish(&mut self) {
        if self.in_progress {
            self.push(self.current);
        }
        self.current = 0;
        self.in_progress = false;
    }

    fn push(&mut self, value: u16) {
        if self.values.len() < self.max {
            self.values.push(value);
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u16> {
        self.values.get(index).copied()
    }

    pub fn get_or(&self, index: usize, default: u16) -> u16 {
        self.get(index).unwrap_or(default)
    }

    /// Parameter at `index`, with `default` for a missing or zero slot
    pub fn get_nonzero_or(&self, index: usize, default: u16) -> u16 {
        match self.get(index) {
            Some(0) | None => default,
            Some(v) => v,
        }
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.values.iter().copied()
    }

    /// Reset for a new sequence, keeping the allocation
    pub fn clear(&mut self) {
        self.values.clear();
        self.current = 0;
        self.in_progress = false;
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}
