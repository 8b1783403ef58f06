//! Position-variable layout for the clique encoding

use crate::error::{ReductionError, ReductionResult};

/// Maps clique position variables `x_{i,j}` to flat SAT variable ids.
///
/// `x_{i,j}` means "clique position `i` (1..=k) holds vertex `j` (1..=n)" and
/// is stored as `(i - 1) * n + j`, a bijection onto `1..=k*n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionVariables {
    positions: usize,
    vertices: usize,
}

impl PositionVariables {
    /// Create the layout for `positions` clique slots over `vertices` vertices
    pub fn new(positions: usize, vertices: usize) -> ReductionResult<Self> {
        let overflow = ReductionError::VariableOverflow { k: positions, n: vertices };
        let total = positions.checked_mul(vertices).ok_or(overflow.clone())?;
        if i32::try_from(total).is_err() {
            return Err(overflow);
        }

        Ok(Self { positions, vertices })
    }

    /// Variable id for `x_{position,vertex}` (both one-based)
    pub fn encode(&self, position: usize, vertex: usize) -> ReductionResult<i32> {
        if position == 0 || position > self.positions || vertex == 0 || vertex > self.vertices {
            return Err(ReductionError::PositionOutOfRange {
                position,
                vertex,
                k: self.positions,
                n: self.vertices,
            });
        }
        Ok(self.id(position, vertex))
    }

    /// Inverse of [`encode`](Self::encode): `(position, vertex)`, both one-based
    pub fn decode(&self, variable: i32) -> ReductionResult<(usize, usize)> {
        let max = self.variable_count() as i32;
        if variable < 1 || variable > max {
            return Err(ReductionError::VariableOutOfRange { variable, max });
        }

        let offset = (variable - 1) as usize;
        Ok((offset / self.vertices + 1, offset % self.vertices + 1))
    }

    /// Unchecked id; callers iterate inside the layout's bounds
    #[inline]
    pub(crate) fn id(&self, position: usize, vertex: usize) -> i32 {
        debug_assert!((1..=self.positions).contains(&position));
        debug_assert!((1..=self.vertices).contains(&vertex));
        ((position - 1) * self.vertices + vertex) as i32
    }

    /// All variables of one position, in ascending vertex order
    pub fn position_row(&self, position: usize) -> Vec<i32> {
        (1..=self.vertices).map(|vertex| self.id(position, vertex)).collect()
    }

    pub fn positions(&self) -> usize {
        self.positions
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Total number of variables, `k * n`
    pub fn variable_count(&self) -> usize {
        self.positions * self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_layout_matches_flat_formula() {
        let vars = PositionVariables::new(3, 5).unwrap();
        assert_eq!(vars.encode(1, 1).unwrap(), 1);
        assert_eq!(vars.encode(1, 5).unwrap(), 5);
        assert_eq!(vars.encode(2, 1).unwrap(), 6);
        assert_eq!(vars.encode(3, 5).unwrap(), 15);
        assert_eq!(vars.variable_count(), 15);
    }

    #[test]
    fn test_bijection() {
        let vars = PositionVariables::new(4, 7).unwrap();
        let mut seen = HashSet::new();

        for i in 1..=4 {
            for j in 1..=7 {
                let id = vars.encode(i, j).unwrap();
                assert!(seen.insert(id), "duplicate id {}", id);
                assert_eq!(vars.decode(id).unwrap(), (i, j));
            }
        }

        assert_eq!(seen.len(), 28);
        assert_eq!(*seen.iter().min().unwrap(), 1);
        assert_eq!(*seen.iter().max().unwrap(), 28);
    }

    #[test]
    fn test_out_of_range() {
        let vars = PositionVariables::new(2, 3).unwrap();
        assert!(vars.encode(0, 1).is_err());
        assert!(vars.encode(3, 1).is_err());
        assert!(vars.encode(1, 0).is_err());
        assert!(vars.encode(1, 4).is_err());

        assert_eq!(
            vars.decode(7),
            Err(ReductionError::VariableOutOfRange { variable: 7, max: 6 })
        );
        assert!(vars.decode(0).is_err());
        assert!(vars.decode(-1).is_err());
    }

    #[test]
    fn test_position_row() {
        let vars = PositionVariables::new(2, 3).unwrap();
        assert_eq!(vars.position_row(2), vec![4, 5, 6]);
    }

    #[test]
    fn test_overflow_rejected() {
        assert_eq!(
            PositionVariables::new(1 << 16, 1 << 16),
            Err(ReductionError::VariableOverflow { k: 1 << 16, n: 1 << 16 })
        );
    }
}
