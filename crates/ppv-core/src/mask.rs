//! Boolean membership masks over a target table.
//!
//! A `Mask` is always aligned to the *full* table it was computed from: one
//! flag per row, in row order.  Combinators consume or borrow masks of equal
//! length; mixing masks from different tables is a caller bug and is caught
//! by the length assertions.

/// Boolean membership array over the rows of one target table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mask(Vec<bool>);

impl Mask {
    /// All-false mask of length `len`.
    pub fn falses(len: usize) -> Self {
        Mask(vec![false; len])
    }

    /// All-true mask of length `len`.
    pub fn trues(len: usize) -> Self {
        Mask(vec![true; len])
    }

    pub fn from_vec(flags: Vec<bool>) -> Self {
        Mask(flags)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flag for row `i`.
    #[inline]
    pub fn get(&self, i: usize) -> bool {
        self.0[i]
    }

    /// Set row `i` to true.
    #[inline]
    pub fn set(&mut self, i: usize) {
        self.0[i] = true;
    }

    /// Number of `true` rows.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }

    /// `true` if every flag of `self` implies the same flag in `other`.
    pub fn is_subset_of(&self, other: &Mask) -> bool {
        assert_eq!(self.len(), other.len(), "mask length mismatch");
        self.0.iter().zip(&other.0).all(|(&a, &b)| !a || b)
    }

    /// Row indices of the `true` flags, ascending.
    pub fn indices(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
            .collect()
    }

    /// Element-wise AND.
    pub fn and(&self, other: &Mask) -> Mask {
        assert_eq!(self.len(), other.len(), "mask length mismatch");
        Mask(self.0.iter().zip(&other.0).map(|(&a, &b)| a && b).collect())
    }

    /// Element-wise OR.
    pub fn or(&self, other: &Mask) -> Mask {
        assert_eq!(self.len(), other.len(), "mask length mismatch");
        Mask(self.0.iter().zip(&other.0).map(|(&a, &b)| a || b).collect())
    }

    /// Element-wise NOT.
    pub fn not(&self) -> Mask {
        Mask(self.0.iter().map(|&a| !a).collect())
    }

    /// OR-reduce an iterator of masks.  Returns `None` on an empty iterator
    /// (there is no natural length for the identity mask).
    pub fn any_of<'a>(mut masks: impl Iterator<Item = &'a Mask>) -> Option<Mask> {
        let first = masks.next()?.clone();
        Some(masks.fold(first, |acc, m| acc.or(m)))
    }

    /// Iterator over the flags in row order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }
}
