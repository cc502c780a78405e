use core::fmt;
use core::num::NonZeroU32;

/// Compact identifier of a PVT region (PVTNUM-style table index).
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<RegionId>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(NonZeroU32);

impl RegionId {
    /// Create an id from a 0-based region index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Create an id from a `usize` position in a region list.
    pub fn from_usize(index: usize) -> Self {
        Self::from_index(u32::try_from(index).unwrap_or(u32::MAX - 1))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    pub fn as_usize(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionId({})", self.index())
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_id_round_trip_index() {
        for i in [0_u32, 1, 2, 42, 10_000] {
            let id = RegionId::from_index(i);
            assert_eq!(id.index(), i);
            assert_eq!(RegionId::from_usize(i as usize), id);
        }
    }

    #[test]
    fn option_region_id_is_small() {
        assert_eq!(
            core::mem::size_of::<RegionId>(),
            core::mem::size_of::<Option<RegionId>>()
        );
    }

    #[test]
    fn display_is_zero_based() {
        assert_eq!(RegionId::from_index(3).to_string(), "3");
    }
}
