//! Recursion limits for type-graph traversal.
//!
//! # Design
//!
//! Three mechanisms keep a traversal finite:
//! 1. **Cycle detection**: a type already being expanded on the current path
//!    is not expanded again (checked against the context chain, see
//!    [`TraversalContext`](crate::context::TraversalContext)).
//! 2. **Depth limiting**: nesting past the profile's depth stops the branch.
//! 3. **Expansion budget**: the total number of object expansions and emitted
//!    leaves is bounded, which caps the first/last fan-out of nested
//!    collections.
//!
//! # Profiles
//!
//! [`RecursionProfile`] provides named presets so call sites state intent
//! instead of magic numbers:
//!
//! ```ignore
//! let options = TraversalOptions {
//!     profile: RecursionProfile::Shallow,
//!     ..Default::default()
//! };
//! ```

use qa_common::RecursionLimit;
use qa_common::limits::{
    MAX_EMITTED_PROPERTIES, MAX_TRAVERSAL_DEPTH, MAX_TRAVERSAL_EXPANSIONS, SHALLOW_TRAVERSAL_DEPTH,
};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RecursionProfile
// ---------------------------------------------------------------------------

/// Named recursion limit presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecursionProfile {
    /// Full traversal of realistic models.
    ///
    /// depth = 32, expansions = 10,000
    #[default]
    Standard,

    /// Only the first few levels; for very wide models.
    ///
    /// depth = 8, expansions = 10,000
    Shallow,

    /// Custom limits for one-off or test scenarios.
    #[serde(rename_all = "camelCase")]
    Custom { max_depth: u32, max_expansions: u32 },
}

impl RecursionProfile {
    /// Maximum nesting of object expansions below the root.
    pub const fn max_depth(self) -> u32 {
        match self {
            Self::Standard => MAX_TRAVERSAL_DEPTH,
            Self::Shallow => SHALLOW_TRAVERSAL_DEPTH,
            Self::Custom { max_depth, .. } => max_depth,
        }
    }

    /// Maximum number of object expansions in one traversal.
    pub const fn max_expansions(self) -> u32 {
        match self {
            Self::Standard | Self::Shallow => MAX_TRAVERSAL_EXPANSIONS,
            Self::Custom { max_expansions, .. } => max_expansions,
        }
    }
}

// ---------------------------------------------------------------------------
// RecursionResult
// ---------------------------------------------------------------------------

/// Result of attempting to expand a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionResult {
    /// Proceed with the expansion.
    Entered,
    /// This type is already being expanded on the current path.
    Cycle,
    /// Maximum recursion depth exceeded.
    DepthExceeded,
    /// The expansion budget is spent.
    BudgetExceeded,
}

impl RecursionResult {
    #[inline]
    pub fn is_entered(self) -> bool {
        matches!(self, Self::Entered)
    }

    #[inline]
    pub fn is_denied(self) -> bool {
        !self.is_entered()
    }

    /// The note-level reason for a denial.
    pub fn limit(self) -> Option<RecursionLimit> {
        match self {
            Self::Entered => None,
            Self::Cycle => Some(RecursionLimit::Cycle),
            Self::DepthExceeded => Some(RecursionLimit::Depth),
            Self::BudgetExceeded => Some(RecursionLimit::Budget),
        }
    }
}

// ---------------------------------------------------------------------------
// ExpansionBudget
// ---------------------------------------------------------------------------

/// Work counter owned by a single traversal branch.
#[derive(Debug, Clone)]
pub struct ExpansionBudget {
    expansions: u32,
    max_expansions: u32,
    max_emitted: usize,
    exhausted: bool,
}

impl ExpansionBudget {
    pub fn new(max_expansions: u32, max_emitted: usize) -> Self {
        Self {
            expansions: 0,
            max_expansions,
            max_emitted,
            exhausted: false,
        }
    }

    pub fn with_profile(profile: RecursionProfile) -> Self {
        Self::new(profile.max_expansions(), MAX_EMITTED_PROPERTIES)
    }

    /// Count one expansion. Returns `false` once the budget is spent.
    pub fn try_expand(&mut self) -> bool {
        if self.expansions >= self.max_expansions {
            self.exhausted = true;
            return false;
        }
        self.expansions += 1;
        true
    }

    /// Whether another leaf may be emitted when `emitted` already exist.
    pub fn may_emit(&mut self, emitted: usize) -> bool {
        if emitted >= self.max_emitted {
            self.exhausted = true;
            return false;
        }
        true
    }

    #[inline]
    pub fn expansions(&self) -> u32 {
        self.expansions
    }

    /// Sticky: once set, stays set for the rest of the traversal.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_limits() {
        assert_eq!(RecursionProfile::Standard.max_depth(), 32);
        assert_eq!(RecursionProfile::Shallow.max_depth(), 8);
        let custom = RecursionProfile::Custom {
            max_depth: 3,
            max_expansions: 7,
        };
        assert_eq!(custom.max_depth(), 3);
        assert_eq!(custom.max_expansions(), 7);
    }

    #[test]
    fn denial_maps_to_note_limit() {
        assert_eq!(RecursionResult::Entered.limit(), None);
        assert_eq!(RecursionResult::Cycle.limit(), Some(RecursionLimit::Cycle));
        assert!(RecursionResult::BudgetExceeded.is_denied());
    }

    #[test]
    fn budget_is_sticky() {
        let mut budget = ExpansionBudget::new(2, 10);
        assert!(budget.try_expand());
        assert!(budget.try_expand());
        assert!(!budget.is_exhausted());
        assert!(!budget.try_expand());
        assert!(budget.is_exhausted());
        assert_eq!(budget.expansions(), 2);
    }

    #[test]
    fn emission_cap() {
        let mut budget = ExpansionBudget::new(10, 1);
        assert!(budget.may_emit(0));
        assert!(!budget.may_emit(1));
        assert!(budget.is_exhausted());
    }
}
