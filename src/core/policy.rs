use crate::models::AdopterProfile;

/// Per-request recommendation state, re-derived on every call
#[derive(Debug, Clone, PartialEq)]
pub enum PolicyState {
    /// No caller identity: recent listings only
    Unauthenticated,
    /// Known caller without a stored profile: same output as unauthenticated
    AuthenticatedNoProfile { user_id: i64 },
    /// Known caller with a profile: full ranking pipeline
    AuthenticatedWithProfile { user_id: i64, profile: AdopterProfile },
}

impl PolicyState {
    /// Resolve the state from the caller identity and the profile lookup.
    ///
    /// A profile is ignored when there is no identity.
    pub fn resolve(identity: Option<i64>, profile: Option<AdopterProfile>) -> Self {
        match (identity, profile) {
            (None, _) => PolicyState::Unauthenticated,
            (Some(user_id), None) => PolicyState::AuthenticatedNoProfile { user_id },
            (Some(user_id), Some(profile)) => {
                PolicyState::AuthenticatedWithProfile { user_id, profile }
            }
        }
    }

    /// Whether the ranker runs in this state
    pub fn is_ranked(&self) -> bool {
        matches!(self, PolicyState::AuthenticatedWithProfile { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            PolicyState::Unauthenticated => "unauthenticated",
            PolicyState::AuthenticatedNoProfile { .. } => "no_profile",
            PolicyState::AuthenticatedWithProfile { .. } => "ranked",
        }
    }
}

/// Resolve the requested result count.
///
/// Omitted counts use `default_limit`; everything is capped at `pool_cap`.
/// An explicit zero stays zero.
pub fn resolve_limit(requested: Option<u32>, default_limit: usize, pool_cap: usize) -> usize {
    requested
        .map(|n| n as usize)
        .unwrap_or(default_limit)
        .min(pool_cap)
}
