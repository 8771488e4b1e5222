//! Named lookup over a validated set of roles.
//!
//! Resolving a role resolves its backgrounds first, recursively. A cycle in
//! those links would never terminate, so a registry refuses to exist until
//! it has walked the graph. Backgrounds can depend on the scheme, so the
//! graph is walked once per variant in both light and dark mode.
//!
//! The same pass rejects roles that are malformed on their own: a pair with
//! no background to measure against, a background with no contrast target,
//! or a pair that doesn't list the role declaring it.

use std::collections::HashMap;
use std::sync::LazyLock;

use tonekit_hct::{Argb, Hct};

use crate::cache::RoleId;
use crate::dynamic_color::DynamicColor;
use crate::error::{Result, SchemeError};
use crate::roles;
use crate::scheme::DynamicScheme;
use crate::variant::Variant;

/// Seed of the schemes the role graph is walked in.
const CHECK_SEED: Argb = Argb(0xff67_50a4);

static BUILTIN: LazyLock<RoleRegistry> = LazyLock::new(|| {
    RoleRegistry::new(roles::ALL).unwrap_or_else(|e| panic!("built-in role graph is invalid: {e}"))
});

/// A validated, ordered set of roles addressable by name.
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    roles: Vec<&'static DynamicColor>,
    index: HashMap<&'static str, usize>,
}

impl RoleRegistry {
    /// Validate `roles` and index them by name.
    ///
    /// # Errors
    ///
    /// - [`SchemeError::DuplicateRole`] if two roles share a name.
    /// - [`SchemeError::PairWithoutBackground`],
    ///   [`SchemeError::BackgroundWithoutCurve`] or
    ///   [`SchemeError::PairMissingRole`] for a malformed role.
    /// - [`SchemeError::BackgroundCycle`] if background links loop.
    pub fn new(roles: impl IntoIterator<Item = &'static DynamicColor>) -> Result<Self> {
        let roles: Vec<_> = roles.into_iter().collect();
        let mut index = HashMap::with_capacity(roles.len());
        for (i, role) in roles.iter().enumerate() {
            if index.insert(role.name(), i).is_some() {
                return Err(SchemeError::DuplicateRole(role.name()));
            }
        }

        let seed = Hct::from_argb(CHECK_SEED);
        for &variant in Variant::all() {
            for is_dark in [false, true] {
                let scheme = DynamicScheme::new(seed, variant, is_dark, 0.0)?;
                for role in &roles {
                    check_role(role, &scheme)?;
                }
                check_acyclic(&roles, &scheme)?;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(roles = roles.len(), "role registry validated");

        Ok(Self { roles, index })
    }

    /// The registry of every built-in role.
    ///
    /// # Panics
    ///
    /// Only if the built-in role graph itself is malformed, which the test
    /// suite rules out.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Look up a role by name.
    ///
    /// # Errors
    ///
    /// [`SchemeError::UnknownRole`] if there is no such role.
    pub fn get(&self, name: &str) -> Result<&'static DynamicColor> {
        self.index
            .get(name)
            .map(|&i| self.roles[i])
            .ok_or_else(|| SchemeError::UnknownRole(name.to_string()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Roles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static DynamicColor> + '_ {
        self.roles.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn check_role(role: &DynamicColor, scheme: &DynamicScheme) -> Result<()> {
    let has_background = role.background(scheme).is_some();
    if has_background && role.contrast_curve().is_none() {
        return Err(SchemeError::BackgroundWithoutCurve(role.name()));
    }
    if let Some(pair) = role.tone_delta_pair(scheme) {
        if !has_background {
            return Err(SchemeError::PairWithoutBackground(role.name()));
        }
        if !pair.contains(role) {
            return Err(SchemeError::PairMissingRole {
                role: role.name(),
                role_a: pair.role_a.name(),
                role_b: pair.role_b.name(),
            });
        }
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Depth-first walk over background and second-background links.
fn check_acyclic(roles: &[&'static DynamicColor], scheme: &DynamicScheme) -> Result<()> {
    let mut state: HashMap<RoleId, Visit> = HashMap::new();
    let mut path = Vec::new();
    for &role in roles {
        visit(role, scheme, &mut state, &mut path)?;
    }
    Ok(())
}

fn visit(
    role: &'static DynamicColor,
    scheme: &DynamicScheme,
    state: &mut HashMap<RoleId, Visit>,
    path: &mut Vec<&'static DynamicColor>,
) -> Result<()> {
    match state.get(&role.id()) {
        Some(Visit::Done) => return Ok(()),
        Some(Visit::InProgress) => {
            let start = path.iter().position(|&r| std::ptr::eq(r, role)).unwrap_or(0);
            let mut cycle: Vec<_> = path[start..].iter().map(|r| r.name()).collect();
            cycle.push(role.name());
            return Err(SchemeError::BackgroundCycle(cycle));
        }
        None => {}
    }

    state.insert(role.id(), Visit::InProgress);
    path.push(role);
    for next in [role.background(scheme), role.second_background(scheme)]
        .into_iter()
        .flatten()
    {
        visit(next, scheme, state, path)?;
    }
    path.pop();
    state.insert(role.id(), Visit::Done);
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
