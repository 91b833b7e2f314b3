//! Physical material properties for fixtures

use serde::{Serialize, Deserialize};

use crate::body::BodyType;

/// How the coefficients of two touching fixtures are merged
///
/// When two fixtures disagree, the rule that comes later in this list wins
/// (`Max` beats `Multiply` beats `Min` beats `Average`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CombineRule {
    #[default]
    Average,
    Min,
    Multiply,
    Max,
}

impl CombineRule {
    /// Merge two coefficients with this rule
    pub fn apply(self, a: f32, b: f32) -> f32 {
        match self {
            CombineRule::Average => (a + b) * 0.5,
            CombineRule::Min => a.min(b),
            CombineRule::Multiply => a * b,
            CombineRule::Max => a.max(b),
        }
    }
}

impl From<CombineRule> for rapier2d::prelude::CoefficientCombineRule {
    fn from(rule: CombineRule) -> Self {
        use rapier2d::prelude::CoefficientCombineRule as Rule;
        match rule {
            CombineRule::Average => Rule::Average,
            CombineRule::Min => Rule::Min,
            CombineRule::Multiply => Rule::Multiply,
            CombineRule::Max => Rule::Max,
        }
    }
}

/// Density, friction and restitution of a fixture
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicsMaterial {
    /// Mass per unit area (0 for static fixtures)
    pub density: f32,
    /// Friction coefficient (0.0 = ice, 1.0 = maximum grip)
    pub friction: f32,
    /// Restitution (0.0 = no bounce, 1.0 = perfect bounce)
    pub restitution: f32,
    /// How restitution is merged with the other fixture on contact
    #[serde(default)]
    pub restitution_rule: CombineRule,
}

impl Default for PhysicsMaterial {
    fn default() -> Self {
        Self::elastic(BodyType::Static)
    }
}

impl PhysicsMaterial {
    /// Maximum friction used by every gizmo
    pub const FRICTION: f32 = 1.0;

    /// Density given to every dynamic gizmo
    pub const DYNAMIC_DENSITY: f32 = 1.0;

    /// Fully inelastic static material that wins every restitution merge
    pub const ABSORBER: Self = Self {
        density: 0.0,
        friction: Self::FRICTION,
        restitution: 0.0,
        restitution_rule: CombineRule::Min,
    };

    /// Fully elastic material for the given body type
    ///
    /// Static bodies get density 0, dynamic bodies [`Self::DYNAMIC_DENSITY`].
    pub const fn elastic(body_type: BodyType) -> Self {
        let density = match body_type {
            BodyType::Static => 0.0,
            BodyType::Dynamic => Self::DYNAMIC_DENSITY,
        };
        Self {
            density,
            friction: Self::FRICTION,
            restitution: 1.0,
            restitution_rule: CombineRule::Average,
        }
    }

    /// Create a new material with custom values
    ///
    /// Friction and restitution are clamped to [0.0, 1.0], density to >= 0.
    pub fn new(density: f32, friction: f32, restitution: f32) -> Self {
        Self {
            density: density.max(0.0),
            friction: friction.clamp(0.0, 1.0),
            restitution: restitution.clamp(0.0, 1.0),
            restitution_rule: CombineRule::Average,
        }
    }

    /// Set the restitution combine rule
    pub fn with_restitution_rule(mut self, rule: CombineRule) -> Self {
        self.restitution_rule = rule;
        self
    }

    /// Effective friction and restitution for a contact with `other`
    ///
    /// Friction is always averaged; restitution uses the stronger of the two
    /// combine rules. Density is not merged and is left as `self.density`.
    pub fn combine(&self, other: &Self) -> Self {
        let rule = self.restitution_rule.max(other.restitution_rule);
        Self {
            density: self.density,
            friction: CombineRule::Average.apply(self.friction, other.friction),
            restitution: rule.apply(self.restitution, other.restitution),
            restitution_rule: rule,
        }
    }
}
