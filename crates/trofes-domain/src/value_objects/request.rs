//! Recommendation request value objects

use super::ids::IdConvention;
use crate::constants::{CALCULATOR_DEFAULT_TOP_K, LIKED_DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};

/// Value Object: Liked-Recipes Request
///
/// Ordered liked ids (oldest first, the last element is the most recent
/// like) plus the number of recommendations wanted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedRequest {
    /// Liked ids in the caller's numbering
    pub liked_ids: Vec<i64>,
    /// Desired number of recommendations
    pub top_k: usize,
    /// Numbering used for `liked_ids` and the returned ids
    pub convention: IdConvention,
}

impl LikedRequest {
    /// Create a request with the default `top_k`, using 0-based ids
    pub fn new(liked_ids: Vec<i64>) -> Self {
        Self {
            liked_ids,
            top_k: LIKED_DEFAULT_TOP_K,
            convention: IdConvention::ZeroBased,
        }
    }

    /// Set the desired result count
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the id numbering
    pub fn with_convention(mut self, convention: IdConvention) -> Self {
        self.convention = convention;
        self
    }
}

/// Target macro nutrients for the calculator path
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Target calories
    pub calories: f64,
    /// Target protein
    pub protein: f64,
    /// Target fat
    pub fat: f64,
    /// Target carbohydrates
    pub carbs: f64,
}

/// Value Object: Calculator Request
///
/// Allergy and diet ids only take effect when `login` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroRequest {
    /// Macro targets used to build the synthetic query row
    pub targets: MacroTargets,
    /// Desired number of recommendations
    pub top_k: usize,
    /// Whether the caller is logged in
    pub login: bool,
    /// Allergy ids to exclude
    pub allergy_ids: Vec<u32>,
    /// Diet ids that must be satisfied
    pub diet_ids: Vec<u32>,
    /// Numbering used for the returned ids
    pub convention: IdConvention,
}

impl MacroRequest {
    /// Create an anonymous request with the default `top_k`
    pub fn new(targets: MacroTargets) -> Self {
        Self {
            targets,
            top_k: CALCULATOR_DEFAULT_TOP_K,
            login: false,
            allergy_ids: Vec::new(),
            diet_ids: Vec::new(),
            convention: IdConvention::ZeroBased,
        }
    }

    /// Set the desired result count
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Mark the request as coming from a logged-in user with constraints
    pub fn with_constraints(mut self, allergy_ids: Vec<u32>, diet_ids: Vec<u32>) -> Self {
        self.login = true;
        self.allergy_ids = allergy_ids;
        self.diet_ids = diet_ids;
        self
    }

    /// Set the id numbering
    pub fn with_convention(mut self, convention: IdConvention) -> Self {
        self.convention = convention;
        self
    }
}
