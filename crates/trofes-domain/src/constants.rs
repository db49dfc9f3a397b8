//! Domain layer constants
//!
//! Contains constants that are part of the recommendation logic. Serving and
//! configuration constants remain in the infrastructure crate.

// ============================================================================
// LIKED-RECIPES RECOMMENDER
// ============================================================================

/// Default number of recommendations for the liked-recipes path
pub const LIKED_DEFAULT_TOP_K: usize = 5;

/// Largest recipe id a bundle may carry; its 1-based form still fits `i64`
pub const MAX_RECIPE_ID: u64 = (i64::MAX - 1) as u64;

/// Share of `top_k` taken from the dominant cluster
pub const EXPLOIT_RATIO: f64 = 0.7;

/// Prefix of the strategy label reported with liked-recipes results
pub const HYBRID_STRATEGY_PREFIX: &str = "hybrid_exploration";

// ============================================================================
// CALCULATOR RECOMMENDER
// ============================================================================

/// Default number of recommendations for the calculator path
pub const CALCULATOR_DEFAULT_TOP_K: usize = 10;

/// Number of nearest candidates kept before random sampling
pub const CANDIDATE_POOL_SIZE: usize = 20;

/// Largest `top_k` accepted by either recommender
pub const MAX_TOP_K: usize = 100;

/// Query column holding target calories
pub const COLUMN_CALORIES: &str = "calories";

/// Query column holding target protein
pub const COLUMN_PROTEIN: &str = "protein";

/// Query column holding target fat
pub const COLUMN_FAT: &str = "fat";

/// Query column holding target carbohydrates
pub const COLUMN_CARBOHYDRATE: &str = "carbohydrate";

/// Free-text query column, always empty in synthetic rows
pub const COLUMN_TEXT_FEATURE: &str = "text_feature";

/// Cooking time query column
pub const COLUMN_COOKING_TIME: &str = "cooking_time";

/// Cooking time (minutes) assumed for synthetic rows
pub const DEFAULT_COOKING_TIME: f64 = 30.0;

// ============================================================================
// ATTRIBUTE CATALOG
// ============================================================================

/// Allergy ids and the allergen-present column each maps to
pub const ALLERGY_COLUMNS: [(u32, &str); 9] = [
    (1, "has_dairy"),
    (2, "has_egg"),
    (3, "has_fish"),
    (4, "has_shellfish"),
    (5, "has_soy"),
    (6, "has_sesame"),
    (7, "has_wheat"),
    (8, "has_peanut"),
    (9, "has_treenut"),
];

/// Diet ids and the diet-suitability column each maps to
pub const DIET_COLUMNS: [(u32, &str); 9] = [
    (1, "halal"),
    (2, "is_lactose_free"),
    (3, "low_carb"),
    (4, "weight_loss"),
    (5, "high_protein"),
    (6, "gluten_free"),
    (7, "dairy_free"),
    (8, "is_spicy"),
    (9, "is_not_fried"),
];
