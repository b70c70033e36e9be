//! Column names of the body-odour questionnaire export and of the columns
//! the pipeline derives from it.

pub const AGE_SOURCE_COLUMN: &str = "1. Age";
pub const GENDER_COLUMN: &str = "2. Gender";
pub const LGA_SOURCE_COLUMN: &str = "3. LGA/LCDA";
pub const BATHING_COLUMN: &str = "4. How often do you bathe or shower per day?";
pub const HYGIENE_SOURCE_COLUMN: &str =
    "5. Do you use any of the following regularly? (Tick all that apply)";
pub const FOODS_SOURCE_COLUMN: &str =
    "6. How often do you consume the following foods? (Tick those eaten regularly)";
pub const SWEATING_SOURCE_COLUMN: &str = "7. Do you sweat excessively even when not active?";
pub const MEDICAL_CONDITION_COLUMN: &str = "8. Are you aware of any medical condition that may cause body odor (e.g., diabetes, thyroid disorder)?";
pub const RELATIVES_COLUMN: &str = "9. Do you have close relatives with persistent body odor?";
pub const TOLD_BO_SOURCE_COLUMN: &str = "10. Have you ever been told you have body odor?";
pub const EMOTIONAL_EFFECT_COLUMN: &str = "11. If yes, how did it affect you emotionally?";
pub const SOCIAL_EFFECT_COLUMN: &str =
    "12. Has body odor ever affected your social life or self-confidence?";
pub const STIGMA_COLUMN: &str =
    "13. Do you think body odor can cause social discrimination or stigmatization?";
pub const REMEDIES_SOURCE_COLUMN: &str =
    "14. Have you tried any of the following to reduce body odor? (Tick all that apply)";
pub const REMEDY_RATING_COLUMN: &str = "15. Rate the effectiveness of your chosen remedies.";
pub const GENETICS_COLUMN: &str = "16. Do you believe some people naturally have stronger body odor due to their body chemistry or genetics?";
pub const MEDICAL_ISSUE_COLUMN: &str =
    "17. Do you think body odor should be treated as a medical issue in some cases";

/// Every questionnaire column an export must carry.
pub const REQUIRED_COLUMNS: &[&str] = &[
    AGE_SOURCE_COLUMN,
    GENDER_COLUMN,
    LGA_SOURCE_COLUMN,
    BATHING_COLUMN,
    HYGIENE_SOURCE_COLUMN,
    FOODS_SOURCE_COLUMN,
    SWEATING_SOURCE_COLUMN,
    MEDICAL_CONDITION_COLUMN,
    RELATIVES_COLUMN,
    TOLD_BO_SOURCE_COLUMN,
    EMOTIONAL_EFFECT_COLUMN,
    SOCIAL_EFFECT_COLUMN,
    STIGMA_COLUMN,
    REMEDIES_SOURCE_COLUMN,
    REMEDY_RATING_COLUMN,
    GENETICS_COLUMN,
    MEDICAL_ISSUE_COLUMN,
];

// Derived columns

pub const AGE_GROUP_COLUMN: &str = "Age_Group";
pub const LGA_COLUMN: &str = "LGA/LCDA";
pub const FOODS_COLUMN: &str = "Foods";
pub const HYGIENE_COLUMN: &str = "Hygiene";
pub const REMEDIES_COLUMN: &str = "Remedies";
pub const SWEATING_COLUMN: &str = "Excessive Sweating";
pub const TOLD_BO_COLUMN: &str = "Told_BO";

/// Columns the pipeline appends, in the order it appends them.
pub const DERIVED_COLUMNS: &[&str] = &[
    AGE_GROUP_COLUMN,
    LGA_COLUMN,
    FOODS_COLUMN,
    HYGIENE_COLUMN,
    REMEDIES_COLUMN,
    SWEATING_COLUMN,
    TOLD_BO_COLUMN,
];

/// Multi-select source columns and the derived column each one feeds.
pub const MULTI_SELECT_COLUMNS: &[(&str, &str)] = &[
    (FOODS_SOURCE_COLUMN, FOODS_COLUMN),
    (HYGIENE_SOURCE_COLUMN, HYGIENE_COLUMN),
    (REMEDIES_SOURCE_COLUMN, REMEDIES_COLUMN),
];

/// Yes/no source columns and the derived column each one feeds.
pub const BINARY_COLUMNS: &[(&str, &str)] = &[
    (SWEATING_SOURCE_COLUMN, SWEATING_COLUMN),
    (TOLD_BO_SOURCE_COLUMN, TOLD_BO_COLUMN),
];
