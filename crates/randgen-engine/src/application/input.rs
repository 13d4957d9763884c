//! Validation of user-entered generator parameters.
//!
//! All validation happens here, before a generator runs. Messages are meant
//! to be shown to the user verbatim in a dismissible notice.

use randgen_core::error::DomainError;

use crate::domain::generators::{coin_count_message, dice_count_message, range_count_message};
use crate::domain::requests::{
    ALLOWED_DICE_FACES, GenerationRequest, MAX_COIN_COUNT, MAX_DICE_COUNT, MAX_NUMBER_COUNT,
};

/// Free-text fields of the numbers tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeInput {
    /// Minimum, as typed.
    pub min_text: String,
    /// Maximum, as typed.
    pub max_text: String,
    /// How many numbers, as typed.
    pub count_text: String,
}

impl RangeInput {
    /// Builds an input from the three text fields.
    pub fn new(
        min_text: impl Into<String>,
        max_text: impl Into<String>,
        count_text: impl Into<String>,
    ) -> Self {
        Self {
            min_text: min_text.into(),
            max_text: max_text.into(),
            count_text: count_text.into(),
        }
    }

    /// Parses the fields into a range request. Fields are checked in order
    /// min, max, count, and the first failure is reported.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for unparsable fields, a count
    /// outside `1..=MAX_NUMBER_COUNT`, or `min >= max`.
    pub fn parse(&self) -> Result<GenerationRequest, DomainError> {
        let min: i64 = self
            .min_text
            .trim()
            .parse()
            .map_err(|_| DomainError::validation("Please enter a valid minimum value"))?;
        let max: i64 = self
            .max_text
            .trim()
            .parse()
            .map_err(|_| DomainError::validation("Please enter a valid maximum value"))?;
        let count = self
            .count_text
            .trim()
            .parse::<usize>()
            .map_err(|_| DomainError::Validation(range_count_message()))?;

        validate_range(min, max, count)
    }
}

/// Picker selections of the dice tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceInput {
    /// Selected face count.
    pub faces: u32,
    /// Selected number of dice.
    pub count: usize,
}

impl Default for DiceInput {
    fn default() -> Self {
        Self { faces: 6, count: 2 }
    }
}

impl DiceInput {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `faces` is not an offered die or
    /// `count` is outside `1..=10`.
    pub fn validate(&self) -> Result<GenerationRequest, DomainError> {
        validate_dice(self.faces, self.count)
    }
}

/// Stepper selection of the coin tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinInput {
    /// Selected number of coins.
    pub count: usize,
}

impl Default for CoinInput {
    fn default() -> Self {
        Self { count: 1 }
    }
}

impl CoinInput {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `count` is outside `1..=10`.
    pub fn validate(&self) -> Result<GenerationRequest, DomainError> {
        validate_coins(self.count)
    }
}

/// Input for whichever generator tab is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorInput {
    /// Numbers tab.
    Range(RangeInput),
    /// Dice tab.
    Dice(DiceInput),
    /// Coin tab.
    Coin(CoinInput),
}

impl GeneratorInput {
    /// Validates the input into a request.
    ///
    /// # Errors
    ///
    /// Returns the tab's `DomainError::Validation`.
    pub fn to_request(&self) -> Result<GenerationRequest, DomainError> {
        match self {
            Self::Range(input) => input.parse(),
            Self::Dice(input) => input.validate(),
            Self::Coin(input) => input.validate(),
        }
    }
}

/// Checks already parsed numbers parameters: the count limit first, then
/// `min < max`.
///
/// # Errors
///
/// Returns `DomainError::Validation` describing the first violated limit.
pub fn validate_range(min: i64, max: i64, count: usize) -> Result<GenerationRequest, DomainError> {
    if !(1..=MAX_NUMBER_COUNT).contains(&count) {
        return Err(DomainError::Validation(range_count_message()));
    }
    if min >= max {
        return Err(DomainError::validation(
            "Maximum value must be greater than minimum value",
        ));
    }
    Ok(GenerationRequest::Range { min, max, count })
}

/// Checks a dice selection against the offered dice and count limit.
///
/// # Errors
///
/// Returns `DomainError::Validation` describing the first violated limit.
pub fn validate_dice(faces: u32, count: usize) -> Result<GenerationRequest, DomainError> {
    if !ALLOWED_DICE_FACES.contains(&faces) {
        return Err(DomainError::validation(format!(
            "d{faces} is not a supported die"
        )));
    }
    if !(1..=MAX_DICE_COUNT).contains(&count) {
        return Err(DomainError::Validation(dice_count_message()));
    }
    Ok(GenerationRequest::Dice { faces, count })
}

/// Checks a coin count against the count limit.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `count` is outside `1..=10`.
pub fn validate_coins(count: usize) -> Result<GenerationRequest, DomainError> {
    if !(1..=MAX_COIN_COUNT).contains(&count) {
        return Err(DomainError::Validation(coin_count_message()));
    }
    Ok(GenerationRequest::Coin { count })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: DomainError) -> String {
        match err {
            DomainError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_range_input_parses() {
        let request = RangeInput::new(" 1", "6 ", "5").parse().unwrap();
        assert_eq!(
            request,
            GenerationRequest::Range {
                min: 1,
                max: 6,
                count: 5
            }
        );
    }

    #[test]
    fn test_non_numeric_min_reported_first() {
        let err = RangeInput::new("abc", "xyz", "0").parse().unwrap_err();
        assert_eq!(message(err), "Please enter a valid minimum value");
    }

    #[test]
    fn test_non_numeric_max_reported() {
        let err = RangeInput::new("1", "", "3").parse().unwrap_err();
        assert_eq!(message(err), "Please enter a valid maximum value");
    }

    #[test]
    fn test_zero_or_negative_count_rejected() {
        for count in ["0", "-2", "many"] {
            let err = RangeInput::new("1", "10", count).parse().unwrap_err();
            assert_eq!(message(err), range_count_message());
        }
    }

    #[test]
    fn test_count_above_limit_rejected() {
        for count in ["11", "18446744073709551615", "99999999999999999999999"] {
            let err = RangeInput::new("1", "10", count).parse().unwrap_err();
            assert_eq!(
                message(err),
                "Please enter a valid number of values to generate (1 to 10)"
            );
        }
    }

    #[test]
    fn test_count_at_limit_accepted() {
        let request = RangeInput::new("1", "10", "10").parse().unwrap();
        assert_eq!(request.count(), MAX_NUMBER_COUNT);
    }

    #[test]
    fn test_min_not_below_max_rejected() {
        for (min, max) in [("5", "5"), ("10", "1")] {
            let err = RangeInput::new(min, max, "1").parse().unwrap_err();
            assert_eq!(
                message(err),
                "Maximum value must be greater than minimum value"
            );
        }
    }

    #[test]
    fn test_dice_input_accepts_every_offered_die() {
        for faces in ALLOWED_DICE_FACES {
            assert!(DiceInput { faces, count: 1 }.validate().is_ok());
        }
    }

    #[test]
    fn test_dice_input_rejects_unoffered_die() {
        let err = DiceInput { faces: 7, count: 2 }.validate().unwrap_err();
        assert_eq!(message(err), "d7 is not a supported die");
    }

    #[test]
    fn test_dice_input_rejects_count_out_of_range() {
        assert!(DiceInput { faces: 6, count: 0 }.validate().is_err());
        assert!(DiceInput { faces: 6, count: 11 }.validate().is_err());
        assert!(DiceInput { faces: 6, count: 10 }.validate().is_ok());
    }

    #[test]
    fn test_coin_input_limits() {
        assert!(CoinInput { count: 0 }.validate().is_err());
        assert!(CoinInput { count: 11 }.validate().is_err());
        assert_eq!(
            CoinInput { count: 10 }.validate().unwrap(),
            GenerationRequest::Coin { count: 10 }
        );
    }

    #[test]
    fn test_generator_input_dispatches_per_tab() {
        let input = GeneratorInput::Dice(DiceInput::default());
        assert_eq!(
            input.to_request().unwrap(),
            GenerationRequest::Dice { faces: 6, count: 2 }
        );
    }
}
