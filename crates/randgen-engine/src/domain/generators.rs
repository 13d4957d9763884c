//! Range sampling, dice aggregation and coin tallying.
//!
//! Each generator draws its values independently from the injected rng. The
//! preconditions are normally enforced upstream by input validation; they are
//! checked here as well so a malformed request yields a `DomainError` instead
//! of a panic inside the rng.

use randgen_core::error::DomainError;
use randgen_core::rng::DeterministicRng;
use tracing::debug;

use super::requests::{GenerationRequest, MAX_COIN_COUNT, MAX_DICE_COUNT, MAX_NUMBER_COUNT};
use super::results::{CoinResult, DiceResult, GenerationResult, RangeResult};

/// Draws `count` integers, each uniform over `[min, max]`.
///
/// # Errors
///
/// Returns `DomainError::DegenerateRange` if `min >= max`, or
/// `DomainError::Validation` if `count` is zero or above [`MAX_NUMBER_COUNT`].
pub fn sample_range(
    rng: &mut dyn DeterministicRng,
    min: i64,
    max: i64,
    count: usize,
) -> Result<RangeResult, DomainError> {
    if min >= max {
        return Err(DomainError::DegenerateRange { min, max });
    }
    ensure_count(count, MAX_NUMBER_COUNT, range_count_message)?;

    let values = (0..count).map(|_| rng.next_i64_range(min, max)).collect();
    debug!(min, max, count, "sampled range");
    Ok(RangeResult::from_values(values))
}

/// Rolls `count` dice of `faces` faces.
///
/// Any face count of at least one is accepted; restricting to
/// [`ALLOWED_DICE_FACES`](super::requests::ALLOWED_DICE_FACES) is left to
/// input validation.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `faces` is zero or `count` is outside
/// `1..=MAX_DICE_COUNT`.
pub fn roll_dice(
    rng: &mut dyn DeterministicRng,
    faces: u32,
    count: usize,
) -> Result<DiceResult, DomainError> {
    if faces == 0 {
        return Err(DomainError::validation("Dice must have at least one face"));
    }
    ensure_count(count, MAX_DICE_COUNT, dice_count_message)?;

    let values = (0..count).map(|_| rng.next_u32_range(1, faces)).collect();
    debug!(faces, count, "rolled dice");
    Ok(DiceResult::from_values(values))
}

/// Flips `count` fair coins.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `count` is outside `1..=MAX_COIN_COUNT`.
pub fn flip_coins(
    rng: &mut dyn DeterministicRng,
    count: usize,
) -> Result<CoinResult, DomainError> {
    ensure_count(count, MAX_COIN_COUNT, coin_count_message)?;

    let outcomes = (0..count).map(|_| rng.next_bool()).collect();
    debug!(count, "flipped coins");
    Ok(CoinResult::from_outcomes(outcomes))
}

/// Runs the generator selected by `request`.
///
/// # Errors
///
/// Propagates the selected generator's precondition errors.
pub fn generate(
    rng: &mut dyn DeterministicRng,
    request: &GenerationRequest,
) -> Result<GenerationResult, DomainError> {
    match *request {
        GenerationRequest::Range { min, max, count } => {
            sample_range(rng, min, max, count).map(GenerationResult::Range)
        }
        GenerationRequest::Dice { faces, count } => {
            roll_dice(rng, faces, count).map(GenerationResult::Dice)
        }
        GenerationRequest::Coin { count } => flip_coins(rng, count).map(GenerationResult::Coin),
    }
}

fn ensure_count(count: usize, max: usize, message: fn() -> String) -> Result<(), DomainError> {
    if (1..=max).contains(&count) {
        Ok(())
    } else {
        Err(DomainError::Validation(message()))
    }
}

/// Shown for a missing, zero or oversized number count.
pub(crate) fn range_count_message() -> String {
    format!("Please enter a valid number of values to generate (1 to {MAX_NUMBER_COUNT})")
}

pub(crate) fn dice_count_message() -> String {
    format!("Please roll between 1 and {MAX_DICE_COUNT} dice")
}

pub(crate) fn coin_count_message() -> String {
    format!("Please flip between 1 and {MAX_COIN_COUNT} coins")
}
