//! Validity gate between a submitted row and the guess evaluator

use super::{ServiceError, WordService};
use crate::game::Submission;
use tracing::{info, warn};

/// Ask the validity service about a submitted row
///
/// No retries: a failure is returned as-is and the caller decides what to
/// do with the pending submission.
///
/// # Errors
///
/// Returns the service error if the check could not be completed.
pub async fn check<S: WordService>(
    service: &S,
    submission: &Submission,
) -> Result<bool, ServiceError> {
    match service.validate(submission.guess.text()).await {
        Ok(valid) => {
            info!(row = submission.row, guess = %submission.guess, valid, "validity checked");
            Ok(valid)
        }
        Err(err) => {
            warn!(row = submission.row, error = %err, "validity check failed");
            Err(err)
        }
    }
}
