//! Converts user-facing 1-4 answers to the scorer's 0-3 scale.

use std::collections::BTreeMap;

use super::catalog::QuestionId;
use crate::domain::foundation::LikertAnswer;

/// Answers on the 0-3 scale, keyed by question identifier and iterated in
/// catalog order.
pub type NormalizedAnswers = BTreeMap<QuestionId, i64>;

/// Shifts one raw answer down by one, flooring at zero.
pub fn normalize_value(raw: i64) -> i64 {
    raw.saturating_sub(1).max(0)
}

/// Normalizes a complete answer set.
///
/// Applied exactly once per completed assessment; the input is never
/// modified.
pub fn normalize_answers(raw: &BTreeMap<QuestionId, LikertAnswer>) -> NormalizedAnswers {
    raw.iter()
        .map(|(id, answer)| (*id, normalize_value(i64::from(answer.value()))))
        .collect()
}
