use crate::domain::Question;
use rand::Rng;
use std::collections::HashSet;

/// Category id meaning "draw from every category".
pub const ALL_CATEGORIES: i64 = 0;

/// Picks the next quiz question uniformly at random among `candidates`, skipping any whose id
/// is in `previous`. `None` means the round has run out of questions.
pub fn select_next_question<'a, R>(
    candidates: &'a [Question],
    previous: &[i64],
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let asked: HashSet<i64> = previous.iter().copied().collect();
    let remaining: Vec<&Question> = candidates
        .iter()
        .filter(|question| !asked.contains(&question.id))
        .collect();

    if remaining.is_empty() {
        return None;
    }

    let index = rng.random_range(0..remaining.len());
    Some(remaining[index])
}
