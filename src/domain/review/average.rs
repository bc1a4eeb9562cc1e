use crate::domain::review::value_objects::Score;
use crate::domain::user::Role;

/// A score paired with the role of the user who gave it.
#[derive(Debug, Clone, Copy)]
pub struct RatingSample {
    pub score: Score,
    pub author_role: Role,
}

/// Mean score over ratings whose author has exactly the `USER` role. Scores from
/// ADMIN and AUTHOR accounts are excluded; no qualifying rating yields `0.0`.
pub fn average_rating(samples: &[RatingSample]) -> f64 {
    let (sum, count) = samples
        .iter()
        .filter(|sample| sample.author_role == Role::User)
        .fold((0i64, 0u32), |(sum, count), sample| {
            (sum + i64::from(sample.score.value()), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        sum as f64 / f64::from(count)
    }
}
