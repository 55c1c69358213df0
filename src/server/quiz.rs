use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::db::Question;

/// Picks one question uniformly at random from the candidates whose id is
/// not in `previous`. `None` once the pool is exhausted, including the
/// empty-pool case.
pub fn pick_unseen<'a>(candidates: &'a [Question], previous: &[i64]) -> Option<&'a Question> {
    let unseen: Vec<&Question> = candidates
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();
    unseen.choose(&mut thread_rng()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            category: 1,
            difficulty: 1,
        }
    }

    #[test]
    fn never_returns_an_excluded_question() {
        let pool: Vec<Question> = (1..=5).map(question).collect();
        let previous = vec![1, 3, 5];
        for _ in 0..50 {
            let picked = pick_unseen(&pool, &previous).unwrap();
            assert!(!previous.contains(&picked.id));
        }
    }

    #[test]
    fn single_remaining_candidate_is_always_picked() {
        let pool: Vec<Question> = (1..=4).map(question).collect();
        let picked = pick_unseen(&pool, &[1, 2, 4]).unwrap();
        assert_eq!(picked.id, 3);
    }

    #[test]
    fn exhausted_pool_yields_none() {
        let pool: Vec<Question> = (1..=3).map(question).collect();
        assert!(pick_unseen(&pool, &[1, 2, 3]).is_none());
    }

    #[test]
    fn empty_pool_yields_none() {
        assert!(pick_unseen(&[], &[]).is_none());
    }
}
