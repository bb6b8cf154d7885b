//! Leaderboard projection of the user collection.

use std::cmp::Reverse;

use crate::{dao::models::UserCollection, dto::ranking::RankingEntry, state::SharedState};

/// Best `limit` users by score, highest first.
///
/// The sort is stable, so users with equal scores keep their collection order.
pub fn top_rankings(users: &UserCollection, limit: usize) -> Vec<RankingEntry> {
    let mut ranked: Vec<_> = users.values().collect();
    ranked.sort_by_key(|user| Reverse(user.best_score));
    ranked
        .into_iter()
        .take(limit)
        .map(|user| RankingEntry {
            username: user.username.clone(),
            score: user.best_score,
        })
        .collect()
}

/// Compute the leaderboard from a fresh load of the collection.
pub async fn get_rankings(state: &SharedState) -> Vec<RankingEntry> {
    let users = state.users().users().await;
    top_rankings(&users, state.config().ranking_limit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::models::UserEntity;

    fn collection(scores: &[(&str, i64)]) -> UserCollection {
        scores
            .iter()
            .map(|&(name, score)| {
                let mut user = UserEntity::new(name, "hunter2");
                user.best_score = score;
                (name.to_string(), user)
            })
            .collect()
    }

    fn names(entries: &[RankingEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.username.as_str()).collect()
    }

    #[test]
    fn empty_collection_has_no_rankings() {
        assert!(top_rankings(&UserCollection::new(), 5).is_empty());
    }

    #[test]
    fn keeps_the_five_best_in_descending_order() {
        let users = collection(&[
            ("a", 10),
            ("b", 70),
            ("c", 30),
            ("d", 90),
            ("e", 0),
            ("f", 55),
            ("g", 20),
        ]);

        let top = top_rankings(&users, 5);
        assert_eq!(names(&top), ["d", "b", "f", "c", "g"]);
        assert!(top.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn ties_keep_collection_order() {
        let users = collection(&[("zoe", 40), ("adam", 40), ("max", 50), ("eve", 40)]);

        let top = top_rankings(&users, 5);
        assert_eq!(names(&top), ["max", "zoe", "adam", "eve"]);
    }

    #[test]
    fn entries_carry_no_password() {
        let users = collection(&[("alice", 50)]);
        let value = serde_json::to_value(top_rankings(&users, 5)).unwrap();

        assert_eq!(value, serde_json::json!([{"username": "alice", "score": 50}]));
    }

    #[test]
    fn repeated_queries_are_identical() {
        let users = collection(&[("a", 1), ("b", 1), ("c", 3)]);

        assert_eq!(top_rankings(&users, 5), top_rankings(&users, 5));
    }
}
