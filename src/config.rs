use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use snafu::Snafu;

// ******** Output data structures *********

/// The outcome for one candidate.
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct RankedCandidate<C, V> {
    pub candidate: C,
    /// Zero-based rank, 0 being the best candidate.
    pub rank: usize,
    /// The majority values of this candidate, in extraction order.
    /// The first element is the majority grade.
    pub majority_values: Vec<V>,
}

impl<C, V> RankedCandidate<C, V> {
    /// The majority grade (median) of this candidate, if it received any vote.
    pub fn majority_grade(&self) -> Option<&V> {
        self.majority_values.first()
    }
}

/// The full result of a ranking.
///
/// The candidates are stored by increasing rank: the first one is the winner.
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct RankingResult<C, V> {
    /// The number of votes that every candidate received.
    pub num_votes: usize,
    pub ranked: Vec<RankedCandidate<C, V>>,
}

impl<C, V> RankingResult<C, V> {
    /// The best candidate, or None if there was no candidate.
    pub fn winner(&self) -> Option<&C> {
        self.ranked.first().map(|rc| &rc.candidate)
    }

    /// Iterates over the candidates and their rank, best candidate first.
    pub fn ranks(&self) -> impl Iterator<Item = (&C, usize)> + '_ {
        self.ranked.iter().map(|rc| (&rc.candidate, rc.rank))
    }

    pub fn rank_of(&self, candidate: &C) -> Option<usize>
    where
        C: PartialEq,
    {
        self.ranked
            .iter()
            .find(|rc| rc.candidate == *candidate)
            .map(|rc| rc.rank)
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Drops the majority values and only keeps the rank of each candidate.
    pub fn into_ranking(self) -> HashMap<C, usize>
    where
        C: Eq + Hash,
    {
        self.ranked
            .into_iter()
            .map(|rc| (rc.candidate, rc.rank))
            .collect()
    }
}

/// Errors that prevent the algorithm from completing successfully.
#[derive(Eq, PartialEq, Debug, Clone, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum MajorityJudgmentError {
    /// The candidates did not all receive the same number of votes.
    /// The distinct numbers of votes are listed in increasing order.
    #[snafu(display(
        "Unbalanced grades: candidates received different numbers of votes {lengths:?}"
    ))]
    UnbalancedVotes { lengths: Vec<usize> },
}

pub type MajorityJudgmentResult<T> = Result<T, MajorityJudgmentError>;

// ********* Configuration **********

/// The direction of the grading scale.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GradeOrder {
    /// A higher grade is a better grade (e.g. 0 = reject, 5 = excellent).
    HigherIsBetter,
    /// A lower grade is a better grade (e.g. 1 = excellent, 6 = reject).
    LowerIsBetter,
}

impl GradeOrder {
    /// Converts the `reverse` flag of [crate::rank]: `true` means lower grades are better.
    pub fn from_reverse(reverse: bool) -> GradeOrder {
        if reverse {
            GradeOrder::LowerIsBetter
        } else {
            GradeOrder::HigherIsBetter
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct RankingRules {
    #[serde(rename = "gradeOrder")]
    pub grade_order: GradeOrder,
}

impl RankingRules {
    pub const DEFAULT_RULES: RankingRules = RankingRules {
        grade_order: GradeOrder::HigherIsBetter,
    };
}

impl Default for RankingRules {
    fn default() -> Self {
        RankingRules::DEFAULT_RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> RankingResult<&'static str, u8> {
        RankingResult {
            num_votes: 3,
            ranked: vec![
                RankedCandidate {
                    candidate: "Bob",
                    rank: 0,
                    majority_values: vec![2, 1, 3],
                },
                RankedCandidate {
                    candidate: "Anna",
                    rank: 1,
                    majority_values: vec![1, 0, 2],
                },
            ],
        }
    }

    #[test]
    fn lookups() {
        let res = result();
        assert_eq!(res.winner(), Some(&"Bob"));
        assert_eq!(res.rank_of(&"Anna"), Some(1));
        assert_eq!(res.rank_of(&"Clara"), None);
        assert_eq!(res.ranked[1].majority_grade(), Some(&1));
        assert_eq!(
            res.ranks().collect::<Vec<_>>(),
            vec![(&"Bob", 0), (&"Anna", 1)]
        );
    }

    #[test]
    fn into_ranking() {
        let ranking = result().into_ranking();
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking["Bob"], 0);
        assert_eq!(ranking["Anna"], 1);
    }

    #[test]
    fn empty_result() {
        let res: RankingResult<&str, u8> = RankingResult {
            num_votes: 0,
            ranked: vec![],
        };
        assert!(res.is_empty());
        assert_eq!(res.winner(), None);
    }

    #[test]
    fn reverse_flag() {
        assert_eq!(GradeOrder::from_reverse(false), GradeOrder::HigherIsBetter);
        assert_eq!(GradeOrder::from_reverse(true), GradeOrder::LowerIsBetter);
        assert_eq!(RankingRules::default(), RankingRules::DEFAULT_RULES);
    }

    #[test]
    fn rules_from_json() {
        let rules: RankingRules =
            serde_json::from_str(r#"{"gradeOrder": "lowerIsBetter"}"#).unwrap();
        assert_eq!(rules.grade_order, GradeOrder::LowerIsBetter);
    }

    #[test]
    fn result_to_json() {
        let js = serde_json::to_value(result()).unwrap();
        assert_eq!(js["num_votes"], 3);
        assert_eq!(js["ranked"][0]["candidate"], "Bob");
        assert_eq!(js["ranked"][0]["majority_values"][0], 2);
        assert_eq!(js["ranked"][1]["rank"], 1);
    }

    #[test]
    fn error_message() {
        let e = MajorityJudgmentError::UnbalancedVotes {
            lengths: vec![2, 3],
        };
        assert_eq!(
            e.to_string(),
            "Unbalanced grades: candidates received different numbers of votes [2, 3]"
        );
    }
}
