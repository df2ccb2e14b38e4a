/*!
Ranking of candidates by majority judgment.

Every candidate is graded by the same evaluators on an ordinal scale. For each candidate,
the majority grade (the median) is extracted, one vote with this grade is removed, and the
process is repeated until all the votes are consumed. The resulting sequence of majority
values is the score of the candidate: candidates are ranked by comparing these
sequences lexicographically.

```
use majority_judgment::rank;

let a = vec![0, 0, 0, 1, 1, 2, 2, 3, 3, 3];
let b = vec![0, 0, 1, 1, 2, 2, 2, 2, 3, 3];
let ranking = rank(&[("A", a), ("B", b)], false)?;
assert_eq!(ranking["B"], 0);
assert_eq!(ranking["A"], 1);
# Ok::<(), majority_judgment::MajorityJudgmentError>(())
```

See the [manual] for a longer description of the method.
*/
mod config;
mod majority_values;
mod tally;

pub mod builder;
pub mod manual;

use log::{debug, info, warn};
use snafu::prelude::*;

use std::{
    cmp::Ordering,
    collections::{BTreeSet, HashMap},
    fmt::Debug,
    hash::Hash,
};

pub use crate::config::*;
pub use crate::majority_values::*;
pub use crate::tally::*;

/// Ranks the candidates by majority judgment.
///
/// Arguments:
/// * `votes_by_candidate` the grades received by each candidate. All the candidates must
/// have received the same number of grades. The order of the candidates is used to break
/// exact ties: the candidate that comes first gets the better rank. The pairs are read as
/// a map: a candidate listed twice keeps its first position and its last grades.
/// * `reverse` by default a higher grade is a better grade. If true, a lower grade is
/// a better grade.
///
/// Returns the rank of each candidate, 0 being the best one.
pub fn rank<C, V>(
    votes_by_candidate: &[(C, Vec<V>)],
    reverse: bool,
) -> MajorityJudgmentResult<HashMap<C, usize>>
where
    C: Eq + Hash + Clone + Debug,
    V: Ord + Clone + Debug,
{
    let rules = RankingRules {
        grade_order: GradeOrder::from_reverse(reverse),
    };
    Ok(run_ranking_stats(votes_by_candidate, &rules)?.into_ranking())
}

/// Same as [rank], with an explicit comparison between grades.
pub fn rank_by<C, V, F>(
    votes_by_candidate: &[(C, Vec<V>)],
    reverse: bool,
    cmp: F,
) -> MajorityJudgmentResult<HashMap<C, usize>>
where
    C: Eq + Hash + Clone + Debug,
    V: Clone + Debug,
    F: Fn(&V, &V) -> Ordering,
{
    let rules = RankingRules {
        grade_order: GradeOrder::from_reverse(reverse),
    };
    Ok(run_ranking_stats_by(votes_by_candidate, &rules, cmp)?.into_ranking())
}

/// Runs majority judgment with the given rules and returns the detailed results.
///
/// Arguments:
/// * `votes_by_candidate` the grades received by each candidate, in candidate order.
/// A candidate listed twice keeps its first position and its last grades.
/// * `rules` the rules that govern this ranking.
pub fn run_ranking_stats<C, V>(
    votes_by_candidate: &[(C, Vec<V>)],
    rules: &RankingRules,
) -> MajorityJudgmentResult<RankingResult<C, V>>
where
    C: PartialEq + Clone + Debug,
    V: Ord + Clone + Debug,
{
    run_ranking_stats_by(votes_by_candidate, rules, Ord::cmp)
}

/// Same as [run_ranking_stats], with an explicit comparison between grades.
pub fn run_ranking_stats_by<C, V, F>(
    votes_by_candidate: &[(C, Vec<V>)],
    rules: &RankingRules,
    cmp: F,
) -> MajorityJudgmentResult<RankingResult<C, V>>
where
    C: PartialEq + Clone + Debug,
    V: Clone + Debug,
    F: Fn(&V, &V) -> Ordering,
{
    info!(
        "Processing {:?} candidates, rules: {:?}",
        votes_by_candidate.len(),
        rules
    );

    let entries = distinct_candidates(votes_by_candidate);
    let num_votes = check_balanced(&entries)?;
    info!("Processing {:?} votes per candidate", num_votes);

    let mut scored: Vec<(&C, Vec<V>)> = entries
        .into_iter()
        .map(|(candidate, votes)| {
            let tally = GradeFrequency::from_votes_by(votes, &cmp);
            debug!(
                "run_ranking_stats: candidate {:?}: tally {:?}",
                candidate,
                tally.iter().collect::<Vec<_>>()
            );
            let majority_values: Vec<V> = MajorityValues::new(tally).collect();
            debug!(
                "run_ranking_stats: candidate {:?}: majority values {:?}",
                candidate, majority_values
            );
            (candidate, majority_values)
        })
        .collect();

    // The sort is stable: candidates with the same majority values keep the input order.
    scored.sort_by(|(_, mv1), (_, mv2)| {
        let o = compare_majority_values_by(mv1, mv2, &cmp);
        match rules.grade_order {
            GradeOrder::HigherIsBetter => o.reverse(),
            GradeOrder::LowerIsBetter => o,
        }
    });

    let ranked: Vec<RankedCandidate<C, V>> = scored
        .into_iter()
        .enumerate()
        .map(|(rank, (candidate, majority_values))| RankedCandidate {
            candidate: candidate.clone(),
            rank,
            majority_values,
        })
        .collect();

    for rc in ranked.iter() {
        debug!(
            "run_ranking_stats: rank {}: {:?} (majority grade: {:?})",
            rc.rank,
            rc.candidate,
            rc.majority_grade()
        );
    }

    Ok(RankingResult { num_votes, ranked })
}

// One entry per candidate, in order of first appearance. A later entry for the same
// candidate replaces the grades of the earlier one.
fn distinct_candidates<C, V>(votes_by_candidate: &[(C, Vec<V>)]) -> Vec<(&C, &[V])>
where
    C: PartialEq + Debug,
{
    let mut entries: Vec<(&C, &[V])> = Vec::with_capacity(votes_by_candidate.len());
    for (candidate, votes) in votes_by_candidate.iter() {
        match entries.iter_mut().find(|(c, _)| *c == candidate) {
            Some(entry) => {
                warn!(
                    "distinct_candidates: candidate {:?} listed more than once, keeping the last grades",
                    candidate
                );
                entry.1 = votes.as_slice();
            }
            None => entries.push((candidate, votes.as_slice())),
        }
    }
    entries
}

// Returns the common number of votes. Nothing else is computed if the votes are unbalanced.
fn check_balanced<C, V>(entries: &[(&C, &[V])]) -> MajorityJudgmentResult<usize> {
    let lengths: BTreeSet<usize> = entries
        .iter()
        .map(|(_, votes)| votes.len())
        .collect();
    debug!("check_balanced: number of votes: {:?}", lengths);
    ensure!(
        lengths.len() <= 1,
        UnbalancedVotesSnafu {
            lengths: lengths.iter().copied().collect::<Vec<usize>>()
        }
    );
    Ok(lengths.into_iter().next().unwrap_or(0))
}
