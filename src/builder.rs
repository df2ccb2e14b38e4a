use std::fmt::Debug;

pub use crate::config::*;

/// A builder for collecting the grades of the candidates.
///
/// Candidates are kept in the order in which they are first seen, which is the
/// order used to break exact ties.
///
/// ```
/// pub use majority_judgment::builder::Builder;
/// pub use majority_judgment::RankingRules;
/// # use majority_judgment::MajorityJudgmentError;
///
/// let mut builder = Builder::new(&RankingRules::DEFAULT_RULES)
///     .candidates(&["Anna".to_string(), "Bob".to_string()]);
///
/// builder.add_grades(&"Anna".to_string(), &[3, 2, 2]);
/// builder.add_grades(&"Bob".to_string(), &[1, 2, 1]);
///
/// let result = builder.run()?;
/// assert_eq!(result.winner(), Some(&"Anna".to_string()));
/// # Ok::<(), MajorityJudgmentError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Builder<C, V> {
    pub(crate) _rules: RankingRules,
    pub(crate) _grades: Vec<(C, Vec<V>)>,
}

impl<C, V> Builder<C, V>
where
    C: PartialEq + Clone + Debug,
    V: Ord + Clone + Debug,
{
    pub fn new(rules: &RankingRules) -> Builder<C, V> {
        Builder {
            _rules: rules.clone(),
            _grades: Vec::new(),
        }
    }

    /// Registers the candidates, in order, without any grade.
    ///
    /// A name given several times is only registered once, at its first position.
    pub fn candidates(self, cands: &[C]) -> Builder<C, V> {
        let mut grades: Vec<(C, Vec<V>)> = Vec::new();
        for c in cands {
            if !grades.iter().any(|(c2, _)| c2 == c) {
                grades.push((c.clone(), Vec::new()));
            }
        }
        Builder {
            _rules: self._rules,
            _grades: grades,
        }
    }

    /// Adds one grade for a candidate.
    ///
    /// A candidate that was not registered yet is added after all the others.
    pub fn add_grade(&mut self, candidate: &C, grade: V) {
        self.grades_mut(candidate).push(grade);
    }

    pub fn add_grades(&mut self, candidate: &C, grades: &[V]) {
        self.grades_mut(candidate).extend_from_slice(grades);
    }

    /// Runs majority judgment on the grades collected so far.
    pub fn run(&self) -> MajorityJudgmentResult<RankingResult<C, V>> {
        crate::run_ranking_stats(&self._grades, &self._rules)
    }

    fn grades_mut(&mut self, candidate: &C) -> &mut Vec<V> {
        let idx = match self._grades.iter().position(|(c, _)| c == candidate) {
            Some(idx) => idx,
            None => {
                self._grades.push((candidate.clone(), Vec::new()));
                self._grades.len() - 1
            }
        };
        &mut self._grades[idx].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_registration_order() {
        let mut builder = Builder::new(&RankingRules::DEFAULT_RULES).candidates(&["B", "A"]);
        builder.add_grade(&"A", 2);
        builder.add_grade(&"B", 2);
        builder.add_grade(&"C", 2);
        let res = builder.run().unwrap();
        let order: Vec<&str> = res.ranks().map(|(c, _)| *c).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
    }

    #[test]
    fn builder_with_reversed_scale() {
        let rules = RankingRules {
            grade_order: GradeOrder::LowerIsBetter,
        };
        let mut builder = Builder::new(&rules);
        builder.add_grades(&"A", &[0, 0, 0, 1, 1, 2, 2, 3, 3, 3]);
        builder.add_grades(&"B", &[0, 0, 1, 1, 2, 2, 2, 2, 3, 3]);
        let res = builder.run().unwrap();
        assert_eq!(res.winner(), Some(&"A"));
        assert_eq!(res.rank_of(&"B"), Some(1));
    }

    #[test]
    fn builder_duplicated_candidates() {
        let mut builder = Builder::new(&RankingRules::DEFAULT_RULES).candidates(&["A", "B", "A"]);
        builder.add_grade(&"A", 1);
        builder.add_grade(&"B", 2);
        let res = builder.run().unwrap();
        assert_eq!(res.len(), 2);
        assert_eq!(res.rank_of(&"B"), Some(0));
        assert_eq!(res.rank_of(&"A"), Some(1));

        let mut builder = Builder::new(&RankingRules::DEFAULT_RULES).candidates(&["A", "A"]);
        builder.add_grade(&"A", 1);
        let res = builder.run().unwrap();
        assert_eq!(res.ranks().collect::<Vec<_>>(), vec![(&"A", 0)]);
    }

    #[test]
    fn builder_unbalanced() {
        let mut builder = Builder::new(&RankingRules::DEFAULT_RULES).candidates(&["A", "B"]);
        builder.add_grades(&"A", &[1, 2]);
        builder.add_grade(&"B", 1);
        assert_eq!(
            builder.run(),
            Err(MajorityJudgmentError::UnbalancedVotes {
                lengths: vec![1, 2]
            })
        );
    }
}
