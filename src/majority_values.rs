use std::cmp::Ordering;

use crate::tally::GradeFrequency;

/// Finds the position of the median grade in a sequence of cumulative proportions.
///
/// The sequence must be normalized: the last element is 1. The median grade is the
/// first grade whose cumulative proportion reaches 0.5. A proportion of exactly 0.5
/// selects the lower grade.
///
/// ```
/// use majority_judgment::median_grade;
///
/// assert_eq!(median_grade(&[0.1, 0.5, 0.7, 1.0]), 1);
/// assert_eq!(median_grade(&[0.1, 0.3, 1.0]), 2);
/// ```
///
/// # Panics
///
/// If the sequence is empty, contains negative values or is not normalized.
pub fn median_grade(seq: &[f64]) -> usize {
    assert!(seq.iter().all(|s| *s >= 0.0), "{:?}", seq);
    assert!(
        seq.last() == Some(&1.0),
        "Normalize the sequence first: {:?}",
        seq
    );

    let last = seq.len() - 1;
    seq[..last].iter().position(|x| *x >= 0.5).unwrap_or(last)
}

/// The majority values of a candidate, extracted one at a time.
///
/// Each step picks the median grade of the remaining votes, yields it and removes one
/// vote for this grade. The iterator yields exactly as many values as there were votes.
///
/// The algorithm is lazy: the frequency table is only updated when the next value
/// is requested.
#[derive(Debug, Clone)]
pub struct MajorityValues<V> {
    tally: GradeFrequency<V>,
    remaining: usize,
}

impl<V> MajorityValues<V> {
    /// Starts the extraction from the frequency table of a candidate.
    pub fn new(tally: GradeFrequency<V>) -> MajorityValues<V> {
        let remaining = tally.total() as usize;
        MajorityValues { tally, remaining }
    }
}

impl<V: Clone> Iterator for MajorityValues<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        if self.remaining == 0 {
            return None;
        }
        let proportions = self.tally.cumulative_proportions();
        let idx = median_grade(&proportions);
        self.remaining -= 1;
        Some(self.tally.take_one(idx).clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V: Clone> ExactSizeIterator for MajorityValues<V> {}

/// Computes all the majority values of a candidate.
///
/// Examples from the book by Balinski and Laraki (1.5):
///
/// ```
/// use majority_judgment::compute_majority_values;
///
/// assert_eq!(compute_majority_values(&[7, 11, 9, 9, 11]), vec![9, 9, 11, 7, 11]);
/// assert_eq!(compute_majority_values(&[8, 11, 9, 9, 10]), vec![9, 9, 10, 8, 11]);
/// ```
pub fn compute_majority_values<V: Ord + Clone>(votes: &[V]) -> Vec<V> {
    MajorityValues::new(GradeFrequency::from_votes(votes)).collect()
}

/// Same as [compute_majority_values], with an explicit comparison between grades.
pub fn compute_majority_values_by<V, F>(votes: &[V], cmp: F) -> Vec<V>
where
    V: Clone,
    F: FnMut(&V, &V) -> Ordering,
{
    MajorityValues::new(GradeFrequency::from_votes_by(votes, cmp)).collect()
}

/// The majority grade (the median), or None if there is no vote.
pub fn majority_grade<V: Ord + Clone>(votes: &[V]) -> Option<V> {
    MajorityValues::new(GradeFrequency::from_votes(votes)).next()
}

/// Compares two sequences of majority values. The first difference decides.
pub fn compare_majority_values_by<V, F>(a: &[V], b: &[V], mut cmp: F) -> Ordering
where
    F: FnMut(&V, &V) -> Ordering,
{
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| cmp(x, y))
        .find(|o| *o != Ordering::Equal)
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}
