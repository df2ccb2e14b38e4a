use std::{
    cmp::Ordering,
    collections::BTreeMap,
    ops::{AddAssign, SubAssign},
};

#[derive(Eq, PartialEq, Debug, Clone, Copy, PartialOrd, Ord, Hash)]
struct VoteCount(u64);

impl VoteCount {
    const EMPTY: VoteCount = VoteCount(0);
    const ONE: VoteCount = VoteCount(1);
}

impl std::iter::Sum for VoteCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        VoteCount(iter.map(|vc| vc.0).sum())
    }
}

impl AddAssign for VoteCount {
    fn add_assign(&mut self, rhs: VoteCount) {
        self.0 += rhs.0;
    }
}

impl SubAssign for VoteCount {
    fn sub_assign(&mut self, rhs: VoteCount) {
        self.0 -= rhs.0;
    }
}

/// The number of votes received by each distinct grade of a candidate.
///
/// Grades are stored in increasing order. A grade whose count drops to zero
/// during the extraction of the majority values stays in the table.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct GradeFrequency<V> {
    grades: Vec<(V, VoteCount)>,
}

impl<V> GradeFrequency<V> {
    /// Builds the frequency table using an explicit comparison between grades.
    ///
    /// Grades that compare as equal are counted in the same bucket, which is keyed
    /// by the first of them in sorted order.
    pub fn from_votes_by<F>(votes: &[V], mut cmp: F) -> GradeFrequency<V>
    where
        V: Clone,
        F: FnMut(&V, &V) -> Ordering,
    {
        let mut sorted: Vec<&V> = votes.iter().collect();
        sorted.sort_by(|a, b| cmp(*a, *b));

        let mut grades: Vec<(V, VoteCount)> = Vec::new();
        for v in sorted {
            if let Some((last, count)) = grades.last_mut() {
                if cmp(&*last, v) == Ordering::Equal {
                    *count += VoteCount::ONE;
                    continue;
                }
            }
            grades.push((v.clone(), VoteCount::ONE));
        }
        GradeFrequency { grades }
    }

    /// The number of distinct grades.
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// The number of votes still in the table.
    pub fn total(&self) -> u64 {
        self.grades.iter().map(|(_, vc)| *vc).sum::<VoteCount>().0
    }

    /// Iterates over the grades and their counts, lowest grade first.
    pub fn iter(&self) -> impl Iterator<Item = (&V, u64)> + '_ {
        self.grades.iter().map(|(v, vc)| (v, vc.0))
    }

    /// The cumulative proportion of votes up to each grade, lowest grade first.
    ///
    /// The last element is 1 as long as the table holds at least one vote.
    pub(crate) fn cumulative_proportions(&self) -> Vec<f64> {
        let total = self.total() as f64;
        let mut cum = VoteCount::EMPTY;
        self.grades
            .iter()
            .map(|(_, vc)| {
                cum += *vc;
                cum.0 as f64 / total
            })
            .collect()
    }

    /// Removes one vote from the grade at the given position and returns this grade.
    pub(crate) fn take_one(&mut self, idx: usize) -> &V {
        let (grade, count) = &mut self.grades[idx];
        assert!(
            *count > VoteCount::EMPTY,
            "take_one: no vote left for the grade at position {}",
            idx
        );
        *count -= VoteCount::ONE;
        grade
    }
}

impl<V: Ord + Clone> GradeFrequency<V> {
    /// Builds the frequency table using the natural order of the grades.
    pub fn from_votes(votes: &[V]) -> GradeFrequency<V> {
        GradeFrequency::from_votes_by(votes, Ord::cmp)
    }

    /// The number of votes for this grade (0 for a grade that was never given).
    pub fn count(&self, grade: &V) -> u64 {
        match self.grades.binary_search_by(|(v, _)| v.cmp(grade)) {
            Ok(idx) => self.grades[idx].1 .0,
            Err(_) => 0,
        }
    }
}

impl<V: Ord> From<GradeFrequency<V>> for BTreeMap<V, u64> {
    fn from(tally: GradeFrequency<V>) -> Self {
        tally.grades.into_iter().map(|(v, vc)| (v, vc.0)).collect()
    }
}

/// Converts the votes of a candidate into the frequency of each grade, sorted by grade.
pub fn convert_votes_to_tally<V: Ord + Clone>(votes: &[V]) -> GradeFrequency<V> {
    GradeFrequency::from_votes(votes)
}
