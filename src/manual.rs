/*!

This is the long-form manual for `majority_judgment`.

## Grades

Every evaluator gives one grade to every candidate. Grades are ordinal: they only need
to be comparable, for example numbers (`0` = reject .. `5` = excellent) or labels with
an explicit order (see [crate::rank_by]). By default, a higher grade is a better grade.
Use `reverse = true` (or [crate::GradeOrder::LowerIsBetter]) for scales where the best
grade is the lowest one, like school grades `1` to `6`.

All the candidates must have received the same number of grades. Unbalanced grades are
rejected with [crate::MajorityJudgmentError::UnbalancedVotes] and nothing is computed.

## Majority values

The majority grade of a candidate is the median of its grades: the lowest grade such
that at least half of the grades are at or below it. When exactly half of the grades are
at or below a grade, this lower grade is selected.

The majority grade alone often leads to ties. Majority judgment breaks them by
removing one grade equal to the majority grade and computing the majority grade of the
remaining grades, again and again until no grade is left. For the grades
`[7, 11, 9, 9, 11]`:

| remaining grades    | majority grade |
|---------------------|----------------|
| `7, 9, 9, 11, 11`   | `9`            |
| `7, 9, 11, 11`      | `9`            |
| `7, 11, 11`         | `11`           |
| `7, 11`             | `7`            |
| `11`                | `11`           |

The sequence `[9, 9, 11, 7, 11]` contains as many values as there were grades.

## Ranking

Candidates are sorted by their sequence of majority values: the first value that differs
decides. The candidate with the best sequence gets the rank 0. Candidates with exactly
the same sequence keep the order in which they were given, so every candidate gets a
distinct rank.

With the grades below, `A` has the majority grade `1` and `B` has the majority grade
`2`, so `B` is ranked first. With `reverse = true`, `A` is ranked first.

```text
A: 0 0 0 1 1 2 2 3 3 3   -> majority values 1 2 1 2 0 3 0 3 0 3
B: 0 0 1 1 2 2 2 2 3 3   -> majority values 2 2 1 2 1 2 0 3 0 3
```

## Logging

The library logs through the `log` crate: the rules and the number of candidates at the
`info` level, the tally and the majority values of every candidate at the `debug` level.
No logger is installed by the library.

 */
