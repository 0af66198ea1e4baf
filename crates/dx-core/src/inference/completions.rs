//! Expansion of a partial symptom vector into its fully-specified completions.
//!
//! A vector with `k` UNKNOWN entries has `2^k` completions. The walk keeps a
//! single working vector and rewrites one UNKNOWN slot per recursion level, so
//! a visitor sees every completion without any intermediate copies; only
//! [`enumerate_completions`] clones, once per leaf.

use dx_common::Symptom;
use std::convert::Infallible;

/// Indices of the UNKNOWN entries, in order.
pub fn unknown_positions(symptoms: &[Symptom]) -> Vec<usize> {
    symptoms
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.is_known())
        .map(|(i, _)| i)
        .collect()
}

/// Number of completions, `2^unknowns`, saturating at `u64::MAX`.
pub fn completion_count(symptoms: &[Symptom]) -> u64 {
    let unknowns = symptoms.iter().filter(|s| !s.is_known()).count();
    u32::try_from(unknowns)
        .ok()
        .and_then(|k| 1u64.checked_shl(k))
        .unwrap_or(u64::MAX)
}

/// Call `visit` once per completion of `symptoms`.
///
/// Completions are produced PRESENT-first for each unknown position, but
/// callers should not depend on the order. The first error returned by
/// `visit` stops the walk.
pub fn for_each_completion<F, E>(symptoms: &[Symptom], mut visit: F) -> Result<(), E>
where
    F: FnMut(&[Symptom]) -> Result<(), E>,
{
    let unknowns = unknown_positions(symptoms);
    let mut working = symptoms.to_vec();
    walk(&mut working, &unknowns, &mut visit)
}

fn walk<F, E>(working: &mut [Symptom], unknowns: &[usize], visit: &mut F) -> Result<(), E>
where
    F: FnMut(&[Symptom]) -> Result<(), E>,
{
    let Some((&index, rest)) = unknowns.split_first() else {
        return visit(&*working);
    };
    for outcome in Symptom::OUTCOMES {
        working[index] = outcome;
        walk(working, rest, visit)?;
    }
    working[index] = Symptom::Unknown;
    Ok(())
}

/// Materialise every completion of `symptoms`.
///
/// With no UNKNOWN entries the result is a single copy of the input.
pub fn enumerate_completions(symptoms: &[Symptom]) -> Vec<Vec<Symptom>> {
    let capacity = usize::try_from(completion_count(symptoms)).unwrap_or(usize::MAX);
    let mut out = Vec::with_capacity(capacity.min(1 << 16));
    let collected: Result<(), Infallible> = for_each_completion(symptoms, |c| {
        out.push(c.to_vec());
        Ok(())
    });
    match collected {
        Ok(()) => out,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use Symptom::{Absent, Present, Unknown};

    #[test]
    fn no_unknowns_yields_input() {
        let v = vec![Present, Absent, Present];
        assert_eq!(enumerate_completions(&v), vec![v.clone()]);
        assert_eq!(completion_count(&v), 1);
    }

    #[test]
    fn empty_vector_has_one_empty_completion() {
        assert_eq!(enumerate_completions(&[]), vec![Vec::<Symptom>::new()]);
    }

    #[test]
    fn single_unknown_has_two_completions() {
        let out = enumerate_completions(&[Unknown, Absent]);
        assert_eq!(out, vec![vec![Present, Absent], vec![Absent, Absent]]);
    }

    #[test]
    fn three_unknowns_are_distinct_and_complete() {
        let v = [Unknown, Present, Unknown, Unknown];
        let out = enumerate_completions(&v);
        assert_eq!(out.len(), 8);
        assert_eq!(completion_count(&v), 8);

        let distinct: HashSet<Vec<Symptom>> = out.iter().cloned().collect();
        assert_eq!(distinct.len(), 8);
        for c in &out {
            assert!(c.iter().all(|s| s.is_known()));
            assert_eq!(c[1], Present);
        }
    }

    #[test]
    fn visitor_error_stops_walk() {
        let mut seen = 0;
        let result: Result<(), &str> = for_each_completion(&[Unknown, Unknown], |_| {
            seen += 1;
            if seen == 2 {
                Err("stop")
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("stop"));
        assert_eq!(seen, 2);
    }

    #[test]
    fn count_saturates() {
        let v = vec![Unknown; 70];
        assert_eq!(completion_count(&v), u64::MAX);
        assert_eq!(completion_count(&vec![Unknown; 63]), 1 << 63);
    }

    #[test]
    fn positions_in_order() {
        assert_eq!(unknown_positions(&[Unknown, Present, Unknown]), vec![0, 2]);
    }
}
