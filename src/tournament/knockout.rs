//! Knockout bracket grouping and ordering.
//!
//! Round labels are stored as short codes (R16, QF, SF, F, 3P) or free text,
//! so grouping and ordering work off the raw label with a precedence function
//! that recognizes the usual spellings.

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::matches::Match;

/// Grouping key for knockout matches with no stored round.
pub const FALLBACK_ROUND_LABEL: &str = "Knockout";

#[derive(Debug, Clone, Serialize)]
pub struct KnockoutRound {
    pub label: String,
    pub matches: Vec<Match>,
}

/// The grouping key for a knockout match: the stored round code, else the
/// free-text label, else the fallback.
pub fn round_label(m: &Match) -> String {
    normalize_round_label(m.knockout_round.as_deref().or(m.knockout_label.as_deref()))
}

pub fn normalize_round_label(raw: Option<&str>) -> String {
    match raw {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => FALLBACK_ROUND_LABEL.to_string(),
    }
}

/// Fixed precedence for ordering rounds. Unrecognized custom labels land on
/// 50 so they sort together in the middle instead of disappearing; the
/// fallback bucket sorts last.
pub fn round_precedence(label: &str) -> u8 {
    let l = label.trim().to_lowercase();
    if l == "r16" || l == "ro16" || l.contains("round of 16") {
        1
    } else if l == "qf" || l.contains("quarter") {
        2
    } else if l == "sf" || l.contains("semi") {
        3
    } else if l == "3p" || l.contains("third") || l.contains("3rd") || l.contains("bronze") {
        4
    } else if l == "f" || l.contains("final") {
        5
    } else if l == "knockout" {
        99
    } else {
        50
    }
}

/// Partition knockout matches into rounds and order both the rounds and the
/// matches within each round.
///
/// Rounds order by precedence, ties broken alphabetically. Within a round,
/// matches order by kickoff time with unscheduled (TBD) matches last, then by
/// the stored in-round order, then by id so the result is a total order.
pub fn group_knockout_rounds(matches: &[Match]) -> Vec<KnockoutRound> {
    let mut rounds: Vec<KnockoutRound> = Vec::new();

    for m in matches {
        let label = round_label(m);
        match rounds.iter_mut().find(|r| r.label == label) {
            Some(round) => round.matches.push(m.clone()),
            None => rounds.push(KnockoutRound {
                label,
                matches: vec![m.clone()],
            }),
        }
    }

    for round in &mut rounds {
        round.matches.sort_by(compare_within_round);
    }

    rounds.sort_by(|a, b| {
        round_precedence(&a.label)
            .cmp(&round_precedence(&b.label))
            .then(a.label.cmp(&b.label))
    });

    rounds
}

fn compare_within_round(a: &Match, b: &Match) -> Ordering {
    let by_time = match (a.start_time, b.start_time) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_time
        .then(a.knockout_order.unwrap_or(1).cmp(&b.knockout_order.unwrap_or(1)))
        .then(a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_recognizes_codes_and_words() {
        assert_eq!(round_precedence("R16"), 1);
        assert_eq!(round_precedence("Round of 16"), 1);
        assert_eq!(round_precedence("QF"), 2);
        assert_eq!(round_precedence("Quarterfinal"), 2);
        assert_eq!(round_precedence("Semifinal"), 3);
        assert_eq!(round_precedence("3P"), 4);
        assert_eq!(round_precedence("Third Place"), 4);
        assert_eq!(round_precedence("F"), 5);
        assert_eq!(round_precedence("Grand Final"), 5);
        assert_eq!(round_precedence("Knockout"), 99);
        assert_eq!(round_precedence("Play-in"), 50);
    }

    #[test]
    fn quarterfinal_is_not_mistaken_for_a_final() {
        // "Quarterfinal" and "Semifinal" both contain "final"; the earlier
        // round must win.
        assert_eq!(round_precedence("quarterfinal"), 2);
        assert_eq!(round_precedence("semifinal"), 3);
    }

    #[test]
    fn missing_label_normalizes_to_fallback() {
        assert_eq!(normalize_round_label(None), "Knockout");
        assert_eq!(normalize_round_label(Some("")), "Knockout");
        assert_eq!(normalize_round_label(Some("   ")), "Knockout");
        assert_eq!(normalize_round_label(Some(" SF ")), "SF");
    }
}
