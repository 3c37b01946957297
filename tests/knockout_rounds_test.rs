use std::collections::HashSet;

use campus_cup_backend::tournament::knockout::group_knockout_rounds;

mod common;
use common::{kickoff, knockout_match};

#[test]
fn rounds_order_by_fixed_precedence() {
    let matches = vec![
        knockout_match(Some("Final"), None, None),
        knockout_match(Some("Round of 16"), None, None),
        knockout_match(Some("Quarterfinal"), None, None),
        knockout_match(None, None, None), // falls back to "Knockout"
        knockout_match(Some("Semifinal"), None, None),
    ];

    let rounds = group_knockout_rounds(&matches);
    let labels: Vec<&str> = rounds.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Round of 16",
            "Quarterfinal",
            "Semifinal",
            "Final",
            "Knockout"
        ]
    );
}

#[test]
fn grouping_is_a_partition_of_the_input() {
    let matches = vec![
        knockout_match(Some("QF"), Some(1), None),
        knockout_match(Some("QF"), Some(2), None),
        knockout_match(Some("SF"), Some(1), None),
        knockout_match(None, None, None),
        knockout_match(Some("Campus Clasico"), None, None),
    ];

    let rounds = group_knockout_rounds(&matches);

    let input_ids: HashSet<_> = matches.iter().map(|m| m.id).collect();
    let mut seen = HashSet::new();
    for round in &rounds {
        for m in &round.matches {
            assert!(seen.insert(m.id), "match {} appeared twice", m.id);
        }
    }
    assert_eq!(seen, input_ids);
}

#[test]
fn custom_labels_sort_after_recognized_rounds_before_fallback() {
    let matches = vec![
        knockout_match(None, None, None),
        knockout_match(Some("Campus Clasico"), None, None),
        knockout_match(Some("F"), None, None),
        knockout_match(Some("R16"), None, None),
    ];

    let rounds = group_knockout_rounds(&matches);
    let labels: Vec<&str> = rounds.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["R16", "F", "Campus Clasico", "Knockout"]);
}

#[test]
fn equal_precedence_breaks_on_label_alphabetically() {
    let matches = vec![
        knockout_match(Some("Plate"), None, None),
        knockout_match(Some("Bowl"), None, None),
    ];

    let rounds = group_knockout_rounds(&matches);
    let labels: Vec<&str> = rounds.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Bowl", "Plate"]);
}

#[test]
fn matches_within_a_round_order_by_kickoff_with_tbd_last() {
    let late = knockout_match(Some("SF"), Some(1), Some(kickoff(18)));
    let early = knockout_match(Some("SF"), Some(2), Some(kickoff(12)));
    let tbd = knockout_match(Some("SF"), Some(1), None);

    let rounds = group_knockout_rounds(&[late.clone(), tbd.clone(), early.clone()]);
    assert_eq!(rounds.len(), 1);

    let ids: Vec<_> = rounds[0].matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![early.id, late.id, tbd.id]);
}

#[test]
fn knockout_order_breaks_kickoff_ties() {
    let second = knockout_match(Some("QF"), Some(2), Some(kickoff(15)));
    let first = knockout_match(Some("QF"), Some(1), Some(kickoff(15)));

    let rounds = group_knockout_rounds(&[second.clone(), first.clone()]);
    let ids: Vec<_> = rounds[0].matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}
