//! Group-table computation.
//!
//! Every function here is a pure reduction over already-fetched rows: tables
//! are rebuilt from scratch on every call, never incrementally maintained, so
//! a recorded result can never drift out of sync with the table.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::models::matches::{Match, MatchStage, MatchStatus};
use crate::models::team::{Group, Team, TeamGroupAssignment};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TableRow {
    pub team_id: Uuid,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
}

impl TableRow {
    fn zeroed(team_id: Uuid, team_name: String) -> Self {
        Self {
            team_id,
            team_name,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupTable {
    pub group_id: Uuid,
    pub group_name: String,
    pub rows: Vec<TableRow>,
}

/// Build one sorted table per group from the current row sets.
///
/// Every team assigned to a group gets a row even with zero matches played.
/// A finished group match whose participant is missing from the group's row
/// set (assigned late, or never formally assigned) is still counted: the team
/// is added with zeroed counters before the result is applied.
pub fn compute_group_tables(
    groups: &[Group],
    assignments: &[TeamGroupAssignment],
    teams: &[Team],
    matches: &[Match],
) -> Vec<GroupTable> {
    let team_names: HashMap<Uuid, &str> =
        teams.iter().map(|t| (t.id, t.name.as_str())).collect();

    let mut tables: Vec<GroupTable> = groups
        .iter()
        .map(|g| GroupTable {
            group_id: g.id,
            group_name: g.name.clone(),
            rows: assignments
                .iter()
                .filter(|a| a.group_id == g.id)
                .map(|a| {
                    TableRow::zeroed(a.team_id, lookup_name(&team_names, a.team_id))
                })
                .collect(),
        })
        .collect();

    for m in matches {
        if m.stage != MatchStage::Group || m.status != MatchStatus::Finished {
            continue;
        }
        let (Some(home_score), Some(away_score)) = (m.home_score, m.away_score) else {
            continue;
        };
        let Some(group_id) = m.group_id else {
            continue;
        };
        let Some(table) = tables.iter_mut().find(|t| t.group_id == group_id) else {
            continue;
        };

        let home = ensure_row(&mut table.rows, m.home_team_id, &team_names);
        apply_side(&mut table.rows[home], home_score, away_score);
        let away = ensure_row(&mut table.rows, m.away_team_id, &team_names);
        apply_side(&mut table.rows[away], away_score, home_score);
    }

    for table in &mut tables {
        sort_rows(&mut table.rows);
    }
    tables
}

fn lookup_name(team_names: &HashMap<Uuid, &str>, team_id: Uuid) -> String {
    team_names
        .get(&team_id)
        .map(|n| n.to_string())
        .unwrap_or_else(|| team_id.to_string())
}

fn ensure_row(
    rows: &mut Vec<TableRow>,
    team_id: Uuid,
    team_names: &HashMap<Uuid, &str>,
) -> usize {
    match rows.iter().position(|r| r.team_id == team_id) {
        Some(idx) => idx,
        None => {
            rows.push(TableRow::zeroed(team_id, lookup_name(team_names, team_id)));
            rows.len() - 1
        }
    }
}

/// Apply one finished result to a single side of the fixture.
/// Goal difference is recomputed from the accumulated totals on every
/// application rather than adjusted by a delta.
fn apply_side(row: &mut TableRow, scored: i32, conceded: i32) {
    row.played += 1;
    row.goals_for += scored.max(0) as u32;
    row.goals_against += conceded.max(0) as u32;
    if scored > conceded {
        row.won += 1;
        row.points += 3;
    } else if scored < conceded {
        row.lost += 1;
    } else {
        row.drawn += 1;
        row.points += 1;
    }
    row.goal_difference = row.goals_for as i32 - row.goals_against as i32;
}

/// Strict total order: points, goal difference, goals for, then team name.
/// The name tie-break keeps the table deterministic when few matches have
/// been played and ties are common.
pub fn sort_rows(rows: &mut [TableRow]) {
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
            .then(a.team_name.cmp(&b.team_name))
    });
}
