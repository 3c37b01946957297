use campus_cup_backend::tournament::standings::compute_group_tables;

mod common;
use common::{assign, finished_group_match, group, scheduled_group_match, team};

#[test]
fn two_match_group_produces_expected_table() {
    // Group with teams Alpha, Bravo, Charlie, Delta; Alpha 2-1 Bravo and
    // Charlie 0-0 Delta have finished.
    let g = group("Group A");
    let alpha = team("Alpha United");
    let bravo = team("Bravo FC");
    let charlie = team("Charlie Rovers");
    let delta = team("Delta Athletic");

    let teams = vec![alpha.clone(), bravo.clone(), charlie.clone(), delta.clone()];
    let assignments = vec![
        assign(&alpha, &g),
        assign(&bravo, &g),
        assign(&charlie, &g),
        assign(&delta, &g),
    ];
    let matches = vec![
        finished_group_match(&g, &alpha, &bravo, (2, 1)),
        finished_group_match(&g, &charlie, &delta, (0, 0)),
    ];

    let tables = compute_group_tables(&[g], &assignments, &teams, &matches);
    assert_eq!(tables.len(), 1);
    let rows = &tables[0].rows;
    assert_eq!(rows.len(), 4);

    // Winner first
    assert_eq!(rows[0].team_id, alpha.id);
    assert_eq!(rows[0].played, 1);
    assert_eq!(rows[0].won, 1);
    assert_eq!(rows[0].drawn, 0);
    assert_eq!(rows[0].lost, 0);
    assert_eq!(rows[0].goals_for, 2);
    assert_eq!(rows[0].goals_against, 1);
    assert_eq!(rows[0].goal_difference, 1);
    assert_eq!(rows[0].points, 3);

    // The draw splits on the name tie-break: Charlie before Delta
    assert_eq!(rows[1].team_id, charlie.id);
    assert_eq!(rows[1].points, 1);
    assert_eq!(rows[1].drawn, 1);
    assert_eq!(rows[2].team_id, delta.id);
    assert_eq!(rows[2].points, 1);

    // Loser last
    assert_eq!(rows[3].team_id, bravo.id);
    assert_eq!(rows[3].lost, 1);
    assert_eq!(rows[3].goal_difference, -1);
    assert_eq!(rows[3].points, 0);
}

#[test]
fn assigned_team_with_no_matches_gets_all_zero_row() {
    let g = group("Group B");
    let idle = team("Idle Wanderers");
    let teams = vec![idle.clone()];
    let assignments = vec![assign(&idle, &g)];

    let tables = compute_group_tables(&[g], &assignments, &teams, &[]);
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].rows.len(), 1);

    let row = &tables[0].rows[0];
    assert_eq!(row.team_id, idle.id);
    assert_eq!(
        (row.played, row.won, row.drawn, row.lost),
        (0, 0, 0, 0)
    );
    assert_eq!((row.goals_for, row.goals_against), (0, 0));
    assert_eq!(row.goal_difference, 0);
    assert_eq!(row.points, 0);
}

#[test]
fn unassigned_participant_is_added_leniently() {
    // A finished result against a team that was never formally assigned to
    // the group still counts for both sides.
    let g = group("Group C");
    let assigned_team = team("Assigned FC");
    let stray = team("Stray City");
    let teams = vec![assigned_team.clone(), stray.clone()];
    let assignments = vec![assign(&assigned_team, &g)];
    let matches = vec![finished_group_match(&g, &assigned_team, &stray, (1, 3))];

    let tables = compute_group_tables(&[g], &assignments, &teams, &matches);
    let rows = &tables[0].rows;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].team_id, stray.id);
    assert_eq!(rows[0].points, 3);
    assert_eq!(rows[1].team_id, assigned_team.id);
    assert_eq!(rows[1].points, 0);
}

#[test]
fn unfinished_and_scoreless_matches_do_not_count() {
    let g = group("Group D");
    let home = team("Home FC");
    let away = team("Away FC");
    let teams = vec![home.clone(), away.clone()];
    let assignments = vec![assign(&home, &g), assign(&away, &g)];

    let mut null_score = finished_group_match(&g, &home, &away, (0, 0));
    null_score.home_score = None;

    let matches = vec![scheduled_group_match(&g, &home, &away), null_score];

    let tables = compute_group_tables(&[g], &assignments, &teams, &matches);
    for row in &tables[0].rows {
        assert_eq!(row.played, 0);
        assert_eq!(row.points, 0);
    }
}

#[test]
fn points_total_matches_decisive_and_drawn_match_counts() {
    // 3 points enter the table per decisive match, 2 per draw.
    let g = group("Group E");
    let teams: Vec<_> = ["North", "East", "South", "West"]
        .iter()
        .map(|n| team(n))
        .collect();
    let assignments: Vec<_> = teams.iter().map(|t| assign(t, &g)).collect();

    let matches = vec![
        finished_group_match(&g, &teams[0], &teams[1], (2, 0)), // decisive
        finished_group_match(&g, &teams[2], &teams[3], (1, 1)), // draw
        finished_group_match(&g, &teams[0], &teams[2], (0, 4)), // decisive
        finished_group_match(&g, &teams[1], &teams[3], (2, 2)), // draw
        finished_group_match(&g, &teams[0], &teams[3], (1, 0)), // decisive
    ];
    let decisive = 3;
    let drawn = 2;

    let tables = compute_group_tables(&[g], &assignments, &teams, &matches);
    let total_points: u32 = tables[0].rows.iter().map(|r| r.points).sum();
    assert_eq!(total_points, 3 * decisive + 2 * drawn);

    // Goal difference is exactly goals_for - goals_against on every row, and
    // the differences cancel out across the group.
    for row in &tables[0].rows {
        assert_eq!(
            row.goal_difference,
            row.goals_for as i32 - row.goals_against as i32
        );
    }
    let gd_sum: i32 = tables[0].rows.iter().map(|r| r.goal_difference).sum();
    assert_eq!(gd_sum, 0);
}

#[test]
fn sorting_is_deterministic_and_idempotent() {
    // Everyone level on points, goal difference and goals for: names decide.
    let g = group("Group F");
    let zeta = team("Zeta");
    let yankee = team("Yankee");
    let xray = team("Xray");
    let teams = vec![zeta.clone(), yankee.clone(), xray.clone()];
    let assignments = vec![assign(&zeta, &g), assign(&yankee, &g), assign(&xray, &g)];

    let tables = compute_group_tables(&[g.clone()], &assignments, &teams, &[]);
    let names: Vec<&str> = tables[0].rows.iter().map(|r| r.team_name.as_str()).collect();
    assert_eq!(names, vec!["Xray", "Yankee", "Zeta"]);

    // Recomputing yields the identical order
    let again = compute_group_tables(&[g], &assignments, &teams, &[]);
    assert_eq!(tables[0].rows, again[0].rows);
}

#[test]
fn goals_for_breaks_equal_goal_difference() {
    let g = group("Group G");
    let high = team("High Scorers");
    let low = team("Low Scorers");
    let filler_a = team("Filler A");
    let filler_b = team("Filler B");
    let teams = vec![high.clone(), low.clone(), filler_a.clone(), filler_b.clone()];
    let assignments = vec![
        assign(&high, &g),
        assign(&low, &g),
        assign(&filler_a, &g),
        assign(&filler_b, &g),
    ];

    // Both winners end on 3 points and +1 goal difference; High Scorers get
    // there with more goals.
    let matches = vec![
        finished_group_match(&g, &high, &filler_a, (4, 3)),
        finished_group_match(&g, &low, &filler_b, (1, 0)),
    ];

    let tables = compute_group_tables(&[g], &assignments, &teams, &matches);
    let rows = &tables[0].rows;
    assert_eq!(rows[0].team_id, high.id);
    assert_eq!(rows[1].team_id, low.id);
    assert_eq!(rows[0].points, rows[1].points);
    assert_eq!(rows[0].goal_difference, rows[1].goal_difference);
    assert!(rows[0].goals_for > rows[1].goals_for);
}
