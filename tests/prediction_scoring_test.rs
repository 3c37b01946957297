use uuid::Uuid;

use campus_cup_backend::tournament::predictions::{
    prediction_points, tally_leaderboard, SettledPrediction,
};

#[test]
fn exact_score_earns_three_points() {
    assert_eq!(prediction_points(2, 1, 2, 1), 3);
    assert_eq!(prediction_points(0, 0, 0, 0), 3);
}

#[test]
fn correct_outcome_earns_one_point() {
    // Right winner, wrong score
    assert_eq!(prediction_points(1, 0, 3, 1), 1);
    // Right loser margin direction
    assert_eq!(prediction_points(0, 2, 1, 4), 1);
    // Called a draw, different scoreline
    assert_eq!(prediction_points(1, 1, 2, 2), 1);
}

#[test]
fn wrong_outcome_earns_nothing() {
    assert_eq!(prediction_points(2, 0, 0, 2), 0);
    assert_eq!(prediction_points(1, 1, 1, 0), 0);
    assert_eq!(prediction_points(0, 1, 1, 1), 0);
}

fn settled(
    user_id: Uuid,
    username: &str,
    pred: (i32, i32),
    result: (i32, i32),
) -> SettledPrediction {
    SettledPrediction {
        user_id,
        username: username.to_string(),
        home_pred: pred.0,
        away_pred: pred.1,
        home_score: result.0,
        away_score: result.1,
    }
}

#[test]
fn leaderboard_totals_points_per_fan() {
    let ana = Uuid::new_v4();
    let ben = Uuid::new_v4();

    let rows = vec![
        settled(ana, "ana", (2, 1), (2, 1)), // 3
        settled(ana, "ana", (1, 0), (2, 0)), // 1
        settled(ben, "ben", (0, 3), (1, 0)), // 0
        settled(ben, "ben", (1, 1), (1, 1)), // 3
    ];

    let board = tally_leaderboard(&rows);
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].user_id, ana);
    assert_eq!(board[0].points, 4);
    assert_eq!(board[0].predictions_scored, 2);
    assert_eq!(board[1].user_id, ben);
    assert_eq!(board[1].points, 3);
}

#[test]
fn leaderboard_ties_break_on_username() {
    let zoe = Uuid::new_v4();
    let abe = Uuid::new_v4();

    let rows = vec![
        settled(zoe, "zoe", (1, 0), (1, 0)), // 3
        settled(abe, "abe", (2, 2), (2, 2)), // 3
    ];

    let board = tally_leaderboard(&rows);
    assert_eq!(board[0].username, "abe");
    assert_eq!(board[1].username, "zoe");
    assert_eq!(board[0].points, board[1].points);
}
