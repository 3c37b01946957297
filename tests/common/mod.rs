#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use campus_cup_backend::models::matches::{Match, MatchStage, MatchStatus};
use campus_cup_backend::models::player::{Player, PlayerStats};
use campus_cup_backend::models::team::{Group, Team, TeamGroupAssignment};

pub fn team(name: &str) -> Team {
    Team {
        id: Uuid::new_v4(),
        name: name.to_string(),
        created_at: Utc::now(),
    }
}

pub fn group(name: &str) -> Group {
    Group {
        id: Uuid::new_v4(),
        name: name.to_string(),
        created_at: Utc::now(),
    }
}

pub fn assign(team: &Team, group: &Group) -> TeamGroupAssignment {
    TeamGroupAssignment {
        team_id: team.id,
        group_id: group.id,
        assigned_at: Utc::now(),
    }
}

pub fn finished_group_match(group: &Group, home: &Team, away: &Team, score: (i32, i32)) -> Match {
    Match {
        id: Uuid::new_v4(),
        stage: MatchStage::Group,
        group_id: Some(group.id),
        home_team_id: home.id,
        away_team_id: away.id,
        start_time: None,
        status: MatchStatus::Finished,
        home_score: Some(score.0),
        away_score: Some(score.1),
        knockout_round: None,
        knockout_order: None,
        knockout_label: None,
        motm_player_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn scheduled_group_match(group: &Group, home: &Team, away: &Team) -> Match {
    let mut m = finished_group_match(group, home, away, (0, 0));
    m.status = MatchStatus::Scheduled;
    m
}

pub fn knockout_match(
    round: Option<&str>,
    order: Option<i32>,
    start_time: Option<DateTime<Utc>>,
) -> Match {
    Match {
        id: Uuid::new_v4(),
        stage: MatchStage::Knockout,
        group_id: None,
        home_team_id: Uuid::new_v4(),
        away_team_id: Uuid::new_v4(),
        start_time,
        status: MatchStatus::Scheduled,
        home_score: Some(0),
        away_score: Some(0),
        knockout_round: round.map(|s| s.to_string()),
        knockout_order: order,
        knockout_label: None,
        motm_player_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn kickoff(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, hour, 0, 0).unwrap()
}

pub fn player(full_name: &str, display_name: Option<&str>) -> Player {
    Player {
        id: Uuid::new_v4(),
        full_name: full_name.to_string(),
        display_name: display_name.map(|s| s.to_string()),
        university: None,
        position: None,
        linked_user_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn stats(player: &Player, goals: i32, assists: i32) -> PlayerStats {
    PlayerStats {
        player_id: player.id,
        matches_played: 0,
        goals,
        assists,
        motm: 0,
        updated_at: Utc::now(),
    }
}
