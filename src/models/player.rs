// src/models/player.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: Uuid,
    pub full_name: String,
    pub display_name: Option<String>,
    pub university: Option<String>,
    pub position: Option<String>,
    pub linked_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// Name used for presentation: display_name when set, full_name otherwise.
    pub fn presentation_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.full_name)
    }
}

/// Admin-edited counters, one row per player. Not derived from goal events.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlayerStats {
    pub player_id: Uuid,
    pub matches_played: i32,
    pub goals: i32,
    pub assists: i32,
    pub motm: i32,
    pub updated_at: DateTime<Utc>,
}

/// Coarse position bucket used for roster sorting. Positions are stored as
/// free text, so classification is pattern-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
    Other,
}

impl PositionGroup {
    pub fn from_text(raw: &str) -> Self {
        let p = raw.trim().to_lowercase();
        if p.is_empty() {
            return PositionGroup::Other;
        }
        if p == "gk" || p.contains("keep") || p.contains("goalie") {
            PositionGroup::Goalkeeper
        } else if p.contains("def") || p.contains("back") || p == "cb" || p == "lb" || p == "rb" {
            PositionGroup::Defender
        } else if p.contains("mid") || p == "cm" || p == "dm" || p == "am" {
            PositionGroup::Midfielder
        } else if p.contains("forward")
            || p.contains("strik")
            || p.contains("wing")
            || p == "fw"
            || p == "st"
            || p == "cf"
        {
            PositionGroup::Forward
        } else {
            PositionGroup::Other
        }
    }

    /// Conventional lineup order: GK first, forwards last, unknown at the end.
    pub fn sort_rank(&self) -> u8 {
        match self {
            PositionGroup::Goalkeeper => 0,
            PositionGroup::Defender => 1,
            PositionGroup::Midfielder => 2,
            PositionGroup::Forward => 3,
            PositionGroup::Other => 4,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PlayerStatsInput {
    #[serde(default)]
    pub matches_played: i32,
    #[serde(default)]
    pub goals: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub motm: i32,
}

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub full_name: String,
    pub display_name: Option<String>,
    pub university: Option<String>,
    pub position: Option<String>,
    pub linked_user_id: Option<Uuid>,
    /// Optional initial counters; zeroes when absent.
    pub stats: Option<PlayerStatsInput>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePlayerStatsRequest {
    pub matches_played: Option<i32>,
    pub goals: Option<i32>,
    pub assists: Option<i32>,
    pub motm: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AddTeamPlayerRequest {
    pub player_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct PlayerWithDetails {
    pub player: Player,
    pub team_id: Option<Uuid>,
    pub team_name: Option<String>,
    pub stats: Option<PlayerStats>,
    pub position_group: PositionGroup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_classification_handles_common_spellings() {
        assert_eq!(PositionGroup::from_text("GK"), PositionGroup::Goalkeeper);
        assert_eq!(PositionGroup::from_text("Goalkeeper"), PositionGroup::Goalkeeper);
        assert_eq!(PositionGroup::from_text("Centre Back"), PositionGroup::Defender);
        assert_eq!(PositionGroup::from_text("defender"), PositionGroup::Defender);
        assert_eq!(PositionGroup::from_text("Central Midfielder"), PositionGroup::Midfielder);
        assert_eq!(PositionGroup::from_text("Striker"), PositionGroup::Forward);
        assert_eq!(PositionGroup::from_text("Left Winger"), PositionGroup::Forward);
        assert_eq!(PositionGroup::from_text("ST"), PositionGroup::Forward);
    }

    #[test]
    fn position_classification_falls_back_to_other() {
        assert_eq!(PositionGroup::from_text(""), PositionGroup::Other);
        assert_eq!(PositionGroup::from_text("utility"), PositionGroup::Other);
        assert_eq!(PositionGroup::from_text("  "), PositionGroup::Other);
    }

    #[test]
    fn presentation_name_prefers_display_name() {
        let mut player = Player {
            id: Uuid::new_v4(),
            full_name: "Alexander Okonkwo".into(),
            display_name: Some("Alex O.".into()),
            university: None,
            position: None,
            linked_user_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(player.presentation_name(), "Alex O.");
        player.display_name = None;
        assert_eq!(player.presentation_name(), "Alexander Okonkwo");
    }
}
