use uuid::Uuid;

use crate::models::matches::{CreateGoalRequest, CreateMatchRequest, MatchStage};

/// Centralized validation for tournament operations. All checks run before
/// any query is issued; failures surface as protocol errors with a
/// user-readable message.
pub struct TournamentValidator;

impl TournamentValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_create_match(&self, request: &CreateMatchRequest) -> Result<(), sqlx::Error> {
        if request.home_team_id.is_nil() || request.away_team_id.is_nil() {
            return Err(sqlx::Error::Protocol(
                "Both home and away teams are required".into(),
            ));
        }

        if request.home_team_id == request.away_team_id {
            return Err(sqlx::Error::Protocol(
                "A team cannot play against itself".into(),
            ));
        }

        if request.stage == MatchStage::Group && request.group_id.is_none() {
            return Err(sqlx::Error::Protocol(
                "Group-stage matches must belong to a group".into(),
            ));
        }

        Ok(())
    }

    /// Knockout order is 1-based; anything missing or below 1 becomes 1.
    pub fn coerce_knockout_order(&self, order: Option<i32>) -> i32 {
        order.unwrap_or(1).max(1)
    }

    pub fn validate_scores(&self, home_score: i32, away_score: i32) -> Result<(), sqlx::Error> {
        if home_score < 0 {
            return Err(sqlx::Error::Protocol(
                format!("Home score cannot be negative: {}", home_score).into(),
            ));
        }

        if away_score < 0 {
            return Err(sqlx::Error::Protocol(
                format!("Away score cannot be negative: {}", away_score).into(),
            ));
        }

        // Reasonable upper limit (prevent obvious data entry errors)
        const MAX_REASONABLE_SCORE: i32 = 50;
        if home_score > MAX_REASONABLE_SCORE || away_score > MAX_REASONABLE_SCORE {
            return Err(sqlx::Error::Protocol(
                format!(
                    "Score too high: {} - {} (max {})",
                    home_score, away_score, MAX_REASONABLE_SCORE
                )
                .into(),
            ));
        }

        Ok(())
    }

    /// Validate a goal event against the fixture it belongs to.
    pub fn validate_goal(
        &self,
        request: &CreateGoalRequest,
        home_team_id: Uuid,
        away_team_id: Uuid,
    ) -> Result<(), sqlx::Error> {
        if request.scorer_player_id.is_nil() {
            return Err(sqlx::Error::Protocol("A scorer is required".into()));
        }

        if request.scoring_team_id != home_team_id && request.scoring_team_id != away_team_id {
            return Err(sqlx::Error::Protocol(
                "Scoring team is not part of this match".into(),
            ));
        }

        if request.assist_player_id == Some(request.scorer_player_id) {
            return Err(sqlx::Error::Protocol(
                "A player cannot assist their own goal".into(),
            ));
        }

        if let Some(minute) = request.minute {
            if minute < 0 {
                return Err(sqlx::Error::Protocol(
                    format!("Minute cannot be negative: {}", minute).into(),
                ));
            }
        }

        Ok(())
    }

    /// Strip control characters and trim; used for team, group and player
    /// names before insert.
    pub fn sanitize_string_input(&self, input: &str) -> String {
        input
            .trim()
            .chars()
            .filter(|&c| c != '\0' && c != '\t' && c != '\r' && c != '\n')
            .collect::<String>()
            .trim()
            .to_string()
    }

    pub fn validate_and_sanitize_name(&self, name: &str) -> Result<String, sqlx::Error> {
        let sanitized = self.sanitize_string_input(name);

        if sanitized.is_empty() {
            return Err(sqlx::Error::Protocol("Name cannot be empty".into()));
        }

        if sanitized.len() > 100 {
            return Err(sqlx::Error::Protocol(
                "Name too long (max 100 characters)".into(),
            ));
        }

        if !sanitized.chars().any(|c| c.is_alphanumeric()) {
            return Err(sqlx::Error::Protocol(
                "Name must contain alphanumeric characters".into(),
            ));
        }

        Ok(sanitized)
    }
}

impl Default for TournamentValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_request(stage: MatchStage) -> CreateMatchRequest {
        CreateMatchRequest {
            stage,
            group_id: Some(Uuid::new_v4()),
            home_team_id: Uuid::new_v4(),
            away_team_id: Uuid::new_v4(),
            start_time: None,
            knockout_round: None,
            knockout_order: None,
            knockout_label: None,
        }
    }

    #[test]
    fn rejects_team_playing_itself() {
        let validator = TournamentValidator::new();
        let mut request = match_request(MatchStage::Group);
        request.away_team_id = request.home_team_id;
        assert!(validator.validate_create_match(&request).is_err());
    }

    #[test]
    fn rejects_group_match_without_group() {
        let validator = TournamentValidator::new();
        let mut request = match_request(MatchStage::Group);
        request.group_id = None;
        assert!(validator.validate_create_match(&request).is_err());

        // Knockout matches need no group
        let mut request = match_request(MatchStage::Knockout);
        request.group_id = None;
        assert!(validator.validate_create_match(&request).is_ok());
    }

    #[test]
    fn knockout_order_coerces_to_at_least_one() {
        let validator = TournamentValidator::new();
        assert_eq!(validator.coerce_knockout_order(None), 1);
        assert_eq!(validator.coerce_knockout_order(Some(0)), 1);
        assert_eq!(validator.coerce_knockout_order(Some(-3)), 1);
        assert_eq!(validator.coerce_knockout_order(Some(2)), 2);
    }

    #[test]
    fn rejects_goal_from_uninvolved_team() {
        let validator = TournamentValidator::new();
        let home = Uuid::new_v4();
        let away = Uuid::new_v4();
        let request = CreateGoalRequest {
            scoring_team_id: Uuid::new_v4(),
            scorer_player_id: Uuid::new_v4(),
            assist_player_id: None,
            minute: Some(12),
        };
        assert!(validator.validate_goal(&request, home, away).is_err());
    }

    #[test]
    fn rejects_self_assist() {
        let validator = TournamentValidator::new();
        let home = Uuid::new_v4();
        let away = Uuid::new_v4();
        let scorer = Uuid::new_v4();
        let request = CreateGoalRequest {
            scoring_team_id: home,
            scorer_player_id: scorer,
            assist_player_id: Some(scorer),
            minute: None,
        };
        assert!(validator.validate_goal(&request, home, away).is_err());
    }

    #[test]
    fn sanitizes_names() {
        let validator = TournamentValidator::new();
        assert_eq!(
            validator.validate_and_sanitize_name("  Engineering FC ").unwrap(),
            "Engineering FC"
        );
        assert!(validator.validate_and_sanitize_name("   ").is_err());
        assert!(validator.validate_and_sanitize_name("!!!").is_err());
    }
}
