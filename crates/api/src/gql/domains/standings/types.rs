use async_graphql::{SimpleObject, ID};

#[derive(SimpleObject, Clone)]
pub struct Standing {
    /// 1-based table position
    pub position: i32,
    pub team_id: ID,
    pub team_name: String,
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
}

impl Standing {
    pub fn new(position: usize, row: league_core::StandingRow) -> Self {
        Self {
            position: position as i32,
            goal_difference: row.goal_difference() as i32,
            team_id: row.team.id.into(),
            team_name: row.team.name,
            played: row.played as i32,
            won: row.won as i32,
            drawn: row.drawn as i32,
            lost: row.lost as i32,
            goals_for: row.goals_for as i32,
            goals_against: row.goals_against as i32,
            points: row.points as i32,
        }
    }
}
