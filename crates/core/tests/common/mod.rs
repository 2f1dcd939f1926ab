use chrono::NaiveDate;
use league_core::Team;
use uuid::Uuid;

/// Teams with fresh ids, named after `names`, in the given order.
#[allow(dead_code)]
pub fn teams(names: &[&str]) -> Vec<Team> {
    names
        .iter()
        .map(|name| Team::new(Uuid::new_v4(), *name))
        .collect()
}

/// `count` teams named T1..Tn.
#[allow(dead_code)]
pub fn numbered_teams(count: usize) -> Vec<Team> {
    (1..=count)
        .map(|i| Team::new(Uuid::new_v4(), format!("T{i}")))
        .collect()
}

#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
