use serde::Deserialize;

#[derive(Deserialize)]
pub struct ScheduleQuery {
    pub date: Option<String>,
}
