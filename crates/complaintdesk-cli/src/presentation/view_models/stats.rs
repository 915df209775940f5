use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CountEntry {
    pub key: String,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct StatsViewModel {
    pub total: usize,
    pub by_status: Vec<CountEntry>,
    pub by_kind: Vec<CountEntry>,
}
