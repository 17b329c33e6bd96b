use crate::modules::time_entries::core::time_entry::TimerKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTimer {
    pub key: TimerKey,
    pub description: Option<String>,
}
