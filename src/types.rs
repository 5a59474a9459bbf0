use serde::Deserialize;

// Catalog enums used by the demo filters. Display strings double as the
// filter labels, so catalog matching compares against `to_string()`.

#[derive(strum::EnumIter, strum::Display, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Health {
    Healthy,
    Progressing,
    Degraded,
    Suspended,
    Missing,
    Unknown,
}

#[derive(strum::EnumIter, strum::Display, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
pub enum SyncState {
    Synced,
    #[strum(serialize = "Out of Sync")]
    OutOfSync,
}

#[derive(strum::EnumIter, strum::Display, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Environment {
    #[strum(serialize = "Production")]
    Prod,
    Staging,
    Dev,
}
