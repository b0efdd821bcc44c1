use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Account kind carried in the `userType` cookie.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserType {
    Candidate,
    Company,
}

impl UserType {
    pub fn dashboard_path(&self) -> String {
        format!("/{}/dashboard", self.as_ref())
    }
}
