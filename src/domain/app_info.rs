use serde::{Deserialize, Serialize};

/// Mobile-client update gate: minimum supported version plus a kill switch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppInfo {
    pub minimum_version: String,
    pub is_error: bool,
}
