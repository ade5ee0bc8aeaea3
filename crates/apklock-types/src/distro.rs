use serde::{Deserialize, Serialize};

/// Distribution identity and release version read from release metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionInfo {
    /// Value of the identity key (`ID`), as written in the file.
    pub id: String,
    /// `<major>.<minor>` with any patch component dropped.
    pub release: String,
}
