//! Tab filtering for the client table.
//!
//! The tab strip partitions records by [`ClientType`]. Filtering runs before
//! sorting: the visible view is the selected tab's subset, ordered by the
//! active rule set.

use clientdesk_model::{ClientRecord, ClientType};
use std::fmt;
use std::str::FromStr;

/// Tab selector shown above the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClientTab {
    #[default]
    All,
    Individual,
    Company,
}

impl ClientTab {
    pub fn label(&self) -> &'static str {
        match self {
            ClientTab::All => "All",
            ClientTab::Individual => ClientType::Individual.as_str(),
            ClientTab::Company => ClientType::Company.as_str(),
        }
    }

    /// Client type selected by this tab, `None` for "All".
    pub fn client_type(&self) -> Option<ClientType> {
        match self {
            ClientTab::All => None,
            ClientTab::Individual => Some(ClientType::Individual),
            ClientTab::Company => Some(ClientType::Company),
        }
    }

    pub fn matches(&self, record: &ClientRecord) -> bool {
        self.client_type()
            .is_none_or(|client_type| record.client_type == client_type)
    }
}

impl From<ClientType> for ClientTab {
    fn from(client_type: ClientType) -> Self {
        match client_type {
            ClientType::Individual => ClientTab::Individual,
            ClientType::Company => ClientTab::Company,
        }
    }
}

impl fmt::Display for ClientTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab '{0}' (expected all, individual or company)")]
pub struct UnknownTab(pub String);

impl FromStr for ClientTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ClientTab::All);
        }
        s.parse::<ClientType>()
            .map(ClientTab::from)
            .map_err(|_| UnknownTab(s.trim().to_string()))
    }
}

/// Records visible under `tab`, in source order.
pub fn filter_by_tab(records: &[ClientRecord], tab: ClientTab) -> Vec<ClientRecord> {
    records
        .iter()
        .filter(|record| tab.matches(record))
        .cloned()
        .collect()
}
