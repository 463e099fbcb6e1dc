use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::BoxError;

pub const NFT_SYMBOL: &str = "SUMTEO";
pub const METADATA_BASE_URI: &str = "https://sumteo.xyz/api/nft";
const MAX_NAME_CHARS: usize = 28;

/// Shape of a freshly created collection tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    pub max_depth: u32,
    pub max_buffer_size: u32,
    pub public: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            max_buffer_size: 8,
            public: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub address: String,
    pub verified: bool,
    pub share: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftMetadata {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub collection: Option<String>,
    pub creators: Vec<Creator>,
}

impl NftMetadata {
    /// Metadata for a "reading tree" earned by reading `book`.
    pub fn for_book(book: &str, owner: &str) -> Self {
        let short: String = book.chars().take(MAX_NAME_CHARS).collect();
        Self {
            name: format!("{short} Tree"),
            symbol: NFT_SYMBOL.into(),
            uri: format!("{METADATA_BASE_URI}/{}.json", urlencoding::encode(book)),
            seller_fee_basis_points: 0,
            collection: None,
            creators: vec![Creator {
                address: owner.to_string(),
                verified: false,
                share: 100,
            }],
        }
    }
}

/// External chain client. Every call blocks until the transaction is
/// confirmed and returns its signature (or the new tree address).
pub trait Ledger: Send + Sync {
    /// Short identifier for logs (e.g. "devnet", "dry-run").
    fn name(&self) -> &str;

    /// Address of the connected wallet, `None` when disconnected.
    fn owner(&self) -> Option<&str>;

    fn record_memo(&self, memo: &str) -> Result<String, BoxError>;

    fn create_tree(&self, config: &TreeConfig) -> Result<String, BoxError>;

    fn mint(&self, tree_address: &str, metadata: &NftMetadata) -> Result<String, BoxError>;
}

/// Offline ledger. Signatures are SHA-256 digests of the call inputs, so
/// the same inputs always produce the same receipt.
#[derive(Debug, Clone)]
pub struct DryRunLedger {
    owner: String,
}

impl DryRunLedger {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
        }
    }

    fn digest(&self, parts: &[&[u8]]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.owner.as_bytes());
        for part in parts {
            hasher.update(part);
        }
        hex::encode(hasher.finalize())
    }
}

impl Ledger for DryRunLedger {
    fn name(&self) -> &str {
        "dry-run"
    }

    fn owner(&self) -> Option<&str> {
        if self.owner.is_empty() {
            None
        } else {
            Some(&self.owner)
        }
    }

    fn record_memo(&self, memo: &str) -> Result<String, BoxError> {
        Ok(self.digest(&[b"memo", memo.as_bytes()]))
    }

    fn create_tree(&self, config: &TreeConfig) -> Result<String, BoxError> {
        let shape = serde_json::to_vec(config)?;
        Ok(self.digest(&[b"tree", &shape]))
    }

    fn mint(&self, tree_address: &str, metadata: &NftMetadata) -> Result<String, BoxError> {
        let body = serde_json::to_vec(metadata)?;
        Ok(self.digest(&[b"mint", tree_address.as_bytes(), &body]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_truncates_long_titles() {
        let meta = NftMetadata::for_book("A Very Long Book Title That Keeps Going", "owner1");
        assert_eq!(meta.name, "A Very Long Book Title That  Tree");
        assert_eq!(meta.symbol, "SUMTEO");
        assert_eq!(meta.creators[0].share, 100);
        assert!(!meta.creators[0].verified);
    }

    #[test]
    fn metadata_uri_is_url_encoded() {
        let meta = NftMetadata::for_book("Deep Work", "owner1");
        assert_eq!(meta.uri, "https://sumteo.xyz/api/nft/Deep%20Work.json");
    }

    #[test]
    fn dry_run_is_deterministic() {
        let ledger = DryRunLedger::new("owner1");
        let a = ledger.record_memo("{}").unwrap();
        let b = ledger.record_memo("{}").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert_ne!(a, ledger.record_memo("{\"x\":1}").unwrap());
    }

    #[test]
    fn empty_owner_means_disconnected() {
        assert!(DryRunLedger::new("").owner().is_none());
    }
}
