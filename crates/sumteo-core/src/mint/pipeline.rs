use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::ledger::{Ledger, NftMetadata, TreeConfig};
use super::store::TreeStore;
use crate::error::MintError;
use crate::proof::ReadingProof;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintReceipt {
    pub proof_signature: String,
    pub tree_address: String,
    /// True when this run had to create the tree.
    pub tree_created: bool,
    pub mint_signature: String,
}

/// Ordered record → tree → mint run over borrowed collaborators.
pub struct MintPipeline<'a> {
    ledger: &'a dyn Ledger,
    store: &'a dyn TreeStore,
    tree: TreeConfig,
}

impl<'a> MintPipeline<'a> {
    pub fn new(ledger: &'a dyn Ledger, store: &'a dyn TreeStore) -> Self {
        Self {
            ledger,
            store,
            tree: TreeConfig::default(),
        }
    }

    pub fn with_tree_config(mut self, tree: TreeConfig) -> Self {
        self.tree = tree;
        self
    }

    pub fn run(&self, proof: &ReadingProof) -> Result<MintReceipt, MintError> {
        let result = self.run_stages(proof);
        if let Err(e) = &result {
            warn!(ledger = self.ledger.name(), stage = e.stage(), error = %e, "mint pipeline failed");
        }
        result
    }

    fn run_stages(&self, proof: &ReadingProof) -> Result<MintReceipt, MintError> {
        let owner = self
            .ledger
            .owner()
            .ok_or_else(|| MintError::RecordProof {
                source: "wallet not connected".into(),
            })?
            .to_string();

        let memo = proof
            .to_memo()
            .map_err(|e| MintError::RecordProof { source: e.into() })?;
        let proof_signature = self
            .ledger
            .record_memo(&memo)
            .map_err(|source| MintError::RecordProof { source })?;
        info!(ledger = self.ledger.name(), %proof_signature, "proof of reading recorded");

        let stored = self
            .store
            .load()
            .map_err(|source| MintError::StoreTree { source })?;
        let (tree_address, tree_created) = match stored {
            Some(address) => (address, false),
            None => {
                let address = self
                    .ledger
                    .create_tree(&self.tree)
                    .map_err(|source| MintError::CreateTree { source })?;
                self.store
                    .save(&address)
                    .map_err(|source| MintError::StoreTree { source })?;
                info!(ledger = self.ledger.name(), %address, "collection tree created");
                (address, true)
            }
        };

        let metadata = NftMetadata::for_book(&proof.book, &owner);
        let mint_signature = self
            .ledger
            .mint(&tree_address, &metadata)
            .map_err(|source| MintError::Mint { source })?;
        info!(ledger = self.ledger.name(), %mint_signature, "reading tree minted");

        Ok(MintReceipt {
            proof_signature,
            tree_address,
            tree_created,
            mint_signature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use crate::mint::{DryRunLedger, MemoryTreeStore};
    use crate::proof::SessionType;
    use chrono::Utc;
    use std::sync::Mutex;

    fn proof() -> ReadingProof {
        ReadingProof::new("Deep Work", 30, 12, SessionType::Solo, Utc::now()).unwrap()
    }

    /// Records calls and fails at a chosen stage.
    struct ScriptedLedger {
        fail_at: Option<&'static str>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl ScriptedLedger {
        fn failing_at(stage: Option<&'static str>) -> Self {
            Self {
                fail_at: stage,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn step(&self, stage: &'static str, ok: &str) -> Result<String, BoxError> {
            self.calls.lock().unwrap().push(stage);
            if self.fail_at == Some(stage) {
                return Err(format!("{stage} rejected").into());
            }
            Ok(ok.to_string())
        }
    }

    impl Ledger for ScriptedLedger {
        fn name(&self) -> &str {
            "scripted"
        }
        fn owner(&self) -> Option<&str> {
            Some("owner1")
        }
        fn record_memo(&self, _memo: &str) -> Result<String, BoxError> {
            self.step("memo", "sig-memo")
        }
        fn create_tree(&self, _config: &TreeConfig) -> Result<String, BoxError> {
            self.step("tree", "tree-1")
        }
        fn mint(&self, _tree: &str, _metadata: &NftMetadata) -> Result<String, BoxError> {
            self.step("mint", "sig-mint")
        }
    }

    #[test]
    fn first_run_creates_and_stores_tree() {
        let ledger = ScriptedLedger::failing_at(None);
        let store = MemoryTreeStore::new();
        let receipt = MintPipeline::new(&ledger, &store).run(&proof()).unwrap();
        assert!(receipt.tree_created);
        assert_eq!(receipt.tree_address, "tree-1");
        assert_eq!(store.load().unwrap().as_deref(), Some("tree-1"));
        assert_eq!(*ledger.calls.lock().unwrap(), vec!["memo", "tree", "mint"]);
    }

    #[test]
    fn stored_tree_is_reused() {
        let ledger = ScriptedLedger::failing_at(None);
        let store = MemoryTreeStore::with_address("existing");
        let receipt = MintPipeline::new(&ledger, &store).run(&proof()).unwrap();
        assert!(!receipt.tree_created);
        assert_eq!(receipt.tree_address, "existing");
        assert_eq!(*ledger.calls.lock().unwrap(), vec!["memo", "mint"]);
    }

    #[test]
    fn tree_failure_stops_before_mint() {
        let ledger = ScriptedLedger::failing_at(Some("tree"));
        let store = MemoryTreeStore::new();
        let err = MintPipeline::new(&ledger, &store).run(&proof()).unwrap_err();
        assert_eq!(err.stage(), "create_tree");
        assert!(err.to_string().starts_with("failed during tree creation"));
        assert_eq!(*ledger.calls.lock().unwrap(), vec!["memo", "tree"]);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn memo_failure_is_reported_as_record_stage() {
        let ledger = ScriptedLedger::failing_at(Some("memo"));
        let store = MemoryTreeStore::new();
        let err = MintPipeline::new(&ledger, &store).run(&proof()).unwrap_err();
        assert_eq!(err.stage(), "record_proof");
    }

    #[test]
    fn disconnected_wallet_fails_first_stage() {
        let ledger = DryRunLedger::new("");
        let store = MemoryTreeStore::new();
        let err = MintPipeline::new(&ledger, &store).run(&proof()).unwrap_err();
        assert_eq!(err.stage(), "record_proof");
        assert!(err.to_string().contains("wallet not connected"));
    }
}
