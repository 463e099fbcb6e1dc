//! Proof-of-reading mint flow.
//!
//! The chain itself is external. This module only orders the calls into a
//! [`Ledger`] collaborator and reports which stage failed:
//!
//! 1. record the proof memo
//! 2. reuse or create the reader's collection tree
//! 3. mint a compressed NFT into the tree
//!
//! There is no retry. A failed stage ends the run.

mod ledger;
mod pipeline;
mod store;

pub use ledger::{Creator, DryRunLedger, Ledger, NftMetadata, TreeConfig};
pub use pipeline::{MintPipeline, MintReceipt};
pub use store::{FileTreeStore, MemoryTreeStore, TreeStore};
