use chrono::Utc;
use clap::Subcommand;
use sumteo_core::mint::FileTreeStore;
use sumteo_core::{DryRunLedger, MintPipeline, ReadingProof};

use super::proof::session_type;

const DRY_RUN_OWNER: &str = "dry-run-wallet";

#[derive(Subcommand)]
pub enum MintAction {
    /// Run record -> tree -> mint against the offline ledger
    DryRun {
        /// Book title
        #[arg(long)]
        book: String,
        /// Minutes read
        #[arg(long)]
        minutes: u64,
        /// Pages read
        #[arg(long, default_value = "0")]
        pages: u32,
        /// Record a group session instead of a solo one
        #[arg(long)]
        group: bool,
        /// Wallet address used as leaf owner and creator
        #[arg(long, default_value = DRY_RUN_OWNER)]
        owner: String,
    },
}

pub fn run(action: MintAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MintAction::DryRun {
            book,
            minutes,
            pages,
            group,
            owner,
        } => {
            let proof = ReadingProof::new(&book, minutes, pages, session_type(group), Utc::now())?;
            let ledger = DryRunLedger::new(owner);
            let store = FileTreeStore::in_data_dir()?;
            let receipt = MintPipeline::new(&ledger, &store).run(&proof)?;
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
    }
    Ok(())
}
