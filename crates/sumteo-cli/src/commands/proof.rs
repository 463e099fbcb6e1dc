use chrono::Utc;
use clap::Subcommand;
use sumteo_core::{ReadingProof, SessionType};

#[derive(Subcommand)]
pub enum ProofAction {
    /// Print the proof-of-reading memo for a session
    Memo {
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
    },
}

pub fn session_type(group: bool) -> SessionType {
    if group {
        SessionType::Group
    } else {
        SessionType::Solo
    }
}

pub fn run(action: ProofAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProofAction::Memo {
            book,
            minutes,
            pages,
            group,
        } => {
            let proof = ReadingProof::new(&book, minutes, pages, session_type(group), Utc::now())?;
            println!("{}", proof.to_memo()?);
        }
    }
    Ok(())
}
