use clap::Subcommand;
use sumteo_core::ReadingRoom;

/// Minute at which the demo posts the chapter milestone.
const MILESTONE_MINUTE: u64 = 1;

#[derive(Subcommand)]
pub enum RoomAction {
    /// Print the demo room after some simulated minutes
    Show {
        /// Simulated minutes to advance
        #[arg(long, default_value = "0")]
        minutes: u64,
    },
}

fn simulate(minutes: u64) -> ReadingRoom {
    let mut room = ReadingRoom::new();
    let mut rng = rand::thread_rng();
    if minutes > 0 {
        room.admit_next(&mut rng);
    }
    for minute in 1..=minutes {
        room.advance_minute();
        if minute == MILESTONE_MINUTE {
            room.post("Miso", "finished a chapter!");
        }
    }
    room
}

pub fn run(action: RoomAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RoomAction::Show { minutes } => {
            let room = simulate(minutes);
            println!("{}", serde_json::to_string_pretty(&room)?);
        }
    }
    Ok(())
}
