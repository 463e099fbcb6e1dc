use clap::Subcommand;
use sumteo_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one value by dot-separated key
    Get {
        /// e.g. "timer.target_minutes" or "proof.session_type"
        key: String,
    },
    /// Change one value and write the file
    Set { key: String, value: String },
    /// Print every key with its current value
    List,
    /// Print where the config file lives
    Path,
    /// Overwrite the file with defaults
    Reset,
}

fn unknown_key(config: &Config, key: &str) -> Box<dyn std::error::Error> {
    format!("unknown key: {key} (known: {})", config.keys().join(", ")).into()
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config.get(&key).ok_or_else(|| unknown_key(&config, &key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            if config.get(&key).is_none() {
                return Err(unknown_key(&config, &key));
            }
            config.set(&key, &value)?;
            println!("{key} = {}", config.get(&key).unwrap_or_default());
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for key in config.keys() {
                println!("{key} = {}", config.get(&key).unwrap_or_default());
            }
        }
        ConfigAction::Path => println!("{}", Config::path()?.display()),
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
