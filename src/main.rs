use anyhow::Result;

use skyscrapers_validator::config::Config;
use skyscrapers_validator::validation::validate_file;

fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .init();

    log::info!("checking board {}", config.board_path.display());
    let valid = validate_file(&config.board_path)?;

    if valid {
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        std::process::exit(1);
    }
}
