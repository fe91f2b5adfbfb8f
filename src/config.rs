use web::config::Config;

pub fn process_config() -> anyhow::Result<Config> {
    let path = std::env::var("INSTAPRO_CONFIG").unwrap_or(String::from("config.toml"));
    let config = std::fs::read_to_string(&path)?;
    Ok(toml::from_str(&config)?)
}
