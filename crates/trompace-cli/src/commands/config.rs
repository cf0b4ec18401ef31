use anyhow::Result;
use std::path::Path;
use trompace_client::{config, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    println!("[logging]");
    println!("  level: {}", config.logging.level);

    println!("\n[server]");
    println!("  host: {}", config.server.host);
    println!("  secure: {}", config.server.secure);
    println!("  http url: {}", config.server.http_url());
    println!("  websocket url: {}", config.server.websocket_url());

    println!("\n[auth]");
    println!("  id: {}", config.auth.id);
    println!("  key: {}", mask(&config.auth.key));
    println!("  scopes: {}", config.auth.scopes.join(", "));
    println!("  token cache: {}", config.token_cache_path()?.display());

    println!(
        "\nPriority: ENV vars (TROMPACE_<SECTION>__<KEY>) > Config file"
    );

    Ok(())
}

/// Keep the first four characters of a secret.
fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if visible.len() == secret.len() {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}

/// Show the config file path that would be loaded.
pub fn show_path(explicit: Option<&Path>) {
    match explicit {
        Some(path) => println!("{}", path.display()),
        None => match std::env::var_os(config::CONFIG_ENV_VAR) {
            Some(value) if !value.is_empty() => println!("{}", Path::new(&value).display()),
            _ => println!("{}", config::config_file_path().display()),
        },
    }
}

/// Show example configuration.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with the example contents.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to set the CE host and your credentials.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
