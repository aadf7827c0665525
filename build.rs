use std::env;
use std::fs;
use std::path::Path;

/// Keys that `AppConfig::from_env` reads through `option_env!`.
const CONFIG_KEYS: &[&str] = &[
    "API_URL",
    "NOTIFICATION_TIMEOUT_MS",
    "SALES_PAGE_SIZE",
    "USERS_PAGE_SIZE",
    "ENABLE_LOGGING",
    "TOKEN_STORAGE_KEY",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(_) => return,
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim().trim_start_matches("export ").trim();
        let value = value.trim().trim_matches('"').trim_matches('\'');

        // Real environment wins over .env
        if CONFIG_KEYS.contains(&key) && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
