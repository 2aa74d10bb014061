use std::env;
use std::fs;
use std::path::Path;

/// (config key, environment variable)
const CONFIG_VARS: [(&str, &str); 3] = [
    ("url", "SUPABASE_URL"),
    ("anon_key", "SUPABASE_ANON_KEY"),
    ("table", "WAITLIST_TABLE"),
];

fn main() {
    let env_path = "../.env";
    let _ = dotenvy::from_path(env_path);

    let mut config = toml::Table::new();
    for (key, var) in CONFIG_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
        match env::var(var) {
            Ok(value) if !value.is_empty() => {
                config.insert(key.to_string(), toml::Value::String(value));
            }
            _ => {
                // The table has a default, the connection settings do not
                if key != "table" {
                    println!("cargo:warning={} is not set, signups will fail", var);
                    config.insert(key.to_string(), toml::Value::String(String::new()));
                }
            }
        }
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let config_toml = toml::to_string(&config).unwrap();
    fs::write(Path::new(&out_dir).join("config.toml"), config_toml)
        .expect("Failed to write store config");

    println!("cargo:rerun-if-changed={}", env_path);
}
