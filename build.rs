use std::{env, path::PathBuf};

const DEFAULT_LOW_BATTERY_MILLIVOLTS: &str = "2450";

fn main() {
    // 1) Load optional env files (still supported for convenience)
    let _ = dotenvy::from_filename(".env");
    load_home_env(".watch.env");

    // 2) Provide fallbacks so the crate compiles without .env
    let low_battery = env_or_default("LOW_BATTERY_MILLIVOLTS", DEFAULT_LOW_BATTERY_MILLIVOLTS);
    let low_battery = parse_millivolts(low_battery.trim()).unwrap_or_else(|| {
        panic!("LOW_BATTERY_MILLIVOLTS must be a whole number of millivolts, got {low_battery:?}")
    });

    // 3) Expose as compile-time constants, digits only so the const parser can read them
    println!("cargo:rustc-env=LOW_BATTERY_MILLIVOLTS={low_battery}");

    // Optional: don't rebuild unless these change
    println!("cargo:rerun-if-env-changed=LOW_BATTERY_MILLIVOLTS");
    println!("cargo:rerun-if-changed=.env");
}

fn load_home_env(file: &str) {
    let home = match env::var_os("USERPROFILE").or_else(|| env::var_os("HOME")) {
        Some(path) => PathBuf::from(path),
        None => return,
    };
    let path = home.join(file);
    let _ = dotenvy::from_path(&path);
}

fn parse_millivolts(text: &str) -> Option<u16> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
