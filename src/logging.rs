/// Log tag used on Android (`adb logcat -s camera-roll`)
pub const LOG_TAG: &str = "camera-roll";

/// Install the platform logger. Safe to call more than once.
#[cfg(target_os = "android")]
pub fn init() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag(LOG_TAG),
    );
}

/// Install the platform logger. Safe to call more than once.
///
/// Honours `RUST_LOG`, defaulting to `info`.
#[cfg(not(target_os = "android"))]
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        log::info!("{} logger initialised", LOG_TAG);
    }
}
