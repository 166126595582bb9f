use env_logger::Env;
use log::debug;

/// 初始化日誌，預設只輸出警告以上，可用 `RUST_LOG` 覆寫
pub fn init() {
    if let Err(e) = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init()
    {
        // 已有其他 logger，沿用即可
        debug!("略過日誌初始化: {e}");
    }
}
