use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// 移動檔案，只有跨檔案系統導致 rename 失敗時才改用複製後刪除
pub fn move_file(source: &Path, target: &Path) -> Result<()> {
    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!("跨檔案系統，改用複製後刪除: {}", source.display());
            copy_and_delete(source, target)
        }
        Err(e) => Err(e).with_context(|| {
            format!(
                "Failed to rename {} -> {}",
                source.display(),
                target.display()
            )
        }),
    }
}

/// 複製檔案後刪除原檔案；原檔案無法刪除時移除複本，避免重複
fn copy_and_delete(source: &Path, target: &Path) -> Result<()> {
    fs::copy(source, target).with_context(|| {
        format!(
            "Failed to copy {} -> {}",
            source.display(),
            target.display()
        )
    })?;

    if let Err(e) = fs::remove_file(source) {
        if let Err(cleanup_err) = fs::remove_file(target) {
            warn!("無法移除複本 {}: {cleanup_err}", target.display());
        }
        return Err(e).with_context(|| format!("Failed to remove original {}", source.display()));
    }

    Ok(())
}
