use crate::error::OrganizeError;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;

/// 資料夾確保後的狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderStatus {
    Created,
    AlreadyExists,
}

pub fn validate_directory_exists(path: &Path) -> Result<(), OrganizeError> {
    if !path.is_dir() {
        return Err(OrganizeError::SourceNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// 確保資料夾存在，必要時連同上層資料夾一起建立
///
/// 重複呼叫是安全的：已存在時回傳 [`FolderStatus::AlreadyExists`]。
/// 路徑已被一般檔案佔用時回傳錯誤。
pub fn ensure_folder(path: &Path) -> Result<FolderStatus, OrganizeError> {
    if path.as_os_str().is_empty() {
        return Err(OrganizeError::CreateDirectory {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty path"),
        });
    }

    if path.is_dir() {
        debug!("資料夾已存在: {}", path.display());
        return Ok(FolderStatus::AlreadyExists);
    }

    fs::create_dir_all(path).map_err(|source| OrganizeError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })?;

    info!("建立資料夾: {}", path.display());
    Ok(FolderStatus::Created)
}
