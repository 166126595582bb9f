use crate::error::OrganizeError;
use log::warn;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub file_name: OsString,
    /// 解析符號連結後是否為一般檔案
    pub is_file: bool,
}

/// 列出資料夾第一層的項目（不遞迴），依檔名排序
///
/// 無法讀取資料夾本身時回傳錯誤；個別項目讀取失敗（例如失效的符號連結）只記錄警告並略過。
pub fn list_direct_entries(directory: &Path) -> Result<Vec<DirectoryEntry>, OrganizeError> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => entries.push(DirectoryEntry {
                is_file: entry.file_type().is_file(),
                file_name: entry.file_name().to_owned(),
                path: entry.into_path(),
            }),
            Err(e) if e.depth() == 0 => {
                return Err(OrganizeError::ListDirectory {
                    path: directory.to_path_buf(),
                    source: e.into(),
                });
            }
            Err(e) => warn!("略過無法讀取的項目: {e}"),
        }
    }

    Ok(entries)
}
