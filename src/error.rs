use std::io;
use std::path::PathBuf;

/// 整理流程中會中止整個操作的錯誤
#[derive(Debug, thiserror::Error)]
pub enum OrganizeError {
    /// 來源路徑不存在或不是資料夾
    #[error("Source directory not found at '{}'", .0.display())]
    SourceNotFound(PathBuf),

    /// 無法建立資料夾（權限不足、名稱無效、或路徑已是檔案）
    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 無法讀取來源資料夾內容
    #[error("Failed to list directory '{}': {source}", .path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
