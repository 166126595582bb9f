//! 依前綴移動檔案
//!
//! 掃描來源資料夾第一層，將檔名以指定前綴開頭的一般檔案移動到目標資料夾

use crate::error::OrganizeError;
use crate::tools::{
    FolderStatus, ensure_folder, list_direct_entries, move_file, validate_directory_exists,
};
use log::{debug, info, warn};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 一次整理所需的參數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizeRequest {
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
    /// 區分大小寫，不支援萬用字元
    pub prefix: String,
}

impl OrganizeRequest {
    pub fn new(
        source_dir: impl Into<PathBuf>,
        target_dir: impl Into<PathBuf>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            target_dir: target_dir.into(),
            prefix: prefix.into(),
        }
    }
}

/// 單一檔案移動失敗的紀錄
#[derive(Debug, Clone)]
pub struct MoveFailure {
    pub file_name: String,
    pub reason: String,
}

/// 整理結果
#[derive(Debug)]
pub struct OrganizeResult {
    /// 掃描的項目數（含資料夾）
    pub scanned: usize,
    /// 成功移動的檔名，依掃描順序
    pub moved: Vec<String>,
    /// 目標已有同名檔案而跳過的檔名
    pub skipped: Vec<String>,
    pub failures: Vec<MoveFailure>,
    pub target_status: FolderStatus,
    /// 是否因中斷訊號提前結束
    pub interrupted: bool,
}

impl OrganizeResult {
    #[must_use]
    pub fn moved_count(&self) -> usize {
        self.moved.len()
    }

    /// 沒有任何檔案符合前綴（未移動、未跳過、也沒有失敗）
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moved.is_empty() && self.skipped.is_empty() && self.failures.is_empty()
    }
}

/// 前綴比對，逐位元組且區分大小寫
#[must_use]
pub fn matches_prefix(file_name: &OsStr, prefix: &str) -> bool {
    file_name
        .as_encoded_bytes()
        .starts_with(prefix.as_bytes())
}

/// 依前綴移動檔案
pub struct PrefixMover {
    shutdown_signal: Arc<AtomicBool>,
}

impl PrefixMover {
    pub const fn new(shutdown_signal: Arc<AtomicBool>) -> Self {
        Self { shutdown_signal }
    }

    /// 執行整理
    ///
    /// 來源不存在或目標無法建立時直接回傳錯誤，不會移動任何檔案。
    /// 個別檔案移動失敗只記錄在結果中，不影響其餘檔案。
    pub fn organize(&self, request: &OrganizeRequest) -> Result<OrganizeResult, OrganizeError> {
        validate_directory_exists(&request.source_dir)?;
        let target_status = ensure_folder(&request.target_dir)?;

        info!(
            "開始掃描目錄: {}（前綴: '{}'）",
            request.source_dir.display(),
            request.prefix
        );
        let entries = list_direct_entries(&request.source_dir)?;

        let mut result = OrganizeResult {
            scanned: 0,
            moved: Vec::new(),
            skipped: Vec::new(),
            failures: Vec::new(),
            target_status,
            interrupted: false,
        };

        for entry in entries {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止處理");
                result.interrupted = true;
                break;
            }
            result.scanned += 1;

            if !entry.is_file || !matches_prefix(&entry.file_name, &request.prefix) {
                continue;
            }

            let file_name = entry.file_name.to_string_lossy().to_string();
            let target_path = request.target_dir.join(&entry.file_name);

            // 不覆寫目標中既有的檔案
            if target_path.symlink_metadata().is_ok() {
                debug!("跳過已存在的檔案: {}", target_path.display());
                result.skipped.push(file_name);
                continue;
            }

            match move_file(&entry.path, &target_path) {
                Ok(()) => {
                    debug!(
                        "移動檔案: {} -> {}",
                        entry.path.display(),
                        target_path.display()
                    );
                    result.moved.push(file_name);
                }
                Err(e) => {
                    warn!("移動檔案失敗 {}: {e:#}", entry.path.display());
                    result.failures.push(MoveFailure {
                        file_name,
                        reason: format!("{e:#}"),
                    });
                }
            }
        }

        info!(
            "整理完成 - 掃描: {}, 移動: {}, 跳過: {}, 失敗: {}",
            result.scanned,
            result.moved.len(),
            result.skipped.len(),
            result.failures.len()
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn create_test_mover() -> PrefixMover {
        PrefixMover::new(Arc::new(AtomicBool::new(false)))
    }

    fn write_files(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), format!("content of {name}")).unwrap();
        }
    }

    #[test]
    fn test_matches_prefix() {
        assert!(matches_prefix(OsStr::new("report_a.txt"), "report_"));
        assert!(!matches_prefix(OsStr::new("areport_c.txt"), "report_"));
        assert!(!matches_prefix(OsStr::new("Report_a.txt"), "report_"));
        assert!(!matches_prefix(OsStr::new("rep"), "report_"));
        assert!(matches_prefix(OsStr::new("anything"), ""));
        // 不支援萬用字元
        assert!(!matches_prefix(OsStr::new("report_a.txt"), "report*"));
    }

    #[test]
    fn test_organize_moves_only_matching_files() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("inbox");
        let target = temp_dir.path().join("reports");
        fs::create_dir(&source).unwrap();
        write_files(
            &source,
            &["report_a.txt", "report_b.txt", "summary.txt", "areport_c.txt"],
        );

        let result = create_test_mover()
            .organize(&OrganizeRequest::new(&source, &target, "report_"))
            .unwrap();

        assert_eq!(result.moved_count(), 2);
        assert_eq!(result.moved, vec!["report_a.txt", "report_b.txt"]);
        assert_eq!(result.scanned, 4);
        assert!(result.failures.is_empty());
        assert_eq!(result.target_status, FolderStatus::Created);

        assert!(target.join("report_a.txt").exists());
        assert!(target.join("report_b.txt").exists());
        assert!(!source.join("report_a.txt").exists());
        assert!(source.join("summary.txt").exists());
        assert!(source.join("areport_c.txt").exists());
    }

    #[test]
    fn test_organize_skips_matching_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("inbox");
        let target = temp_dir.path().join("reports");
        fs::create_dir_all(source.join("report_sub")).unwrap();
        fs::write(source.join("report_sub/report_inner.txt"), "inner").unwrap();

        let result = create_test_mover()
            .organize(&OrganizeRequest::new(&source, &target, "report_"))
            .unwrap();

        assert_eq!(result.moved_count(), 0);
        assert!(source.join("report_sub/report_inner.txt").exists());
        assert!(!target.join("report_sub").exists());
        assert!(!target.join("report_inner.txt").exists());
    }

    #[test]
    fn test_organize_missing_source_has_no_side_effects() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("missing");
        let target = temp_dir.path().join("reports");

        let err = create_test_mover()
            .organize(&OrganizeRequest::new(&source, &target, "report_"))
            .unwrap_err();

        assert!(matches!(err, OrganizeError::SourceNotFound(_)));
        assert!(!target.exists());
    }

    #[test]
    fn test_organize_target_creation_failure_moves_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("inbox");
        let target = temp_dir.path().join("occupied");
        fs::create_dir(&source).unwrap();
        write_files(&source, &["report_a.txt"]);
        fs::write(&target, "a file, not a folder").unwrap();

        let err = create_test_mover()
            .organize(&OrganizeRequest::new(&source, &target, "report_"))
            .unwrap_err();

        assert!(matches!(err, OrganizeError::CreateDirectory { .. }));
        assert!(source.join("report_a.txt").exists());
    }

    #[test]
    fn test_organize_does_not_overwrite_existing_target_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("inbox");
        let target = temp_dir.path().join("reports");
        fs::create_dir(&source).unwrap();
        fs::create_dir(&target).unwrap();
        fs::write(source.join("report_a.txt"), "new").unwrap();
        fs::write(target.join("report_a.txt"), "old").unwrap();
        write_files(&source, &["report_b.txt"]);

        let result = create_test_mover()
            .organize(&OrganizeRequest::new(&source, &target, "report_"))
            .unwrap();

        assert_eq!(result.moved, vec!["report_b.txt"]);
        assert_eq!(result.skipped, vec!["report_a.txt"]);
        assert!(!result.is_empty());
        assert_eq!(result.target_status, FolderStatus::AlreadyExists);
        assert_eq!(fs::read_to_string(source.join("report_a.txt")).unwrap(), "new");
        assert_eq!(fs::read_to_string(target.join("report_a.txt")).unwrap(), "old");
    }

    #[test]
    fn test_all_skipped_is_not_reported_as_no_match() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("inbox");
        let target = temp_dir.path().join("reports");
        fs::create_dir(&source).unwrap();
        fs::create_dir(&target).unwrap();
        write_files(&source, &["report_a.txt"]);
        write_files(&target, &["report_a.txt"]);

        let result = create_test_mover()
            .organize(&OrganizeRequest::new(&source, &target, "report_"))
            .unwrap();

        assert_eq!(result.moved_count(), 0);
        assert_eq!(result.skipped, vec!["report_a.txt"]);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_no_matching_files_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("inbox");
        let target = temp_dir.path().join("reports");
        fs::create_dir(&source).unwrap();
        write_files(&source, &["summary.txt"]);

        let result = create_test_mover()
            .organize(&OrganizeRequest::new(&source, &target, "report_"))
            .unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_organize_into_source_moves_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path();
        write_files(source, &["report_a.txt"]);

        let result = create_test_mover()
            .organize(&OrganizeRequest::new(source, source, "report_"))
            .unwrap();

        assert_eq!(result.moved_count(), 0);
        assert_eq!(result.skipped, vec!["report_a.txt"]);
        assert!(source.join("report_a.txt").exists());
    }

    #[test]
    fn test_organize_stops_on_shutdown_signal() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("inbox");
        let target = temp_dir.path().join("reports");
        fs::create_dir(&source).unwrap();
        write_files(&source, &["report_a.txt", "report_b.txt"]);

        let mover = PrefixMover::new(Arc::new(AtomicBool::new(true)));
        let result = mover
            .organize(&OrganizeRequest::new(&source, &target, "report_"))
            .unwrap();

        assert!(result.interrupted);
        assert_eq!(result.moved_count(), 0);
        assert_eq!(result.scanned, 0);
        assert!(source.join("report_a.txt").exists());
    }
}
