//! 依前綴整理檔案元件
//!
//! 將來源資料夾中檔名以指定前綴開頭的檔案移動到目標資料夾

mod main;
mod prefix_mover;

pub use main::PrefixOrganizer;
pub use prefix_mover::{MoveFailure, OrganizeRequest, OrganizeResult, PrefixMover, matches_prefix};
