//! 建立資料夾元件
//!
//! 確保指定的資料夾存在，必要時建立所有上層資料夾

mod main;

pub use main::FolderCreator;
