use crate::tools::{FolderStatus, ensure_folder};
use anyhow::Result;
use console::style;
use dialoguer::Input;
use log::{info, warn};
use rust_i18n::t;
use std::path::PathBuf;

/// 建立資料夾元件
pub struct FolderCreator;

impl FolderCreator {
    pub const fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style(t!("folder_creator.title")).cyan().bold());

        let input_path = self.prompt_folder_path()?;
        let folder = PathBuf::from(&input_path);
        let path = folder.display();

        match ensure_folder(&folder) {
            Ok(status) => {
                info!(
                    "資料夾就緒: {} (新建立: {})",
                    path,
                    status == FolderStatus::Created
                );
                println!("{}", style(t!("folder_creator.ready", path = path)).green());
            }
            Err(e) => {
                warn!("建立資料夾失敗: {e}");
                let reason = e.to_string();
                println!(
                    "{}",
                    style(t!("folder_creator.failed", path = path, reason = reason)).red()
                );
            }
        }

        Ok(())
    }

    fn prompt_folder_path(&self) -> Result<String> {
        let path: String = Input::new()
            .with_prompt(t!("folder_creator.prompt_path"))
            .interact_text()?;
        Ok(path.trim().to_string())
    }
}

impl Default for FolderCreator {
    fn default() -> Self {
        Self::new()
    }
}
