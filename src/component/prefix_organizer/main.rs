use super::prefix_mover::{OrganizeRequest, OrganizeResult, PrefixMover};
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use log::{info, warn};
use rust_i18n::t;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// 依前綴整理檔案元件
pub struct PrefixOrganizer {
    shutdown_signal: Arc<AtomicBool>,
}

impl PrefixOrganizer {
    pub const fn new(shutdown_signal: Arc<AtomicBool>) -> Self {
        Self { shutdown_signal }
    }

    pub fn run(&self, config: &mut Config) -> Result<()> {
        println!("{}", style(t!("organizer.title")).cyan().bold());

        let Some(source) = self.prompt_source_path(config)? else {
            return Ok(()); // ESC pressed
        };
        let prefix = self.prompt_prefix()?;
        let target = self.prompt_target_path()?;

        let request = OrganizeRequest::new(PathBuf::from(&source), PathBuf::from(target), prefix);
        self.print_request(&request);

        if !self.confirm_move()? {
            println!("{}", style(t!("common.cancelled")).yellow());
            return Ok(());
        }

        // 只記錄存在的來源路徑
        if Path::new(&source).is_dir() {
            add_recent_path(&mut config.settings, &source);
            if let Err(e) = save_settings(&config.settings) {
                warn!("無法儲存路徑歷史: {e:#}");
            }
        }

        let mover = PrefixMover::new(Arc::clone(&self.shutdown_signal));
        match mover.organize(&request) {
            Ok(result) => self.print_result(&request, &result),
            Err(e) => {
                warn!("整理失敗: {e}");
                println!("{} {}", style(t!("common.error_prefix")).red().bold(), e);
            }
        }

        Ok(())
    }

    fn prompt_source_path(&self, config: &Config) -> Result<Option<String>> {
        let recent_paths = &config.settings.recent_paths;

        if recent_paths.is_empty() {
            return self.input_source_path().map(Some);
        }

        let mut options: Vec<String> = recent_paths
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let indicator = if Path::new(p).is_dir() { "✓" } else { "✗" };
                format!("{} [{}] {}", i + 1, indicator, p)
            })
            .collect();
        options.push(t!("organizer.new_path").to_string());

        println!("{}", style(t!("common.esc_hint")).dim());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("organizer.select_source"))
            .items(&options)
            .default(0)
            .interact_opt()?;

        match selection {
            None => Ok(None),
            Some(idx) if idx < recent_paths.len() => Ok(Some(recent_paths[idx].clone())),
            Some(_) => self.input_source_path().map(Some),
        }
    }

    fn input_source_path(&self) -> Result<String> {
        let path: String = Input::new()
            .with_prompt(t!("organizer.prompt_source"))
            .interact_text()?;
        Ok(path.trim().to_string())
    }

    fn prompt_prefix(&self) -> Result<String> {
        let prefix: String = Input::new()
            .with_prompt(t!("organizer.prompt_prefix"))
            .allow_empty(true)
            .interact_text()?;
        Ok(prefix)
    }

    fn prompt_target_path(&self) -> Result<String> {
        let path: String = Input::new()
            .with_prompt(t!("organizer.prompt_target"))
            .interact_text()?;
        Ok(path.trim().to_string())
    }

    fn confirm_move(&self) -> Result<bool> {
        let confirm = Confirm::new()
            .with_prompt(t!("organizer.confirm"))
            .default(true)
            .interact()?;
        Ok(confirm)
    }

    fn print_request(&self, request: &OrganizeRequest) {
        let source = request.source_dir.display();
        let target = request.target_dir.display();
        let prefix = &request.prefix;

        println!("{}", style("---------------------------").dim());
        println!("{}", t!("organizer.source_set", source = source));
        println!("{}", t!("organizer.prefix_set", prefix = prefix));
        println!("{}", t!("organizer.target_set", target = target));
        if prefix.is_empty() {
            println!("{}", style(t!("organizer.empty_prefix")).yellow());
        }
        println!("{}", style("---------------------------").dim());
    }

    fn print_result(&self, request: &OrganizeRequest, result: &OrganizeResult) {
        let source = request.source_dir.display();
        let target = request.target_dir.display();
        let prefix = &request.prefix;
        let count = result.moved_count();

        println!("{}", t!("organizer.target_ready", target = target));
        println!();
        println!(
            "{}",
            style(t!("organizer.scanning", source = source)).dim()
        );

        for file in &result.moved {
            println!(
                "  {} {}",
                style("[MOVED]").green(),
                t!("organizer.moved", file = file, target = target)
            );
        }

        for file in &result.skipped {
            println!(
                "  {} {}",
                style("[SKIPPED]").yellow(),
                t!("organizer.skipped", file = file)
            );
        }

        for failure in &result.failures {
            let file = &failure.file_name;
            let reason = &failure.reason;
            println!(
                "  {} {}",
                style("[ERROR]").red(),
                t!("organizer.failed", file = file, reason = reason)
            );
        }

        println!();
        println!("{}", style(t!("organizer.complete")).cyan().bold());
        if result.interrupted {
            println!("{}", style(t!("organizer.interrupted")).yellow());
        }
        println!(
            "{}",
            style(t!("organizer.summary", count = count, prefix = prefix)).green()
        );
        if result.is_empty() {
            println!("{}", style(t!("organizer.no_match", prefix = prefix)).yellow());
        }

        info!(
            "依前綴整理完成 - 移動: {}, 跳過: {}, 失敗: {}",
            count,
            result.skipped.len(),
            result.failures.len()
        );
    }
}
