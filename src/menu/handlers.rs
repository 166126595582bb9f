use crate::component::{FolderCreator, PrefixOrganizer};
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub fn run_folder_creator(term: &Term) -> Result<()> {
    let creator = FolderCreator::new();

    if let Err(e) = creator.run() {
        eprintln!("{} {}", style(t!("common.error_prefix")).red().bold(), e);
    }

    pause(term)?;
    Ok(())
}

pub fn run_prefix_organizer(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<()> {
    // 上一次的中斷不影響新的整理
    shutdown_signal.store(false, Ordering::SeqCst);
    let organizer = PrefixOrganizer::new(Arc::clone(shutdown_signal));

    if let Err(e) = organizer.run(config) {
        eprintln!("{} {}", style(t!("common.error_prefix")).red().bold(), e);
    }

    pause(term)?;
    Ok(())
}
