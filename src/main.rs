use anyhow::Result;
use arrange_files::config::types::Config;
use arrange_files::init;
use arrange_files::menu::run_main_loop;
use arrange_files::signal::setup_shutdown_signal;
use console::Term;

fn main() -> Result<()> {
    init::init();
    let term = Term::stdout();
    let shutdown_signal = setup_shutdown_signal()?;

    let mut config = Config::new()?;
    rust_i18n::set_locale(config.settings.language.as_str());

    run_main_loop(&term, &shutdown_signal, &mut config)
}
