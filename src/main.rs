use anyhow::{Context, Result};
use clap::Parser;
use shoplist::cli::{Cli, Command};
use shoplist::commands;
use shoplist::config::Config;
use shoplist::logging::{init_file_tracing, init_stderr_tracing};
use shoplist::model::State;
use shoplist::mutators::ListMutators;
use shoplist::settings::SettingsManager;
use shoplist::store::{FileStorage, StorageBackend, Store};
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(dir) = cli.data_dir.clone() {
        config.storage.data_dir = Some(dir);
    }

    let command = cli.command.unwrap_or(Command::Tui);
    if command == Command::Tui {
        init_file_tracing(&config.log_path(), &config.logging.level);
    } else {
        init_stderr_tracing(&config.logging.level);
    }

    let data_dir = config.data_dir();
    tracing::info!(data_dir = %data_dir.display(), "Opening storage");
    let backend: Arc<dyn StorageBackend> = Arc::new(FileStorage::new(data_dir));
    let state = Store::<State>::load(config.storage.state_key.clone(), Arc::clone(&backend));
    let settings = SettingsManager::new(Store::load(config.storage.settings_key.clone(), backend));
    let mutators = ListMutators::new(state, config.debounce());

    match command {
        Command::Tui => {
            shoplist::ui::run(&config, mutators, settings).context("terminal UI failed")?;
        }
        Command::Lists => println!("{}", commands::list_summary(&mutators.state())),
        Command::Export {
            list,
            all,
            format,
            out,
        } => {
            let state = mutators.state();
            let output = if all {
                commands::backup(&state, out.as_deref())?
            } else {
                commands::export(&state, list, format, out.as_deref())?
            };
            println!("{output}");
        }
        Command::Import { file, qr } => {
            let idx = commands::import(
                &mutators,
                file.as_deref(),
                qr.as_deref(),
                std::io::stdin().lock(),
            )?;
            mutators.flush();
            println!("Imported as list {idx}");
        }
        Command::Theme { name } => {
            settings.set_theme(name);
            println!("Theme set to {name}");
        }
    }

    Ok(())
}
