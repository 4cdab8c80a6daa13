use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use gridboard::cli::{CliArgs, CliCommand};
use gridboard::config::DashboardConfig;
use gridboard::drop_target::IdSequence;
use gridboard::messages::{DashboardMsg, Msg};
use gridboard::model::AppModel;
use gridboard::registry::WidgetType;
use gridboard::runtime::Runtime;
use gridboard::store::FileStorage;
use gridboard::view;

fn print_types() {
    println!(
        "{:<18} {:<18} {:>7} {:>7} {:>8} {:>9}",
        "TYPE", "TITLE", "DEFAULT", "MIN", "MULTIPLE", "DELETABLE"
    );
    for widget_type in WidgetType::ALL {
        let config = widget_type.config();
        println!(
            "{:<18} {:<18} {:>7} {:>7} {:>8} {:>9}",
            widget_type.as_str(),
            config.title,
            format!("{}x{}", config.default_size.w, config.default_size.h),
            format!("{}x{}", config.min_size.w, config.min_size.h),
            if config.allow_multiple { "yes" } else { "no" },
            if config.deletable { "yes" } else { "no" },
        );
    }
}

fn load_replay(path: &Path) -> Result<Vec<Msg>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read replay file {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse replay file {}", path.display()))
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    gridboard::tracing::init();

    let command = args.command();
    if command == CliCommand::Types {
        print_types();
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => DashboardConfig::load_from(path),
        None => DashboardConfig::load(),
    };
    args.apply_overrides(&mut config);

    let storage = match &args.storage_dir {
        Some(dir) => FileStorage::new(dir),
        None => FileStorage::in_config_dir().context("No config directory available")?,
    };
    tracing::debug!("Layout storage at {}", storage.root().display());

    let model = AppModel::new(config, Box::new(storage), IdSequence::seeded_from_clock());
    let mut runtime = Runtime::new(model);
    runtime.start();
    runtime.run_until_idle();

    let replayed = match command {
        CliCommand::Show | CliCommand::Types => false,
        CliCommand::Add { widget_type } => {
            runtime.dispatch(Msg::Dashboard(DashboardMsg::AddWidget(widget_type)));
            false
        }
        CliCommand::Remove { id } => {
            runtime.dispatch(Msg::Dashboard(DashboardMsg::DeleteWidget(id)));
            false
        }
        CliCommand::Reset => {
            runtime.dispatch(Msg::Dashboard(DashboardMsg::ResetLayout));
            false
        }
        CliCommand::Replay { file } => {
            let messages = load_replay(&file)?;
            tracing::info!("Replaying {} messages from {}", messages.len(), file.display());
            for msg in messages {
                runtime.dispatch(msg);
                runtime.process_async_messages();
                if runtime.has_quit() {
                    break;
                }
            }
            true
        }
    };

    runtime.run_until_idle();

    let model = runtime.model();
    print!("{}", view::render(model));
    if replayed {
        println!("\ncanonical:");
        println!("{}", serde_json::to_string_pretty(model.layout())?);
        println!("\nenriched:");
        println!("{}", serde_json::to_string_pretty(&model.enriched_layout())?);
    }

    runtime.shutdown();
    Ok(())
}
