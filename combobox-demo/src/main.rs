mod error;
mod paths;
mod render;
mod terminal;

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::{Parser, ValueEnum};
use combobox::input::{self, FocusTarget, PointerTarget};
use combobox::item::LabeledItem;
use combobox::{Combobox, ComboboxConfig, ComboboxKind, ComboboxOptions};
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use futures::StreamExt;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::DemoError;
use crate::terminal::TerminalGuard;

const DEFAULT_ITEMS: &[&str] = &[
    "Apple",
    "Apricot",
    "Banana",
    "Blueberry",
    "Cherry",
    "Clementine",
    "Date",
    "Fig",
    "Grape",
    "Kiwi",
    "Lemon",
    "Mango",
    "Orange",
    "Papaya",
    "Pear",
    "Plum",
    "Raspberry",
    "Strawberry",
];

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Dropdown,
    MultiSelect,
    Filterable,
}

impl From<KindArg> for ComboboxKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Dropdown => ComboboxKind::Dropdown,
            KindArg::MultiSelect => ComboboxKind::MultiSelect,
            KindArg::Filterable => ComboboxKind::FilterableMultiSelect,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Interactive terminal demo of the combobox controller", long_about = None)]
#[command(version)]
struct CliArgs {
    /// JSON options file. Defaults to `options.json` in the config directory.
    #[arg(value_name = "path", long, short = 'o')]
    options: Option<PathBuf>,

    /// Override the kind from the options file.
    #[arg(value_name = "kind", long, short = 'k')]
    kind: Option<KindArg>,

    /// Items file: one item per line, `id<TAB>label` or just `label`.
    #[arg(value_name = "items")]
    items: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() -> Result<(), DemoError> {
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    log::info!("Logging to {}", path.display());
    Ok(())
}

fn load_options(args: &CliArgs) -> Result<ComboboxOptions, DemoError> {
    let mut options = match &args.options {
        Some(path) => ComboboxOptions::from_path(path)?,
        None => match paths::options_file().filter(|path| path.exists()) {
            Some(path) => ComboboxOptions::from_path(path)?,
            None => ComboboxOptions {
                kind: ComboboxKind::FilterableMultiSelect,
                toggle_item_selection: true,
                inline_selected_items: true,
                label: "Choose fruit".to_string(),
                placeholder: "type to filter".to_string(),
                ..ComboboxOptions::default()
            },
        },
    };
    if let Some(kind) = args.kind {
        options.kind = kind.into();
    }
    Ok(options)
}

fn parse_item(line: &str) -> Option<LabeledItem> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(match line.split_once('\t') {
        Some((id, label)) => LabeledItem::new(id.trim(), label.trim()),
        None => LabeledItem::new(line, line),
    })
}

fn load_items(path: Option<&Path>) -> Result<Vec<LabeledItem>, DemoError> {
    let Some(path) = path else {
        return Ok(DEFAULT_ITEMS
            .iter()
            .copied()
            .filter_map(parse_item)
            .collect());
    };
    let content = fs::read_to_string(path).map_err(|source| DemoError::Items {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().filter_map(parse_item).collect())
}

fn next_focus(focus: FocusTarget, has_input: bool) -> FocusTarget {
    match focus {
        FocusTarget::ToggleButton if has_input => FocusTarget::Input,
        _ => FocusTarget::ToggleButton,
    }
}

async fn run(args: CliArgs) -> Result<(), DemoError> {
    init_logging()?;
    let options = load_options(&args)?;
    let items = load_items(args.items.as_deref())?;
    log::info!("Loaded {} items, kind {:?}", items.len(), options.kind);

    let input_focused = Arc::new(AtomicBool::new(false));
    let mut combobox = Combobox::new(ComboboxConfig::new(items).options(options))
        .with_input_focus(Arc::clone(&input_focused))
        .on_change(|change| {
            let ids: Vec<&str> = change
                .selected_items
                .iter()
                .map(|item| item.id.as_str())
                .collect();
            log::info!(
                "change {:?}: open={} selected={:?} query={:?}",
                change.reason,
                change.is_open,
                ids,
                change.input_value
            );
        });

    let mut guard = TerminalGuard::new()?;
    let mut events = EventStream::new();
    let mut focus = FocusTarget::ToggleButton;
    let mut status = String::from("Ready");
    let mut layout = render::draw(guard.stdout(), &combobox, focus, &status)?;

    while let Some(event) = events.next().await {
        let event = event?;

        let translated = match &event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                match key.code {
                    KeyCode::Char('c' | 'q') if ctrl => break,
                    KeyCode::Tab => {
                        focus = next_focus(focus, combobox.kind().has_input());
                        input_focused.store(focus == FocusTarget::Input, Ordering::SeqCst);
                        None
                    }
                    _ => input::translate_event(&combobox, &event, focus),
                }
            }
            Event::Mouse(mouse) => {
                let target = layout.hit(mouse.column, mouse.row);
                if matches!(mouse.kind, MouseEventKind::Down(_)) {
                    focus = if layout.is_input(mouse.row) {
                        FocusTarget::Input
                    } else if target == PointerTarget::Outside {
                        focus
                    } else {
                        FocusTarget::ToggleButton
                    };
                    input_focused.store(focus == FocusTarget::Input, Ordering::SeqCst);
                }
                input::translate_mouse(mouse, target)
            }
            _ => input::translate_event(&combobox, &event, focus),
        };

        if let Some(change) = translated.and_then(|event| combobox.handle_event(event)) {
            status = format!(
                "{:?}: {} selected",
                change.reason,
                change.selected_items.len()
            );
        }

        layout = render::draw(guard.stdout(), &combobox, focus, &status)?;
    }

    log::info!("Exiting");
    Ok(())
}
