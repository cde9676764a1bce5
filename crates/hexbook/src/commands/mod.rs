//! Command handlers for the hexbook CLI.
//!
//! Handlers write their normal output to `out` and return errors to the
//! caller; only `main` decides how to exit.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use hex_registry::{NoSolvedPatterns, PatternRegistry, SolvedPatternOracle};
use hex_store::{PatternStore, StoreSettings};

use crate::host::{load_solved, JsonActionTable};
use crate::CliError;

mod folders;
mod sequences;

pub use folders::{create_folder, delete_folder, list_folders, rename_folder};
pub use sequences::{
    copy_sequence, delete_sequence, empty_trash, list_sequences, move_sequence, read_patterns,
    record_cast, rename_sequence, resolve_pattern, restore_sequence, run_migration, save_sequence,
    set_favorite, show_sequence, trash_sequence,
};

/// Environment variable naming the storage root.
pub const ROOT_ENV: &str = "HEXBOOK_ROOT";

/// Flags shared by every command.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Options {
    /// Storage root: `--root`, else `HEXBOOK_ROOT`, else `./hexpatterns`.
    pub root: PathBuf,
    /// Action table export (`--actions`).
    pub actions: Option<PathBuf>,
    /// Solved per-world patterns (`--solved`).
    pub solved: Option<PathBuf>,
    /// Folder the command works in (`--folder`); the last used folder if absent.
    pub folder: Option<String>,
}

impl Options {
    /// Split global flags from the command words.
    ///
    /// Flags take their value either inline (`--root=dir`) or as the next
    /// argument, and may appear anywhere on the line.
    pub fn parse(
        args: &[String],
        env_root: Option<String>,
    ) -> Result<(Options, Vec<String>), CliError> {
        let mut root = None;
        let mut actions = None;
        let mut solved = None;
        let mut folder = None;
        let mut words = Vec::new();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
                _ => (arg.as_str(), None),
            };
            let slot = match flag {
                "--root" => &mut root,
                "--actions" => &mut actions,
                "--solved" => &mut solved,
                "--folder" | "-f" => &mut folder,
                _ => {
                    words.push(arg.clone());
                    continue;
                }
            };
            let value = match inline {
                Some(value) => value,
                None => iter
                    .next()
                    .cloned()
                    .ok_or_else(|| CliError::usage(format!("{flag} needs a value")))?,
            };
            *slot = Some(value);
        }

        let root = root
            .or(env_root.filter(|root| !root.is_empty()))
            .map_or_else(|| StoreSettings::default().root, PathBuf::from);
        let options = Options {
            root,
            actions: actions.map(PathBuf::from),
            solved: solved.map(PathBuf::from),
            folder,
        };
        Ok((options, words))
    }
}

/// Build the registry from the host exports and open the store.
pub fn open_store(options: &Options) -> Result<PatternStore, CliError> {
    let oracle: Arc<dyn SolvedPatternOracle> = match &options.solved {
        Some(path) => Arc::new(load_solved(path)?),
        None => Arc::new(NoSolvedPatterns),
    };
    let table = match &options.actions {
        Some(path) => JsonActionTable::load(path)?,
        None => {
            tracing::debug!("no action table given, only numbers and gambits will resolve");
            JsonActionTable::default()
        }
    };

    let registry = PatternRegistry::new(oracle);
    registry.initialize(&table);
    let store = PatternStore::open(StoreSettings::new(&options.root), Arc::new(registry))?;
    Ok(store)
}

/// Dispatch one command line (without global flags).
#[tracing::instrument(level = "debug", skip_all, fields(command = words.first().map(String::as_str)))]
pub fn run(
    store: &mut PatternStore,
    options: &Options,
    words: &[String],
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let Some((command, args)) = words.split_first() else {
        return Err(CliError::usage("missing command"));
    };
    let folder = options
        .folder
        .clone()
        .unwrap_or_else(|| store.last_folder().to_string());

    match command.as_str() {
        "folders" => list_folders(store, out),
        "list" => {
            let folder = args.first().map_or(folder.as_str(), String::as_str);
            list_sequences(store, folder, out)
        }
        "show" => {
            let [name] = take_args::<1>(args, "usage: hexbook show <name>")?;
            show_sequence(store, &folder, name, out)
        }
        "save" => {
            let [name, file] = take_args::<2>(args, "usage: hexbook save <name> <file>")?;
            save_sequence(store, &folder, name, Path::new(file), out)
        }
        "record" => {
            let [file] = take_args::<1>(args, "usage: hexbook record <file>")?;
            record_cast(store, Path::new(file), out)
        }
        "rename" => {
            let [name, new_name] = take_args::<2>(args, "usage: hexbook rename <name> <new-name>")?;
            rename_sequence(store, &folder, name, new_name, out)
        }
        "mv" => {
            let usage = "usage: hexbook mv <name> <target-folder> [index]";
            let [name, target] = take_args::<2>(args, usage)?;
            let index = args
                .get(2)
                .map(|index| index.parse::<usize>().map_err(|_| CliError::usage(usage)))
                .transpose()?;
            move_sequence(store, &folder, name, target, index, out)
        }
        "cp" => {
            let [name, dest] = take_args::<2>(args, "usage: hexbook cp <name> <new-name>")?;
            copy_sequence(store, &folder, name, dest, out)
        }
        "rm" => {
            let [name] = take_args::<1>(args, "usage: hexbook rm <name>")?;
            delete_sequence(store, &folder, name, out)
        }
        "trash" => {
            let [name] = take_args::<1>(args, "usage: hexbook trash <name>")?;
            trash_sequence(store, &folder, name, out)
        }
        "restore" => {
            let [name] = take_args::<1>(args, "usage: hexbook restore <name> [target-folder]")?;
            let target = args.get(1).map_or(folder.as_str(), String::as_str);
            restore_sequence(store, name, target, out)
        }
        "empty-trash" => empty_trash(store, out),
        "fav" | "unfav" => {
            let [name] = take_args::<1>(args, "usage: hexbook fav|unfav <name>")?;
            set_favorite(store, &folder, name, command == "fav", out)
        }
        "mkdir" => {
            let [new_folder] = take_args::<1>(args, "usage: hexbook mkdir <folder>")?;
            create_folder(store, new_folder, out)
        }
        "rename-folder" => {
            let [old, new] = take_args::<2>(args, "usage: hexbook rename-folder <old> <new>")?;
            rename_folder(store, old, new, out)
        }
        "rm-folder" => {
            let [target] = take_args::<1>(args, "usage: hexbook rm-folder <folder>")?;
            delete_folder(store, target, out)
        }
        "migrate" => run_migration(store, out),
        "resolve" => {
            let [text] = take_args::<1>(args, "usage: hexbook resolve <signature>,<DIRECTION>")?;
            resolve_pattern(store, text, out)
        }
        other => Err(CliError::usage(format!("unknown command `{other}`"))),
    }
}

/// The first `N` arguments, or the usage hint if there are fewer.
fn take_args<'a, const N: usize>(
    args: &'a [String],
    usage: &str,
) -> Result<&'a [String; N], CliError> {
    args.get(..N)
        .and_then(|head| head.try_into().ok())
        .ok_or_else(|| CliError::usage(usage))
}
