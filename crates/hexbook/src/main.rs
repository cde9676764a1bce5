//! Hexbook CLI
//!
//! Saves, organizes and resolves hex pattern sequences on disk.

use hexbook::commands::{open_store, run, Options, ROOT_ENV};
use hexbook::CliError;

fn main() {
    hexbook::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return;
    }

    let (options, words) = match Options::parse(&args, std::env::var(ROOT_ENV).ok()) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    if words.is_empty() {
        print_usage();
        std::process::exit(1);
    }

    let mut store = match open_store(&options) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let result = run(&mut store, &options, &words, &mut stdout.lock());

    // Lines skipped while loading are warnings, not failures.
    for report in store.take_reports() {
        eprintln!("warning: {report}");
    }

    if let Err(err) = result {
        eprintln!("error: {err}");
        if matches!(err, CliError::Usage(_)) {
            eprintln!();
            eprintln!("Run `hexbook --help` for the list of commands.");
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Hexbook - a pattern book for hex casting");
    eprintln!();
    eprintln!("Usage: hexbook [options] <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  folders                       List folders (> marks the last used)");
    eprintln!("  list [folder]                 List sequences in display order (* = favorite)");
    eprintln!("  show <name>                   Print a sequence as text");
    eprintln!("  save <name> <file>            Save the patterns written in a text file");
    eprintln!("  record <file>                 Record a cast in the history");
    eprintln!("  rename <name> <new-name>      Rename a sequence");
    eprintln!("  mv <name> <folder> [index]    Move a sequence to another folder");
    eprintln!("  cp <name> <new-name>          Copy a sequence");
    eprintln!("  rm <name>                     Delete a sequence permanently");
    eprintln!("  trash <name>                  Move a sequence to the trash");
    eprintln!("  restore <name> [folder]       Move a sequence out of the trash");
    eprintln!("  empty-trash                   Delete non-favorite trash entries");
    eprintln!("  fav <name> / unfav <name>     Mark or unmark a favorite");
    eprintln!("  mkdir <folder>                Create a folder");
    eprintln!("  rename-folder <old> <new>     Rename a folder");
    eprintln!("  rm-folder <folder>            Trash a folder's sequences and remove it");
    eprintln!("  migrate                       Rewrite legacy raw pattern lines");
    eprintln!("  resolve <signature>,<DIR>     Show the text form of a raw pattern");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --root <dir>        Storage root (default: ${ROOT_ENV} or ./hexpatterns)");
    eprintln!("  --actions <file>    Host action table (JSON)");
    eprintln!("  --solved <file>     Solved per-world patterns (JSON)");
    eprintln!("  -f, --folder <name> Folder to work in (default: the last used)");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=hex_store=debug) for logs.");
}
