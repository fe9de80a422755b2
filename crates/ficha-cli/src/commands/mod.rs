pub mod edit;
pub mod monster;
pub mod play;
pub mod reset;
pub mod roll;
pub mod show;

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::debug;

use ficha_session::{AdventureSession, SessionConfig};
use ficha_store::{FileStore, RecordStore};

/// The session type every command operates on.
pub type Session = AdventureSession<FileStore>;

/// Open the sheet stored under `data_dir`. Missing or damaged files start a
/// fresh sheet.
pub fn open_session(data_dir: &Path, seed: Option<u64>) -> Session {
    debug!(dir = %data_dir.display(), "opening adventure sheet");
    let store = RecordStore::new(FileStore::new(data_dir));
    let config = match seed {
        Some(seed) => SessionConfig::default().with_seed(seed),
        None => SessionConfig::default(),
    };
    AdventureSession::open(store, config)
}

/// Ask a yes/no question on stdout and read the answer from `reader`.
/// Anything but an explicit yes (including end of input) counts as no.
fn ask<R: BufRead>(reader: &mut R, prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match reader.read_line(&mut answer) {
        Ok(0) | Err(_) => {
            println!();
            false
        }
        Ok(_) => matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes" | "s" | "sim"
        ),
    }
}
