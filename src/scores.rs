use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use color_eyre::Result;

/// Ranked entries kept by the board.
pub const BOARD_SIZE: usize = 10;
/// Names are stored as a short token, truncated to this many bytes.
pub const NAME_LIMIT: usize = 9;
/// Where the board is persisted between runs.
pub const SAVE_PATH: &str = "save_data.txt";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

/// Persisted top-ten table, kept sorted descending by score. Empty slots
/// carry score zero and compare like any other entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    entries: Vec<ScoreEntry>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self {
            entries: vec![ScoreEntry::default(); BOARD_SIZE],
        }
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// True iff the candidate score would displace at least one entry.
    pub fn admits(&self, candidate: u32) -> bool {
        self.entries.iter().any(|entry| candidate > entry.score)
    }

    /// Inserts at the first rank whose score the candidate beats, shifting
    /// lower entries down and evicting the last. A candidate that beats
    /// nothing is dropped.
    pub fn insert(&mut self, name: &str, score: u32) {
        let Some(rank) = self.entries.iter().position(|entry| score > entry.score) else {
            return;
        };
        let name = truncate_name(name);
        self.entries.pop();
        self.entries.insert(rank, ScoreEntry { name, score });
    }

    /// Parses up to [`BOARD_SIZE`] whitespace-separated `name score` pairs.
    /// Fewer pairs leave the trailing entries zeroed; any malformed pair
    /// yields the default board.
    pub fn from_reader(reader: impl Read) -> Self {
        let mut contents = String::new();
        let mut reader = BufReader::new(reader);
        if reader.read_to_string(&mut contents).is_err() {
            return Self::new();
        }

        let mut board = Self::new();
        let mut tokens = contents.split_whitespace();
        for slot in 0..BOARD_SIZE {
            let Some(name) = tokens.next() else { break };
            let Some(score) = tokens.next().and_then(|raw| raw.parse().ok()) else {
                return Self::new();
            };
            board.entries[slot] = ScoreEntry {
                name: truncate_name(name),
                score,
            };
        }
        board
    }

    /// Writes the occupied entries as `name score` lines in board order.
    /// Empty slots are omitted; [`Self::from_reader`] restores them as zeros.
    pub fn to_writer(&self, writer: impl Write) -> io::Result<()> {
        let mut writer = BufWriter::new(writer);
        for entry in self.entries.iter().filter(|entry| !entry.name.is_empty()) {
            writeln!(writer, "{} {}", entry.name, entry.score)?;
        }
        writer.flush()
    }

    /// Loads the board from disk. A missing or unreadable store is not an
    /// error; it yields the zero-filled board.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match File::open(path) {
            Ok(file) => Self::from_reader(file),
            Err(_) => Self::new(),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        self.to_writer(file)?;
        Ok(())
    }
}

fn truncate_name(name: &str) -> String {
    name.chars().take(NAME_LIMIT).collect()
}
