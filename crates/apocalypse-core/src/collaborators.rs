//! External collaborator contracts.
//!
//! The simulation core never blocks on these: session flow calls them
//! at the session boundary and tolerates any failure. The concrete
//! blockchain/backend transports live entirely outside this workspace;
//! the in-memory implementations here are the local fallbacks the
//! original shipped for environments without the wallet extension.

use serde::{Deserialize, Serialize};

/// One persisted high score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub player: String,
    pub score: u64,
    pub level: u32,
}

/// High-score submission interface. Persisted locally and optionally
/// mirrored to a remote ledger by the host.
pub trait HighScoreBackend {
    /// Submit a score. Returns false on any backend failure; callers
    /// must treat failure as non-fatal.
    fn submit(&mut self, player: &str, score: u64, level: u32) -> bool;

    /// Current leaderboard, best first.
    fn high_scores(&self) -> Vec<HighScoreEntry>;
}

/// Wallet-connection interface consumed by the session flow.
pub trait WalletConnection {
    fn is_connected(&self) -> bool;

    /// Initiate a payment. Returns false on failure or rejection.
    fn initiate_payment(&mut self, amount: u64) -> bool;
}

/// In-memory score store, kept sorted best-first.
#[derive(Debug, Clone, Default)]
pub struct LocalScoreStore {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreBackend for LocalScoreStore {
    fn submit(&mut self, player: &str, score: u64, level: u32) -> bool {
        self.entries.push(HighScoreEntry {
            player: player.to_string(),
            score,
            level,
        });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        true
    }

    fn high_scores(&self) -> Vec<HighScoreEntry> {
        self.entries.clone()
    }
}

/// Mock wallet that always connects and accepts payments.
#[derive(Debug, Clone, Default)]
pub struct MockWallet {
    connected: bool,
    pub payments: Vec<u64>,
}

impl MockWallet {
    pub fn connected() -> Self {
        Self {
            connected: true,
            payments: Vec::new(),
        }
    }
}

impl WalletConnection for MockWallet {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn initiate_payment(&mut self, amount: u64) -> bool {
        if !self.connected {
            return false;
        }
        self.payments.push(amount);
        true
    }
}
