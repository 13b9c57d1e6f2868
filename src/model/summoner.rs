use super::ids::SummonerId;

/// Name the summoner endpoint reports for handles it could not resolve.
pub const PLACEHOLDER_NAME: &str = "Undefined";

pub const SOLO_DUO_QUEUE: &str = "RANKED_SOLO_5x5";

#[derive(Debug, Clone, PartialEq)]
pub struct Summoner {
    pub id: SummonerId,
    pub name: String,
    pub level: u32,
}

impl Summoner {
    pub fn is_placeholder(&self) -> bool {
        self.name == PLACEHOLDER_NAME
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedQueueStats {
    pub queue_type: String,
    pub tier: String,
    pub division: String,
    pub league_points: u32,
    pub wins: u32,
    pub losses: u32,
}

impl RankedQueueStats {
    pub fn queue_label(&self) -> &'static str {
        if self.queue_type == SOLO_DUO_QUEUE {
            "SOLO/DUO"
        } else {
            "FLEX"
        }
    }

    pub fn total_games(&self) -> u64 {
        self.wins as u64 + self.losses as u64
    }

    /// Wins per loss, `None` while the queue has no losses.
    pub fn win_loss_ratio(&self) -> Option<f64> {
        if self.losses == 0 {
            return None;
        }
        Some(self.wins as f64 / self.losses as f64)
    }

    /// Win rate in percent, `None` without any games played.
    pub fn win_rate(&self) -> Option<f64> {
        let total = self.total_games();
        if total == 0 {
            return None;
        }
        Some(self.wins as f64 / total as f64 * 100.0)
    }
}
