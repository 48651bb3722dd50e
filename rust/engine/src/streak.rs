use serde::{Deserialize, Serialize};

/// Consecutive-win counter with a high-water mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub current: u32,
    pub best: u32,
}

impl Streak {
    /// Win extends the run and lifts the best; loss clears the run.
    pub fn record(&mut self, won: bool) -> Streak {
        if won {
            self.current += 1;
            self.best = self.best.max(self.current);
        } else {
            self.current = 0;
        }
        *self
    }

    pub fn snapshot(&self) -> Streak {
        *self
    }

    pub fn reset(&mut self) {
        *self = Streak::default();
    }
}
