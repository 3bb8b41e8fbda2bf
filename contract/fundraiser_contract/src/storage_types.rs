use soroban_sdk::{contracterror, contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Token,
    Round,
    Campaign,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Contribution(Round, Address),
}

// Incremented by every `start`; scopes contribution entries to one campaign
pub type Round = u32;

// Campaign lifecycle
#[derive(Clone, Copy, Debug, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Active,
    Succeeded, // Owner withdrew the escrow
    Failed,    // Goal missed and every contribution refunded
}

// Campaign details
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub round: Round,
    pub status: CampaignStatus,
    pub goal: i128,
    pub minimum_goal: i128,
    pub started_at: u64,
    pub deadline: u64,               // Exclusive bound for contributions
    pub paused: bool,
    pub total_raised: i128,          // Sum of the round's contribution entries
    pub withdrawn: i128,             // Paid out to the owner on success
    pub contributor_count: u32,
}

impl Campaign {
    pub fn is_active(&self) -> bool {
        self.status == CampaignStatus::Active
    }

    pub fn has_ended(&self, now: u64) -> bool {
        now >= self.deadline
    }

    /// Enough raised for the owner to withdraw.
    pub fn minimum_reached(&self) -> bool {
        self.total_raised >= self.minimum_goal
    }

    /// Target met; contributors can no longer reclaim funds.
    pub fn goal_reached(&self) -> bool {
        self.total_raised >= self.goal
    }

    pub fn add_contributor(&mut self) -> Result<(), FundraiserError> {
        self.contributor_count = self
            .contributor_count
            .checked_add(1)
            .ok_or(FundraiserError::ArithmeticError)?;
        Ok(())
    }

    /// Tokens the contract still holds for this campaign.
    pub fn escrow(&self) -> i128 {
        self.total_raised - self.withdrawn
    }

    /// Whether a new campaign may replace this one without stranding funds.
    pub fn is_settled(&self, now: u64) -> bool {
        !self.is_active() || (self.has_ended(now) && self.escrow() == 0)
    }
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundraiserError {
    Unauthorized = 1,
    AlreadyActive = 2,
    NotActive = 3,
    Paused = 4,
    EventEnded = 5,
    EventOngoing = 6,
    GoalNotMet = 7,
    GoalMet = 8,
    NothingToRefund = 9,
    ZeroAmount = 10,
    TransferFailed = 11,
    InvalidGoal = 12,
    InvalidDuration = 13,
    ArithmeticError = 14,
}

// Constants
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const TTL_INSTANCE: u32 = DAY_IN_LEDGERS * 30; // 30 days
pub const TTL_INSTANCE_THRESHOLD: u32 = TTL_INSTANCE - DAY_IN_LEDGERS;
pub const TTL_PERSISTENT: u32 = DAY_IN_LEDGERS * 90; // 90 days
pub const TTL_PERSISTENT_THRESHOLD: u32 = TTL_PERSISTENT - DAY_IN_LEDGERS;
