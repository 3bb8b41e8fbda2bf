#![no_std]

mod events;
mod ledger;
mod storage_types;

#[cfg(test)]
mod reentrant_token;

use soroban_sdk::{contract, contractimpl, log, Address, Env};

use ledger::{active_campaign, extend_instance, require_owner};
pub use storage_types::{Campaign, CampaignStatus, FundraiserError, Round};

#[contract]
pub struct FundraiserContract;

#[contractimpl]
impl FundraiserContract {
    /// Deploy the fundraiser with its owner and the token it raises.
    pub fn __constructor(env: Env, owner: Address, token: Address) {
        ledger::write_config(&env, &owner, &token);
        extend_instance(&env);
    }

    /// Configure a new campaign. Owner only.
    ///
    /// Rejected while the previous campaign still holds escrow, so pending
    /// refunds can never be wiped by a restart.
    pub fn start(
        env: Env,
        caller: Address,
        goal: i128,
        duration: u64,
        minimum_goal: i128,
    ) -> Result<(), FundraiserError> {
        require_owner(&env, &caller)?;

        let now = env.ledger().timestamp();
        if let Some(previous) = ledger::read_campaign(&env) {
            if !previous.is_settled(now) {
                return Err(FundraiserError::AlreadyActive);
            }
        }

        if goal <= 0 || minimum_goal <= 0 || minimum_goal > goal {
            return Err(FundraiserError::InvalidGoal);
        }
        if duration == 0 {
            return Err(FundraiserError::InvalidDuration);
        }
        let deadline = now
            .checked_add(duration)
            .ok_or(FundraiserError::ArithmeticError)?;

        let round = ledger::next_round(&env);
        let campaign = Campaign {
            round,
            status: CampaignStatus::Active,
            goal,
            minimum_goal,
            started_at: now,
            deadline,
            paused: false,
            total_raised: 0,
            withdrawn: 0,
            contributor_count: 0,
        };
        ledger::write_campaign(&env, &campaign);
        extend_instance(&env);

        log!(&env, "campaign started", round, goal, minimum_goal, deadline);
        events::emit_campaign_started(
            &env,
            events::CampaignStartedEvent {
                round,
                goal,
                minimum_goal,
                deadline,
            },
        );

        Ok(())
    }

    /// Move `amount` of the campaign token from `contributor` into escrow.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<(), FundraiserError> {
        contributor.require_auth();

        let mut campaign = active_campaign(&env)?;
        if campaign.paused {
            return Err(FundraiserError::Paused);
        }
        if campaign.has_ended(env.ledger().timestamp()) {
            return Err(FundraiserError::EventEnded);
        }
        if amount <= 0 {
            return Err(FundraiserError::ZeroAmount);
        }

        let previous = ledger::read_contribution(&env, campaign.round, &contributor);
        let updated = previous
            .checked_add(amount)
            .ok_or(FundraiserError::ArithmeticError)?;
        campaign.total_raised = campaign
            .total_raised
            .checked_add(amount)
            .ok_or(FundraiserError::ArithmeticError)?;
        if previous == 0 {
            campaign.add_contributor()?;
        }

        ledger::write_contribution(&env, campaign.round, &contributor, updated);
        ledger::write_campaign(&env, &campaign);
        extend_instance(&env);

        events::emit_contribution_received(
            &env,
            events::ContributionReceivedEvent {
                round: campaign.round,
                contributor: contributor.clone(),
                amount,
                total_raised: campaign.total_raised,
            },
        );

        ledger::collect(&env, &contributor, amount)
    }

    /// Pay the whole escrow to the owner once the campaign ended with its
    /// minimum goal reached. Owner only. Returns the amount paid.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, FundraiserError> {
        let owner = require_owner(&env, &caller)?;

        let mut campaign = active_campaign(&env)?;
        if !campaign.has_ended(env.ledger().timestamp()) {
            return Err(FundraiserError::EventOngoing);
        }
        if !campaign.minimum_reached() {
            return Err(FundraiserError::GoalNotMet);
        }

        let amount = campaign.escrow();
        campaign.withdrawn = campaign.total_raised;
        campaign.status = CampaignStatus::Succeeded;
        ledger::write_campaign(&env, &campaign);
        extend_instance(&env);

        log!(&env, "campaign succeeded", campaign.round, amount);
        events::emit_funds_withdrawn(
            &env,
            events::FundsWithdrawnEvent {
                round: campaign.round,
                owner: owner.clone(),
                amount,
            },
        );

        ledger::pay_out(&env, &owner, amount)?;
        Ok(amount)
    }

    /// Return `contributor`'s whole contribution after a campaign that ended
    /// short of its goal. Returns the amount paid.
    ///
    /// Between the minimum goal and the goal both this and `withdraw` are
    /// open; whichever settles first wins. A withdrawal closes refunds, and
    /// refunds shrink what the owner can still withdraw.
    pub fn refund(env: Env, contributor: Address) -> Result<i128, FundraiserError> {
        contributor.require_auth();

        let mut campaign = ledger::read_campaign(&env).ok_or(FundraiserError::NotActive)?;
        if campaign.status == CampaignStatus::Succeeded {
            return Err(FundraiserError::GoalMet);
        }
        if campaign.is_active() {
            if !campaign.has_ended(env.ledger().timestamp()) {
                return Err(FundraiserError::EventOngoing);
            }
            if campaign.goal_reached() {
                return Err(FundraiserError::GoalMet);
            }
        }

        let amount = ledger::read_contribution(&env, campaign.round, &contributor);
        if amount == 0 {
            return Err(FundraiserError::NothingToRefund);
        }

        ledger::write_contribution(&env, campaign.round, &contributor, 0);
        campaign.total_raised -= amount;
        campaign.contributor_count -= 1;
        if campaign.total_raised == 0 {
            campaign.status = CampaignStatus::Failed;
            log!(&env, "campaign fully refunded", campaign.round);
        }
        ledger::write_campaign(&env, &campaign);
        extend_instance(&env);

        events::emit_contribution_refunded(
            &env,
            events::ContributionRefundedEvent {
                round: campaign.round,
                contributor: contributor.clone(),
                amount,
            },
        );

        ledger::pay_out(&env, &contributor, amount)?;
        Ok(amount)
    }

    /// Block new contributions. Owner only.
    pub fn pause_event(env: Env, caller: Address) -> Result<(), FundraiserError> {
        Self::set_paused(&env, &caller, true)
    }

    /// Accept contributions again. Owner only.
    pub fn unpause_event(env: Env, caller: Address) -> Result<(), FundraiserError> {
        Self::set_paused(&env, &caller, false)
    }

    /// View functions
    pub fn get_balance(env: Env, contributor: Address) -> i128 {
        ledger::read_contribution(&env, ledger::read_round(&env), &contributor)
    }

    pub fn get_owner(env: Env) -> Address {
        ledger::read_owner(&env)
    }

    pub fn get_token(env: Env) -> Address {
        ledger::read_token(&env)
    }

    pub fn get_campaign(env: Env) -> Option<Campaign> {
        ledger::read_campaign(&env)
    }

    pub fn total_raised(env: Env) -> i128 {
        ledger::read_campaign(&env).map_or(0, |c| c.total_raised)
    }

    pub fn escrow_balance(env: Env) -> i128 {
        ledger::read_campaign(&env).map_or(0, |c| c.escrow())
    }

    pub fn is_paused(env: Env) -> bool {
        ledger::read_campaign(&env).is_some_and(|c| c.is_active() && c.paused)
    }

    /// Seconds until contributions close; zero once closed or with no campaign.
    pub fn time_left(env: Env) -> u64 {
        let now = env.ledger().timestamp();
        match ledger::read_campaign(&env) {
            Some(c) if c.is_active() => c.deadline.saturating_sub(now),
            _ => 0,
        }
    }
}

impl FundraiserContract {
    fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), FundraiserError> {
        require_owner(env, caller)?;

        let mut campaign = active_campaign(env)?;
        if campaign.has_ended(env.ledger().timestamp()) {
            return Err(FundraiserError::EventEnded);
        }
        campaign.paused = paused;
        ledger::write_campaign(env, &campaign);
        extend_instance(env);

        let event = events::CampaignPauseEvent {
            round: campaign.round,
            at: env.ledger().timestamp(),
        };
        if paused {
            events::emit_campaign_paused(env, event);
        } else {
            events::emit_campaign_unpaused(env, event);
        }

        Ok(())
    }
}
