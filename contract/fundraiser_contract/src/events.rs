use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::Round;

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignStartedEvent {
    pub round: Round,
    pub goal: i128,
    pub minimum_goal: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ContributionReceivedEvent {
    pub round: Round,
    pub contributor: Address,
    pub amount: i128,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FundsWithdrawnEvent {
    pub round: Round,
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ContributionRefundedEvent {
    pub round: Round,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignPauseEvent {
    pub round: Round,
    pub at: u64,
}

pub fn emit_campaign_started(env: &Env, event: CampaignStartedEvent) {
    env.events().publish((Symbol::new(env, "campaign_started"),), event);
}

pub fn emit_contribution_received(env: &Env, event: ContributionReceivedEvent) {
    env.events().publish((Symbol::new(env, "contribution_received"),), event);
}

pub fn emit_funds_withdrawn(env: &Env, event: FundsWithdrawnEvent) {
    env.events().publish((Symbol::new(env, "funds_withdrawn"),), event);
}

pub fn emit_contribution_refunded(env: &Env, event: ContributionRefundedEvent) {
    env.events().publish((Symbol::new(env, "contribution_refunded"),), event);
}

pub fn emit_campaign_paused(env: &Env, event: CampaignPauseEvent) {
    env.events().publish((Symbol::new(env, "campaign_paused"),), event);
}

pub fn emit_campaign_unpaused(env: &Env, event: CampaignPauseEvent) {
    env.events().publish((Symbol::new(env, "campaign_unpaused"),), event);
}
