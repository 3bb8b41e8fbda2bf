//! Minimal token whose `transfer` calls back into the fundraiser when paying
//! out of it, mimicking a recipient that re-enters `refund` mid-transfer.
#![cfg(test)]

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, MuxedAddress};

use crate::FundraiserContractClient;

#[derive(Clone)]
#[contracttype]
enum TokenKey {
    Balance(Address),
    Fundraiser,
    NestedRefundSucceeded,
}

#[contract]
pub struct ReentrantToken;

#[contractimpl]
impl ReentrantToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .persistent()
            .set(&TokenKey::Balance(to), &(balance + amount));
    }

    pub fn set_fundraiser(env: Env, fundraiser: Address) {
        env.storage().instance().set(&TokenKey::Fundraiser, &fundraiser);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&TokenKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn nested_refund_succeeded(env: Env) -> bool {
        env.storage()
            .instance()
            .get(&TokenKey::NestedRefundSucceeded)
            .unwrap_or(false)
    }

    pub fn transfer(env: Env, from: Address, to: MuxedAddress, amount: i128) {
        from.require_auth();
        let to = to.address();

        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            panic!("insufficient balance");
        }
        env.storage()
            .persistent()
            .set(&TokenKey::Balance(from.clone()), &(from_balance - amount));
        let to_balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .persistent()
            .set(&TokenKey::Balance(to.clone()), &(to_balance + amount));

        let fundraiser: Option<Address> = env.storage().instance().get(&TokenKey::Fundraiser);
        if let Some(fundraiser) = fundraiser {
            if from == fundraiser {
                let nested = FundraiserContractClient::new(&env, &fundraiser).try_refund(&to);
                env.storage()
                    .instance()
                    .set(&TokenKey::NestedRefundSucceeded, &matches!(nested, Ok(Ok(_))));
            }
        }
    }
}
