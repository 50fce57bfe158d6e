use soroban_sdk::{panic_with_error, Env};

use crate::errors::Error;
use crate::types::{Approvals, Config, DataKey, Listing};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const SALE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const SALE_LIFETIME_THRESHOLD: u32 = SALE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn write_config(e: &Env, config: &Config) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn read_config(e: &Env) -> Config {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(e, Error::NotInitialized))
}

pub fn read_listing(e: &Env, title: u32) -> Option<Listing> {
    e.storage().persistent().get(&DataKey::Listing(title))
}

pub fn write_listing(e: &Env, title: u32, listing: &Listing) {
    let key = DataKey::Listing(title);
    e.storage().persistent().set(&key, listing);
    e.storage()
        .persistent()
        .extend_ttl(&key, SALE_LIFETIME_THRESHOLD, SALE_BUMP_AMOUNT);
}

pub fn read_inspection(e: &Env, title: u32) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::Inspection(title))
        .unwrap_or(false)
}

pub fn write_inspection(e: &Env, title: u32, passed: bool) {
    let key = DataKey::Inspection(title);
    e.storage().persistent().set(&key, &passed);
    e.storage()
        .persistent()
        .extend_ttl(&key, SALE_LIFETIME_THRESHOLD, SALE_BUMP_AMOUNT);
}

pub fn read_approvals(e: &Env, title: u32) -> Approvals {
    e.storage()
        .persistent()
        .get(&DataKey::Approvals(title))
        .unwrap_or_default()
}

pub fn write_approvals(e: &Env, title: u32, approvals: &Approvals) {
    let key = DataKey::Approvals(title);
    e.storage().persistent().set(&key, approvals);
    e.storage()
        .persistent()
        .extend_ttl(&key, SALE_LIFETIME_THRESHOLD, SALE_BUMP_AMOUNT);
}

/// Drops the inspection record and approval set so the next cycle starts clean.
pub fn clear_sale_state(e: &Env, title: u32) {
    e.storage().persistent().remove(&DataKey::Inspection(title));
    e.storage().persistent().remove(&DataKey::Approvals(title));
}
