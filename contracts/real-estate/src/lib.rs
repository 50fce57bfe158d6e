#![no_std]
//! Real-estate titles as non-fungible tokens.
//!
//! Each token stands for one property. Minting records a per-title metadata
//! URI next to the sequential token id; ownership, transfers, approvals and
//! supply enumeration are the stock `stellar-tokens` enumerable
//! implementation.

use soroban_sdk::{contract, contractimpl, contracttype, log, Address, Env, String};
use stellar_macros::default_impl;
use stellar_tokens::non_fungible::{
    enumerable::{Enumerable, NonFungibleEnumerable},
    Base, NonFungibleToken,
};

pub const NAME: &str = "Real Estate";
pub const SYMBOL: &str = "REAL";
pub const BASE_URI: &str = "https://ipfs.io/ipfs/";

const DAY_IN_LEDGERS: u32 = 17280;
const TITLE_BUMP_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;
const TITLE_LIFETIME_THRESHOLD: u32 = TITLE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    TitleUri(u32),
}

#[contract]
pub struct RealEstate;

#[contractimpl]
impl RealEstate {
    pub fn __constructor(e: &Env) {
        Base::set_metadata(
            e,
            String::from_str(e, BASE_URI),
            String::from_str(e, NAME),
            String::from_str(e, SYMBOL),
        );
    }

    /// Mints the next title to `owner`, who must authorize the call.
    pub fn mint(e: &Env, owner: Address, uri: String) -> u32 {
        owner.require_auth();

        let token_id = Enumerable::sequential_mint(e, &owner);

        let key = DataKey::TitleUri(token_id);
        e.storage().persistent().set(&key, &uri);
        e.storage()
            .persistent()
            .extend_ttl(&key, TITLE_LIFETIME_THRESHOLD, TITLE_BUMP_AMOUNT);

        log!(e, "minted title", token_id, owner);
        token_id
    }

    /// Metadata URI recorded at mint time, if the title exists.
    pub fn title_uri(e: &Env, token_id: u32) -> Option<String> {
        e.storage().persistent().get(&DataKey::TitleUri(token_id))
    }
}

#[default_impl]
#[contractimpl]
impl NonFungibleToken for RealEstate {
    type ContractType = Enumerable;
}

#[default_impl]
#[contractimpl]
impl NonFungibleEnumerable for RealEstate {}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Env};

    const URI: &str = "https://ipfs.io/ipfs/QmTudSYeM7mz3PkYEWXWqPjomRPHogcMFSq7XAvsvsgAPS";

    fn setup(e: &Env) -> RealEstateClient<'_> {
        e.mock_all_auths();
        let contract_id = e.register(RealEstate, ());
        RealEstateClient::new(e, &contract_id)
    }

    #[test]
    fn test_metadata() {
        let e = Env::default();
        let client = setup(&e);

        assert_eq!(client.name(), String::from_str(&e, NAME));
        assert_eq!(client.symbol(), String::from_str(&e, SYMBOL));
        assert_eq!(client.total_supply(), 0);
    }

    #[test]
    fn test_mint_assigns_owner_and_uri() {
        let e = Env::default();
        let client = setup(&e);
        let seller = Address::generate(&e);

        let uri = String::from_str(&e, URI);
        let title = client.mint(&seller, &uri);

        assert_eq!(client.owner_of(&title), seller);
        assert_eq!(client.balance(&seller), 1);
        assert_eq!(client.title_uri(&title), Some(uri));
        assert_eq!(client.total_supply(), 1);
    }

    #[test]
    fn test_sequential_ids() {
        let e = Env::default();
        let client = setup(&e);
        let seller = Address::generate(&e);

        let first = client.mint(&seller, &String::from_str(&e, "ipfs://1.json"));
        let second = client.mint(&seller, &String::from_str(&e, "ipfs://2.json"));
        let third = client.mint(&seller, &String::from_str(&e, "ipfs://3.json"));

        assert_eq!(second, first + 1);
        assert_eq!(third, second + 1);
        assert_eq!(client.balance(&seller), 3);
        assert_eq!(client.total_supply(), 3);
        assert_eq!(client.get_token_id(&1), second);
        assert_eq!(client.get_owner_token_id(&seller, &2), third);
        assert_eq!(
            client.title_uri(&second),
            Some(String::from_str(&e, "ipfs://2.json"))
        );
    }

    #[test]
    fn test_unknown_title_has_no_uri() {
        let e = Env::default();
        let client = setup(&e);

        assert_eq!(client.title_uri(&42), None);
    }

    #[test]
    fn test_approved_operator_can_take_custody() {
        let e = Env::default();
        let client = setup(&e);
        let seller = Address::generate(&e);
        let operator = Address::generate(&e);

        let title = client.mint(&seller, &String::from_str(&e, URI));
        let live_until = e.ledger().sequence() + 1000;
        client.approve(&seller, &operator, &title, &live_until);
        assert_eq!(client.get_approved(&title), Some(operator.clone()));

        client.transfer_from(&operator, &seller, &operator, &title);

        assert_eq!(client.owner_of(&title), operator);
        assert_eq!(client.balance(&seller), 0);
        assert_eq!(client.balance(&operator), 1);
        assert_eq!(client.get_owner_token_id(&operator, &0), title);
        assert_eq!(client.total_supply(), 1);
    }

    #[test]
    fn test_unapproved_operator_cannot_take_custody() {
        let e = Env::default();
        let client = setup(&e);
        let seller = Address::generate(&e);
        let operator = Address::generate(&e);

        let title = client.mint(&seller, &String::from_str(&e, URI));

        assert!(client
            .try_transfer_from(&operator, &seller, &operator, &title)
            .is_err());
        assert_eq!(client.owner_of(&title), seller);
    }
}
