use soroban_sdk::{contractclient, Address, Env};

/// The slice of the title registry the escrow calls into.
#[allow(dead_code)]
#[contractclient(name = "TitleRegistryClient")]
pub trait TitleRegistry {
    fn owner_of(e: Env, token_id: u32) -> Address;
    fn transfer(e: Env, from: Address, to: Address, token_id: u32);
    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, token_id: u32);
}
