use soroban_sdk::{symbol_short, Address, Env};

pub fn publish_initialized(env: &Env, sale: Address, team: Address, team_release: u64) {
    env.events()
        .publish((symbol_short!("init"), sale), (team, team_release));
}

pub fn publish_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("transfer"), from, to), amount);
}

pub fn publish_approve(env: &Env, from: Address, spender: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("approve"), from, spender), amount);
}

pub fn publish_burn(env: &Env, from: Address, amount: i128) {
    env.events().publish((symbol_short!("burn"), from), amount);
}

pub fn publish_vested(env: &Env, to: Address, amount: i128, granted: i128) {
    env.events()
        .publish((symbol_short!("vest"), to), (amount, granted));
}

pub fn publish_locked(env: &Env, to: Address, amount: i128, release_time: u64) {
    env.events()
        .publish((symbol_short!("lockup"), to), (amount, release_time));
}

pub fn publish_sale_burn(env: &Env, sale: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("burn_sale"), sale), amount);
}
