use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env,
};

use token_contracts::{SaleToken, SaleTokenClient, REFERRAL_SUPPLY, SALES_SUPPLY};

const START: u64 = 1_700_000_000;
const WEEK: u64 = 7 * 24 * 60 * 60;

struct Sale {
    env: Env,
    client: SaleTokenClient<'static>,
    sale: Address,
    releases: [u64; 4],
}

fn start_sale() -> Sale {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|l| l.timestamp = START);

    let contract_id = env.register(SaleToken, ());
    let client = SaleTokenClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let sale = Address::generate(&env);
    let releases = [START + 3 * WEEK, START + 6 * WEEK, START + 9 * WEEK, START + 12 * WEEK];
    client.init(
        &owner,
        &sale,
        &(START + 52 * WEEK),
        &releases[0],
        &releases[1],
        &releases[2],
        &releases[3],
    );

    Sale { env, client, sale, releases }
}

#[test]
fn buyers_unlock_together_at_each_checkpoint() {
    let s = start_sale();
    let buyers = [
        (Address::generate(&s.env), 100i128),
        (Address::generate(&s.env), 4_000i128),
        (Address::generate(&s.env), 9i128),
    ];
    for (buyer, amount) in buyers.iter() {
        s.client.transfer_with_vesting(&s.sale, buyer, amount);
    }

    for (quarter, release) in s.releases.iter().enumerate() {
        s.env.ledger().with_mut(|l| l.timestamp = *release);
        let released = quarter as i128 + 1;
        for (buyer, amount) in buyers.iter() {
            let expected_spot = if released == 4 { *amount } else { amount * released / 4 };
            assert_eq!(s.client.balance_spot(buyer), expected_spot);
            assert_eq!(s.client.balance_vested(buyer), amount - expected_spot);
        }
    }

    for (buyer, _) in buyers.iter() {
        assert!(!s.client.has_vested(buyer));
    }
}

#[test]
fn buyer_can_resell_released_quarters_only() {
    let s = start_sale();
    let buyer = Address::generate(&s.env);
    let market = Address::generate(&s.env);
    s.client.transfer_with_vesting(&s.sale, &buyer, &1_000);

    s.env.ledger().with_mut(|l| l.timestamp = s.releases[0]);
    s.client.transfer(&buyer, &market, &250);
    assert!(s.client.try_transfer(&buyer, &market, &1).is_err());

    s.env.ledger().with_mut(|l| l.timestamp = s.releases[2]);
    assert_eq!(s.client.balance_spot(&buyer), 500);
    s.client.transfer(&buyer, &market, &500);

    s.env.ledger().with_mut(|l| l.timestamp = s.releases[3]);
    assert_eq!(s.client.balance_spot(&buyer), 250);
    assert_eq!(s.client.balance(&market), 750);
}

#[test]
fn unsold_tokens_are_burned_after_the_sale() {
    let s = start_sale();
    let buyer = Address::generate(&s.env);
    let referrer = Address::generate(&s.env);

    s.client.transfer_with_vesting(&s.sale, &buyer, &10_000);
    s.client.transfer_with_lockup(&s.sale, &referrer, &500, &0);

    let burned = s.client.burn_sale_tokens(&s.sale);
    assert_eq!(burned, SALES_SUPPLY + REFERRAL_SUPPLY - 10_500);
    assert_eq!(s.client.balance(&s.sale), 0);
    assert_eq!(s.client.burn_sale_tokens(&s.sale), 0);

    assert_eq!(s.client.balance(&buyer), 10_000);
    assert_eq!(s.client.balance_spot(&referrer), 500);
}
