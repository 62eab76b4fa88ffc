use crate as pallet_vesting_wallet;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64, UnixTime},
    PalletId,
};
use sp_core::H256;
use sp_runtime::{
    traits::{AccountIdConversion, BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

pub const OWNER: u64 = 1;
pub const BENEFICIARY: u64 = 3;
pub const STRANGER: u64 = 9;

/// Whitelist group shared by the vault and the beneficiary.
pub const VESTING_GROUP: u8 = 1;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        RestrictedToken: pallet_restricted_token,
        VestingWallet: pallet_vesting_wallet,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_restricted_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

parameter_types! {
    pub const VestingPalletId: PalletId = PalletId(*b"py/vestw");
    pub storage Now: u64 = 0;
}

/// Clock driven by [`Now`], in unix seconds.
pub struct MockTime;
impl UnixTime for MockTime {
    fn now() -> core::time::Duration {
        core::time::Duration::from_secs(Now::get())
    }
}

impl pallet_vesting_wallet::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Token = RestrictedToken;
    type UnixTime = MockTime;
    type PalletId = VestingPalletId;
    type ReleaseOrigin = frame_system::EnsureSigned<u64>;
    type WeightInfo = ();
}

pub fn vault() -> u64 {
    VestingPalletId::get().into_account_truncating()
}

pub fn set_now(secs: u64) {
    Now::set(&secs);
}

/// Builds externalities with a schedule, a funded vault and the vault whitelisted towards the
/// beneficiary.
pub struct ExtBuilder {
    schedule: Option<(u64, u128, u64, u64, u64)>,
    funding: u128,
    whitelist_vault: bool,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        Self {
            schedule: Some((BENEFICIARY, 300, 0, 100, 400)),
            funding: 300,
            whitelist_vault: true,
        }
    }
}

impl ExtBuilder {
    pub fn schedule(mut self, total: u128, begin: u64, cliff: u64, end: u64) -> Self {
        self.schedule = Some((BENEFICIARY, total, begin, cliff, end));
        self
    }

    pub fn no_schedule(mut self) -> Self {
        self.schedule = None;
        self
    }

    pub fn funding(mut self, amount: u128) -> Self {
        self.funding = amount;
        self
    }

    pub fn without_whitelist(mut self) -> Self {
        self.whitelist_vault = false;
        self
    }

    pub fn build(self) -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

        let (whitelisted_accounts, outbound_permissions) = if self.whitelist_vault {
            (
                vec![(vault(), VESTING_GROUP), (BENEFICIARY, VESTING_GROUP)],
                vec![(VESTING_GROUP, VESTING_GROUP)],
            )
        } else {
            (vec![], vec![])
        };

        pallet_restricted_token::GenesisConfig::<Test> {
            owner: Some(OWNER),
            token_name: b"Test Token".to_vec(),
            token_symbol: b"TST".to_vec(),
            decimals: 18,
            initial_supply: 1_000_000,
            administrators: vec![],
            whitelisted_accounts,
            outbound_permissions,
        }
        .assimilate_storage(&mut t)
        .unwrap();

        pallet_vesting_wallet::GenesisConfig::<Test> { schedule: self.schedule }
            .assimilate_storage(&mut t)
            .unwrap();

        let funding = self.funding;
        let mut ext = sp_io::TestExternalities::new(t);
        ext.execute_with(|| {
            System::set_block_number(1);
            set_now(0);
            if funding > 0 {
                // The owner is exempt from whitelist gating as a sender.
                RestrictedToken::transfer(RuntimeOrigin::signed(OWNER), vault(), funding).unwrap();
            }
        });
        ext
    }
}

pub fn new_test_ext() -> sp_io::TestExternalities {
    ExtBuilder::default().build()
}
