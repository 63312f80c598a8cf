use std::collections::{BTreeMap, HashMap, HashSet};

use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::engine::ledger::claimed_record;
use crate::engine::*;
use crate::error::CarbonRewardsError;
use crate::state::*;

/// Scripted farm ownership and sequestration reports
#[derive(Default)]
pub struct FakeMetrics {
    owners: HashMap<u64, Pubkey>,
    sequestered: HashMap<(u64, u64), u64>,
}

impl FakeMetrics {
    pub fn register(&mut self, farm_id: u64, owner: Pubkey) {
        self.owners.insert(farm_id, owner);
    }

    pub fn report(&mut self, farm_id: u64, period: u64, amount: u64) {
        self.sequestered.insert((farm_id, period), amount);
    }
}

impl MetricsSource for FakeMetrics {
    fn farm_owner(&self, farm_id: u64) -> Result<Option<Pubkey>> {
        Ok(self.owners.get(&farm_id).copied())
    }

    fn sequestered_amount(&self, farm_id: u64, period: u64) -> Result<u64> {
        Ok(self.sequestered.get(&(farm_id, period)).copied().unwrap_or(0))
    }
}

/// Scripted oracle verdicts; anything not verified reads as unverified
#[derive(Default)]
pub struct FakeVerifier {
    verified: HashSet<(u64, u64)>,
}

impl FakeVerifier {
    pub fn verify(&mut self, farm_id: u64, period: u64) {
        self.verified.insert((farm_id, period));
    }
}

impl DataVerifier for FakeVerifier {
    fn is_data_verified(&self, farm_id: u64, period: u64) -> Result<bool> {
        Ok(self.verified.contains(&(farm_id, period)))
    }
}

pub struct FakeGovernance {
    pub dao: Pubkey,
}

impl GovernanceOracle for FakeGovernance {
    fn dao_address(&self) -> Result<Pubkey> {
        Ok(self.dao)
    }
}

/// Governance that cannot be reached; any lookup fails
pub struct UnreachableGovernance;

impl GovernanceOracle for UnreachableGovernance {
    fn dao_address(&self) -> Result<Pubkey> {
        Err(ProgramError::InvalidAccountData.into())
    }
}

/// Records every mint; optionally rejects them
#[derive(Default)]
pub struct RecordingMinter {
    pub minted: Vec<(Pubkey, u64)>,
    pub reject: bool,
}

impl TokenMinter for RecordingMinter {
    fn mint(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        if self.reject {
            return Err(ProgramError::InsufficientFunds.into());
        }
        self.minted.push((*recipient, amount));
        Ok(())
    }
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct MemoryLedger {
    pub records: BTreeMap<(u64, u64), ClaimRecord>,
    pub cursors: BTreeMap<u64, LastClaimCursor>,
}

impl ClaimLedger for MemoryLedger {
    fn claim_record(&self, farm_id: u64, period: u64) -> Result<Option<ClaimRecord>> {
        Ok(self.records.get(&(farm_id, period)).cloned())
    }

    fn last_claim(&self, farm_id: u64) -> Result<Option<LastClaimCursor>> {
        Ok(self.cursors.get(&farm_id).cloned())
    }

    fn record_claim(
        &mut self,
        farm_id: u64,
        period: u64,
        sequestered_amount: u64,
        reward_amount: u64,
        block_height: u64,
    ) -> Result<()> {
        if let Some(existing) = self.records.get(&(farm_id, period)) {
            require!(!existing.claimed, CarbonRewardsError::RewardAlreadyClaimed);
        }
        self.records.insert(
            (farm_id, period),
            claimed_record(farm_id, period, sequestered_amount, reward_amount, block_height),
        );
        self.cursors.insert(
            farm_id,
            LastClaimCursor {
                bump: 0,
                farm_id,
                last_period: period,
                last_block: block_height,
            },
        );
        Ok(())
    }
}

/// Program state plus scripted collaborators, driven through the claim engine
pub struct Harness {
    pub owner: Pubkey,
    pub config: ProgramConfig,
    pub ledger: MemoryLedger,
    pub metrics: FakeMetrics,
    pub verifier: FakeVerifier,
    pub minter: RecordingMinter,
}

impl Harness {
    pub fn new() -> Self {
        let owner = Pubkey::new_unique();
        Self {
            owner,
            config: ProgramConfig::new(owner, CollaboratorAddresses::default()),
            ledger: MemoryLedger::default(),
            metrics: FakeMetrics::default(),
            verifier: FakeVerifier::default(),
            minter: RecordingMinter::default(),
        }
    }

    /// Registers a new farmer as owner of `farm_id`
    pub fn farmer(&mut self, farm_id: u64) -> Pubkey {
        let farmer = Pubkey::new_unique();
        self.metrics.register(farm_id, farmer);
        farmer
    }

    /// Reports and verifies a period's measurement
    pub fn verified_period(&mut self, farm_id: u64, period: u64, sequestered: u64) {
        self.metrics.report(farm_id, period, sequestered);
        self.verifier.verify(farm_id, period);
    }

    pub fn claim(
        &mut self,
        caller: &Pubkey,
        farm_id: u64,
        period: u64,
        block: u64,
    ) -> Result<ClaimReceipt> {
        ClaimEngine::new(
            &mut self.config,
            &mut self.ledger,
            &self.metrics,
            &self.verifier,
            &mut self.minter,
        )
        .claim_reward(caller, farm_id, period, block)
    }

    /// Runs a batch and returns its result with the claims it committed
    pub fn batch(
        &mut self,
        caller: &Pubkey,
        farm_id: u64,
        periods: &[u64],
        block: u64,
    ) -> (Result<u64>, Vec<ClaimReceipt>) {
        let mut engine = ClaimEngine::new(
            &mut self.config,
            &mut self.ledger,
            &self.metrics,
            &self.verifier,
            &mut self.minter,
        );
        let result = engine.batch_claim_rewards(caller, farm_id, periods, block);
        (result, engine.committed().to_vec())
    }
}

/// Owned storage behind a host-built AccountInfo
pub struct AccountFixture {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
    pub writable: bool,
}

impl AccountFixture {
    /// Never-initialized account, as the system program leaves it
    pub fn empty(key: Pubkey) -> Self {
        Self {
            key,
            owner: anchor_lang::system_program::ID,
            lamports: 0,
            data: Vec::new(),
            writable: true,
        }
    }

    /// Account at `key` owned by `owner`, holding `value` with its discriminator
    pub fn holding<T: AccountSerialize>(key: Pubkey, owner: Pubkey, value: &T) -> Self {
        let mut data = Vec::new();
        value.try_serialize(&mut data).unwrap();
        Self {
            key,
            owner,
            lamports: 1_000_000,
            data,
            writable: true,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            false,
            self.writable,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            false,
            0,
        )
    }
}

pub fn pda(seeds: &[&[u8]], program: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(seeds, program).0
}

pub fn error_code(err: &Error) -> Option<u32> {
    match err {
        Error::AnchorError(anchor_error) => Some(anchor_error.error_code_number),
        Error::ProgramError(_) => None,
    }
}

/// Asserts that `result` failed with `expected`
pub fn assert_rejected<T: std::fmt::Debug>(result: Result<T>, expected: CarbonRewardsError) {
    match result {
        Ok(value) => panic!("expected {:?}, got Ok({:?})", expected, value),
        Err(err) => assert_eq!(
            error_code(&err),
            Some(expected.code()),
            "expected {:?}, got {:?}",
            expected,
            err
        ),
    }
}
