#![allow(dead_code)]

// In-memory driver for the domain layer. Each operation works on copies of
// the records it touches and writes them back only when the call succeeds,
// the same all-or-nothing behaviour the runtime gives an instruction.

use std::collections::HashMap;

use anchor_lang::prelude::*;
use attention_mining::state::{
    ledger, Campaign, CampaignStatus, ContentItem, ContentStatus, ParameterChange, Proposal,
    ProposalStatus, ProtocolParams, ProtocolState, SettlementOutcome, TargetMetric, UserProfile,
    ValidatorStake, VoteRecord, VoteTally,
};

pub struct World {
    pub authority: Pubkey,
    pub height: u64,
    pub protocol: ProtocolState,
    pub profiles: HashMap<Pubkey, UserProfile>,
    pub stakes: HashMap<Pubkey, ValidatorStake>,
    /// Indexed by content id
    pub contents: Vec<ContentItem>,
    pub content_keys: HashMap<(Pubkey, [u8; 32]), u64>,
    /// Indexed by campaign id
    pub campaigns: Vec<Campaign>,
    /// Indexed by proposal id
    pub proposals: Vec<Proposal>,
    pub votes: HashMap<(u64, Pubkey), VoteRecord>,
}

impl World {
    pub fn new() -> Self {
        Self::with_params(ProtocolParams::default())
    }

    pub fn with_params(params: ProtocolParams) -> Self {
        let authority = Pubkey::new_unique();
        let mut protocol = ProtocolState::default();
        protocol
            .initialize(authority, params, 255)
            .expect("valid params");
        Self {
            authority,
            height: 0,
            protocol,
            profiles: HashMap::new(),
            stakes: HashMap::new(),
            contents: Vec::new(),
            content_keys: HashMap::new(),
            campaigns: Vec::new(),
            proposals: Vec::new(),
            votes: HashMap::new(),
        }
    }

    /// A fresh identity with an empty profile
    pub fn user(&mut self) -> Pubkey {
        let who = Pubkey::new_unique();
        let profile = self.load_profile(&who).expect("profile");
        self.profiles.insert(who, profile);
        who
    }

    /// A fresh identity holding `amount` freshly minted tokens
    pub fn funded_user(&mut self, amount: u64) -> Pubkey {
        let who = self.user();
        self.mint(who, amount).expect("mint");
        who
    }

    pub fn advance(&mut self, blocks: u64) {
        self.height += blocks;
    }

    pub fn advance_to(&mut self, height: u64) {
        self.height = self.height.max(height);
    }

    pub fn profile(&self, who: &Pubkey) -> UserProfile {
        self.load_profile(who).expect("profile")
    }

    pub fn balance(&self, who: &Pubkey) -> u64 {
        ledger::balance_of(&self.profile(who))
    }

    pub fn stake(&self, who: &Pubkey) -> ValidatorStake {
        self.stakes.get(who).cloned().unwrap_or_default()
    }

    pub fn content(&self, content_id: u64) -> &ContentItem {
        &self.contents[content_id as usize]
    }

    pub fn campaign(&self, campaign_id: u64) -> &Campaign {
        &self.campaigns[campaign_id as usize]
    }

    pub fn proposal(&self, proposal_id: u64) -> &Proposal {
        &self.proposals[proposal_id as usize]
    }

    /// Stored profile, or the fresh one a handler would create lazily
    fn load_profile(&self, who: &Pubkey) -> Result<UserProfile> {
        if let Some(profile) = self.profiles.get(who) {
            return Ok(profile.clone());
        }
        let mut profile = UserProfile::default();
        profile.ensure(*who, self.height, 255)?;
        Ok(profile)
    }

    // === Protocol ===

    pub fn set_authority(&mut self, caller: Pubkey, new_authority: Pubkey) -> Result<()> {
        let mut protocol = self.protocol.clone();
        protocol.set_authority(&caller, new_authority)?;
        self.protocol = protocol;
        Ok(())
    }

    // === Ledger ===

    pub fn mint(&mut self, to: Pubkey, amount: u64) -> Result<u64> {
        let authority = self.authority;
        self.mint_as(authority, to, amount)
    }

    pub fn mint_as(&mut self, caller: Pubkey, to: Pubkey, amount: u64) -> Result<u64> {
        let mut protocol = self.protocol.clone();
        let mut profile = self.load_profile(&to)?;
        let balance = ledger::mint(&mut protocol, &caller, &mut profile, amount)?;
        self.protocol = protocol;
        self.profiles.insert(to, profile);
        Ok(balance)
    }

    pub fn transfer(&mut self, from: Pubkey, to: Pubkey, amount: u64) -> Result<()> {
        let mut sender = self.load_profile(&from)?;
        let mut recipient = self.load_profile(&to)?;
        ledger::transfer(&mut sender, &mut recipient, amount)?;
        self.profiles.insert(from, sender);
        self.profiles.insert(to, recipient);
        Ok(())
    }

    pub fn burn(&mut self, from: Pubkey, amount: u64) -> Result<u64> {
        let mut protocol = self.protocol.clone();
        let mut profile = self.load_profile(&from)?;
        let remaining = ledger::burn(&mut protocol, &mut profile, amount)?;
        self.protocol = protocol;
        self.profiles.insert(from, profile);
        Ok(remaining)
    }

    // === Validator pool ===

    pub fn become_validator(&mut self, who: Pubkey, amount: u64) -> Result<()> {
        let mut protocol = self.protocol.clone();
        let mut profile = self.load_profile(&who)?;
        let mut stake = self.stake(&who);
        stake.activate(&mut protocol, &mut profile, amount, self.height, 255)?;
        self.protocol = protocol;
        self.profiles.insert(who, profile);
        self.stakes.insert(who, stake);
        Ok(())
    }

    pub fn unstake(&mut self, who: Pubkey) -> Result<u64> {
        let mut protocol = self.protocol.clone();
        let mut profile = self.load_profile(&who)?;
        let mut stake = self.stake(&who);
        let returned = stake.unstake(&mut protocol, &mut profile)?;
        self.protocol = protocol;
        self.profiles.insert(who, profile);
        self.stakes.insert(who, stake);
        Ok(returned)
    }

    pub fn slash(&mut self, caller: Pubkey, who: Pubkey, amount: u64) -> Result<u64> {
        let mut protocol = self.protocol.clone();
        let mut stake = self.stake(&who);
        protocol.require_authority(&caller)?;
        let remaining = stake.slash(&mut protocol, amount)?;
        self.protocol = protocol;
        self.stakes.insert(who, stake);
        Ok(remaining)
    }

    // === Content registry ===

    pub fn submit(&mut self, who: Pubkey, metadata_hash: [u8; 32]) -> Result<u64> {
        let mut protocol = self.protocol.clone();
        let mut profile = self.load_profile(&who)?;
        let existing = self.content_keys.get(&(who, metadata_hash)).copied();
        let mut content = existing
            .map(|id| self.content(id).clone())
            .unwrap_or_default();

        let content_id = content.submit(&mut protocol, &mut profile, metadata_hash, self.height, 255)?;

        self.protocol = protocol;
        self.profiles.insert(who, profile);
        self.content_keys.insert((who, metadata_hash), content_id);
        self.contents.push(content);
        Ok(content_id)
    }

    pub fn validate(&mut self, who: Pubkey, content_id: u64, score: u8) -> Result<ContentStatus> {
        let params = self.protocol.params;
        let mut content = self.content(content_id).clone();
        let mut stake = self.stake(&who);
        let mut submitter = self.load_profile(&content.submitter)?;

        let status = content.validate(&mut stake, &mut submitter, score, &params, self.height)?;

        self.profiles.insert(content.submitter, submitter);
        self.stakes.insert(who, stake);
        self.contents[content_id as usize] = content;
        Ok(status)
    }

    pub fn settle(&mut self, content_id: u64, who: Pubkey) -> Result<SettlementOutcome> {
        let mut protocol = self.protocol.clone();
        let mut content = self.content(content_id).clone();
        let mut stake = self.stake(&who);
        let mut profile = self.load_profile(&who)?;

        let outcome = content.settle(&mut protocol, &mut stake, &mut profile)?;

        self.protocol = protocol;
        self.profiles.insert(who, profile);
        self.stakes.insert(who, stake);
        self.contents[content_id as usize] = content;
        Ok(outcome)
    }

    // === Campaigns ===

    pub fn create_campaign(&mut self, creator: Pubkey, budget: u64, duration: u64) -> Result<u64> {
        let mut protocol = self.protocol.clone();
        let mut profile = self.load_profile(&creator)?;
        let mut campaign = Campaign::default();

        let campaign_id = campaign.open(
            &mut protocol,
            &mut profile,
            budget,
            TargetMetric::Duration,
            duration,
            self.height,
            255,
        )?;

        self.protocol = protocol;
        self.profiles.insert(creator, profile);
        self.campaigns.push(campaign);
        Ok(campaign_id)
    }

    pub fn record_attention(
        &mut self,
        user: Pubkey,
        campaign_id: u64,
        content_id: u64,
        duration: u64,
        quality: u8,
    ) -> Result<u64> {
        let mut protocol = self.protocol.clone();
        let mut profile = self.load_profile(&user)?;
        let mut campaign = self.campaign(campaign_id).clone();
        let mut content = self.content(content_id).clone();

        let paid = campaign.record_attention(
            &mut protocol,
            &mut profile,
            &mut content,
            duration,
            quality,
            self.height,
        )?;

        self.protocol = protocol;
        self.profiles.insert(user, profile);
        self.campaigns[campaign_id as usize] = campaign;
        self.contents[content_id as usize] = content;
        Ok(paid)
    }

    pub fn close_campaign(&mut self, campaign_id: u64) -> Result<u64> {
        let mut protocol = self.protocol.clone();
        let mut campaign = self.campaign(campaign_id).clone();
        let creator = campaign.creator;
        let mut profile = self.load_profile(&creator)?;

        let refund = campaign.refund_unspent(&mut protocol, &mut profile, self.height)?;

        self.protocol = protocol;
        self.profiles.insert(creator, profile);
        self.campaigns[campaign_id as usize] = campaign;
        Ok(refund)
    }

    // === Governance ===

    pub fn propose(&mut self, proposer: Pubkey, change: ParameterChange) -> Result<u64> {
        let mut protocol = self.protocol.clone();
        let profile = self.load_profile(&proposer)?;
        let mut proposal = Proposal::default();

        let proposal_id = proposal.open(
            &mut protocol,
            &profile,
            "parameter change".to_string(),
            change,
            self.height,
            255,
        )?;

        self.protocol = protocol;
        self.proposals.push(proposal);
        Ok(proposal_id)
    }

    pub fn vote(&mut self, voter: Pubkey, proposal_id: u64, support: bool) -> Result<VoteTally> {
        let profile = self.load_profile(&voter)?;
        let mut proposal = self.proposal(proposal_id).clone();
        let mut record = self
            .votes
            .get(&(proposal_id, voter))
            .cloned()
            .unwrap_or_default();

        let tally = proposal.cast_vote(&mut record, &profile, support, self.height, 255)?;

        self.proposals[proposal_id as usize] = proposal;
        self.votes.insert((proposal_id, voter), record);
        Ok(tally)
    }

    pub fn resolve(&mut self, proposal_id: u64) -> Result<ProposalStatus> {
        let mut proposal = self.proposal(proposal_id).clone();
        let status = proposal.resolve(self.height)?;
        self.proposals[proposal_id as usize] = proposal;
        Ok(status)
    }

    pub fn execute(&mut self, proposal_id: u64) -> Result<ParameterChange> {
        let mut protocol = self.protocol.clone();
        let mut proposal = self.proposal(proposal_id).clone();
        let change = proposal.execute(&mut protocol)?;
        self.protocol = protocol;
        self.proposals[proposal_id as usize] = proposal;
        Ok(change)
    }

    // === Invariants ===

    /// Every minted token that was not burned sits in exactly one place.
    pub fn assert_conserved(&self) {
        let balances: u64 = self.profiles.values().map(|p| p.balance).sum();
        let staked: u64 = self.stakes.values().map(|s| s.amount).sum();
        let escrowed: u64 = self
            .campaigns
            .iter()
            .filter(|c| c.status != CampaignStatus::Expired)
            .map(|c| c.budget - c.spent)
            .sum();

        let p = &self.protocol;
        assert_eq!(
            p.total_minted - p.total_burned,
            balances + p.total_escrowed + p.total_staked,
            "supply does not add up"
        );
        assert_eq!(p.total_escrowed, escrowed, "escrow counter drifted");
        assert_eq!(p.total_staked, staked, "stake counter drifted");
        assert_eq!(p.circulating(), balances);
        for campaign in &self.campaigns {
            assert!(campaign.spent <= campaign.budget);
        }
    }
}
