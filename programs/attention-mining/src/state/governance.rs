use anchor_lang::prelude::*;

use crate::errors::AttentionError;
use crate::state::profile::UserProfile;
use crate::state::protocol::{ParameterChange, ProtocolState};

// =============================================================================
// GOVERNANCE
// =============================================================================
//
// Token-weighted voting over protocol parameters. A vote weighs the voter's
// balance at the moment it is cast; later transfers do not change it. Once the
// end height is reached anyone may resolve the proposal:
//
// - total participation below the quorum → Rejected, whatever the tally
// - otherwise Passed iff support outweighs opposition and support on its own
//   reaches the quorum
//
// Resolution happens once. A Passed proposal can then be executed once to
// apply its parameter change.
// =============================================================================

pub const MAX_DESCRIPTION_LEN: usize = 256;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum ProposalStatus {
    #[default]
    Open,
    Passed,
    Rejected,
}

/// Tally returned after each vote
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteTally {
    pub votes_for: u64,
    pub votes_against: u64,
}

#[account]
#[derive(Default, Debug, PartialEq, InitSpace)]
pub struct Proposal {
    pub proposal_id: u64,
    pub proposer: Pubkey,
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,
    /// Parameter change applied if the proposal passes and is executed
    pub change: ParameterChange,

    // === Voting ===
    pub votes_for: u64,
    pub votes_against: u64,
    pub voter_count: u32,
    /// Governance quorum in force when the proposal was created
    pub quorum: u64,

    // === Timing ===
    pub created_at: u64,
    pub end_height: u64,

    // === Resolution ===
    pub status: ProposalStatus,
    pub resolved_at: Option<u64>,
    pub executed: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl Proposal {
    pub const SIZE: usize = 8 + Self::INIT_SPACE;

    pub fn open(
        &mut self,
        protocol: &mut ProtocolState,
        proposer: &UserProfile,
        description: String,
        change: ParameterChange,
        height: u64,
        bump: u8,
    ) -> Result<u64> {
        let params = protocol.params;
        require!(
            proposer.balance >= params.min_proposal_stake,
            AttentionError::BelowMinimumThreshold
        );
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            AttentionError::DescriptionTooLong
        );
        // Reject changes that could never be executed
        let mut candidate = params;
        candidate.apply(&change)?;

        let end_height = height
            .checked_add(params.voting_period)
            .ok_or(AttentionError::MathOverflow)?;
        let proposal_id = protocol.next_proposal_id()?;

        *self = Self {
            proposal_id,
            proposer: proposer.owner,
            description,
            change,
            quorum: params.governance_quorum,
            created_at: height,
            end_height,
            status: ProposalStatus::Open,
            bump,
            ..Self::default()
        };
        Ok(proposal_id)
    }

    pub fn total_votes(&self) -> u64 {
        self.votes_for.saturating_add(self.votes_against)
    }

    /// Record a vote weighted by the voter's current balance.
    pub fn cast_vote(
        &mut self,
        record: &mut VoteRecord,
        voter: &UserProfile,
        support: bool,
        height: u64,
        bump: u8,
    ) -> Result<VoteTally> {
        require!(
            self.status == ProposalStatus::Open && height < self.end_height,
            AttentionError::ProposalClosed
        );
        require!(!record.has_voted(), AttentionError::DuplicateVote);

        let weight = voter.balance;
        require!(weight > 0, AttentionError::InsufficientBalance);

        let (votes_for, votes_against) = if support {
            (
                self.votes_for
                    .checked_add(weight)
                    .ok_or(AttentionError::MathOverflow)?,
                self.votes_against,
            )
        } else {
            (
                self.votes_for,
                self.votes_against
                    .checked_add(weight)
                    .ok_or(AttentionError::MathOverflow)?,
            )
        };

        *record = VoteRecord {
            proposal_id: self.proposal_id,
            voter: voter.owner,
            weight,
            support,
            voted_at: height,
            bump,
        };
        self.votes_for = votes_for;
        self.votes_against = votes_against;
        self.voter_count = self.voter_count.saturating_add(1);

        Ok(VoteTally {
            votes_for,
            votes_against,
        })
    }

    /// Outcome of the current tally against the snapshotted quorum
    pub fn outcome(&self) -> ProposalStatus {
        if self.total_votes() < self.quorum {
            return ProposalStatus::Rejected;
        }
        if self.votes_for > self.votes_against && self.votes_for >= self.quorum {
            ProposalStatus::Passed
        } else {
            ProposalStatus::Rejected
        }
    }

    /// Resolve once the voting period is over. Calling again returns the
    /// stored outcome without touching anything.
    pub fn resolve(&mut self, height: u64) -> Result<ProposalStatus> {
        if self.status != ProposalStatus::Open {
            return Ok(self.status);
        }
        require!(height >= self.end_height, AttentionError::NotYetClosed);

        self.status = self.outcome();
        self.resolved_at = Some(height);
        Ok(self.status)
    }

    /// Apply the parameter change of a passed proposal.
    pub fn execute(&mut self, protocol: &mut ProtocolState) -> Result<ParameterChange> {
        require!(
            self.status == ProposalStatus::Passed,
            AttentionError::ProposalNotPassed
        );
        require!(!self.executed, AttentionError::AlreadyExecuted);

        protocol.params.apply(&self.change)?;
        self.executed = true;
        Ok(self.change)
    }
}

/// One per (proposal, voter); its existence is what blocks a second vote.
#[account]
#[derive(Default, Debug, PartialEq, InitSpace)]
pub struct VoteRecord {
    pub proposal_id: u64,
    pub voter: Pubkey,
    /// Balance snapshot at vote time
    pub weight: u64,
    pub support: bool,
    pub voted_at: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl VoteRecord {
    pub const SIZE: usize = 8 + Self::INIT_SPACE;

    pub fn has_voted(&self) -> bool {
        self.voter != Pubkey::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::protocol::{ProtocolParams, ProtocolParameter};

    fn protocol() -> ProtocolState {
        let mut protocol = ProtocolState::default();
        protocol
            .initialize(Pubkey::new_unique(), ProtocolParams::default(), 255)
            .unwrap();
        protocol
    }

    fn holder(balance: u64) -> UserProfile {
        let mut profile = UserProfile::default();
        profile.ensure(Pubkey::new_unique(), 0, 255).unwrap();
        profile.balance = balance;
        profile
    }

    fn change() -> ParameterChange {
        ParameterChange {
            parameter: ProtocolParameter::BaseRate,
            value: 2,
        }
    }

    fn open_proposal(protocol: &mut ProtocolState) -> Proposal {
        let mut proposal = Proposal::default();
        proposal
            .open(protocol, &holder(100), "double base rate".into(), change(), 10, 255)
            .unwrap();
        proposal
    }

    fn tallied(votes_for: u64, votes_against: u64, quorum: u64) -> Proposal {
        Proposal {
            votes_for,
            votes_against,
            quorum,
            end_height: 5,
            ..Proposal::default()
        }
    }

    #[test]
    fn proposer_needs_the_minimum_balance() {
        let mut protocol = protocol();
        let mut proposal = Proposal::default();
        assert_eq!(
            proposal
                .open(&mut protocol, &holder(49), "x".into(), change(), 0, 255)
                .unwrap_err(),
            AttentionError::BelowMinimumThreshold.into()
        );
        assert_eq!(protocol.next_proposal_id, 0);
    }

    #[test]
    fn unexecutable_changes_are_refused_up_front() {
        let mut protocol = protocol();
        let mut proposal = Proposal::default();
        let bad = ParameterChange {
            parameter: ProtocolParameter::SlashBps,
            value: 20_000,
        };
        assert_eq!(
            proposal
                .open(&mut protocol, &holder(100), "x".into(), bad, 0, 255)
                .unwrap_err(),
            AttentionError::InvalidParameter.into()
        );
        assert_eq!(
            proposal
                .open(&mut protocol, &holder(100), "x".repeat(257), change(), 0, 255)
                .unwrap_err(),
            AttentionError::DescriptionTooLong.into()
        );
    }

    #[test]
    fn second_vote_is_rejected_without_touching_the_tally() {
        let mut protocol = protocol();
        let mut proposal = open_proposal(&mut protocol);
        let voter = holder(70);
        let mut record = VoteRecord::default();

        let tally = proposal.cast_vote(&mut record, &voter, true, 11, 255).unwrap();
        assert_eq!(tally, VoteTally { votes_for: 70, votes_against: 0 });
        assert_eq!(record.weight, 70);

        assert_eq!(
            proposal
                .cast_vote(&mut record, &voter, false, 12, 255)
                .unwrap_err(),
            AttentionError::DuplicateVote.into()
        );
        assert_eq!((proposal.votes_for, proposal.votes_against), (70, 0));
    }

    #[test]
    fn voting_closes_at_end_height() {
        let mut protocol = protocol();
        let mut proposal = open_proposal(&mut protocol);
        let end = proposal.end_height;
        assert_eq!(
            proposal
                .cast_vote(&mut VoteRecord::default(), &holder(5), true, end, 255)
                .unwrap_err(),
            AttentionError::ProposalClosed.into()
        );
    }

    #[test]
    fn quorum_rules() {
        // support below quorum
        assert_eq!(tallied(120, 80, 150).outcome(), ProposalStatus::Rejected);
        // participation below quorum despite unanimity
        assert_eq!(tallied(5, 0, 150).outcome(), ProposalStatus::Rejected);
        assert_eq!(tallied(160, 40, 150).outcome(), ProposalStatus::Passed);
        assert_eq!(tallied(200, 200, 150).outcome(), ProposalStatus::Rejected);
    }

    #[test]
    fn resolution_waits_for_end_height_and_is_final() {
        let mut proposal = tallied(160, 40, 150);
        assert_eq!(
            proposal.resolve(4).unwrap_err(),
            AttentionError::NotYetClosed.into()
        );
        assert_eq!(proposal.resolve(5).unwrap(), ProposalStatus::Passed);

        proposal.votes_against = 1_000;
        assert_eq!(proposal.resolve(9).unwrap(), ProposalStatus::Passed);
        assert_eq!(proposal.resolved_at, Some(5));
    }

    #[test]
    fn passed_proposal_executes_once() {
        let mut protocol = protocol();
        let mut proposal = open_proposal(&mut protocol);
        proposal.votes_for = 200;
        proposal.resolve(proposal.end_height).unwrap();

        proposal.execute(&mut protocol).unwrap();
        assert_eq!(protocol.params.base_rate, 2);
        assert_eq!(
            proposal.execute(&mut protocol).unwrap_err(),
            AttentionError::AlreadyExecuted.into()
        );

        let mut rejected = tallied(0, 0, 150);
        rejected.resolve(5).unwrap();
        assert_eq!(
            rejected.execute(&mut protocol).unwrap_err(),
            AttentionError::ProposalNotPassed.into()
        );
    }
}
