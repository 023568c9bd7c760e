use anchor_lang::prelude::*;

#[error_code]
pub enum AttentionError {
    #[msg("Unauthorized: caller does not hold the required authority or role")]
    Unauthorized,

    #[msg("Invalid amount: must be strictly positive")]
    InvalidAmount,

    #[msg("Insufficient token balance")]
    InsufficientBalance,

    #[msg("Slash amount exceeds the remaining stake")]
    InsufficientStake,

    #[msg("Amount is below the required minimum")]
    BelowMinimumThreshold,

    #[msg("Account is already an active validator")]
    AlreadyValidator,

    #[msg("Validator has already scored this content")]
    AlreadyValidated,

    #[msg("This metadata hash was already submitted by the submitter")]
    DuplicateSubmission,

    #[msg("Content is not in a state that allows this operation")]
    InvalidContent,

    #[msg("Campaign is no longer accepting attention")]
    CampaignExpired,

    #[msg("Campaign has not reached its end height")]
    NotExpired,

    #[msg("Proposal is closed for voting")]
    ProposalClosed,

    #[msg("Voter has already voted on this proposal")]
    DuplicateVote,

    #[msg("Proposal voting period has not ended")]
    NotYetClosed,

    #[msg("Invalid authority: cannot set zero address as authority")]
    InvalidAuthority,

    #[msg("Protocol parameter out of range")]
    InvalidParameter,

    #[msg("Invalid score: must be between 0 and 10")]
    InvalidScore,

    #[msg("Sender and recipient must differ")]
    SelfTransfer,

    #[msg("Account is not an active validator")]
    NotValidator,

    #[msg("Validator still has unsettled validations")]
    PendingValidations,

    #[msg("Content has not reached its validation quorum")]
    NotFinalized,

    #[msg("Validation already settled")]
    AlreadySettled,

    #[msg("Proposal did not pass")]
    ProposalNotPassed,

    #[msg("Proposal already executed")]
    AlreadyExecuted,

    #[msg("Description exceeds 256 bytes")]
    DescriptionTooLong,

    #[msg("Arithmetic overflow")]
    MathOverflow,

    #[msg("Profile owner cannot be the zero address")]
    InvalidOwner,
}
