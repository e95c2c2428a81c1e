use thiserror::Error;

use crate::wizard::types::{ChangeOrderType, WizardPage, WizardState};

/// Locally detected input problems that block a Next transition. The
/// `Display` text is exactly what the user sees in the error toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select an option")]
    NoOptionSelected,
    #[error("Please fill in the Target Customer Amount")]
    MissingTargetAmount,
    #[error("A team member needs to be added or selected to proceed")]
    NoTeamMemberChosen,
}

/// Validates the wizard before a Next transition. Rules run in a fixed
/// order and the first failure wins.
pub fn validate_for_next(state: &WizardState) -> Result<(), ValidationError> {
    // Rule 1: a bound record and a selected change-order type
    if state.record_id.is_empty() || state.change_order_type.is_none() {
        return Err(ValidationError::NoOptionSelected);
    }

    // Rule 2: Contract Amount Change needs a target amount
    if state.change_order_type == Some(ChangeOrderType::ContractAmountChange)
        && state.target_customer_amount.is_empty()
    {
        return Err(ValidationError::MissingTargetAmount);
    }

    // Rule 3: the order-team page needs at least one member selected or added
    if state.current_page == WizardPage::OrderTeam
        && state.change_order_type == Some(ChangeOrderType::OrderTeamChange)
        && state.selected_team_ids.is_empty()
        && !state.new_members.iter().any(|member| member.is_complete())
    {
        return Err(ValidationError::NoTeamMemberChosen);
    }

    Ok(())
}
