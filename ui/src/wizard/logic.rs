//! Pure wizard flow decisions: page transitions, the submit payload, and
//! the follow-up navigation target. No rendering, no I/O.

use crate::services::client::ProcessChangeOrderRequest;
use crate::services::host::NavigationTarget;
use crate::wizard::form_validation::{validate_for_next, ValidationError};
use crate::wizard::types::{ChangeOrderType, TeamMemberCandidate, WizardPage, WizardState};

/// Result of a validated Next transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PageAdvance {
    pub to: WizardPage,
    /// True when entering the order-team page for the first time; the
    /// caller must trigger the roster fetch.
    pub fetch_team: bool,
}

/// Decide where Next goes from the current page, validating first.
pub fn next_page(state: &WizardState) -> Result<PageAdvance, ValidationError> {
    validate_for_next(state)?;

    let advance = match state.current_page {
        WizardPage::ChangeOrder => {
            if state.change_order_type == Some(ChangeOrderType::OrderTeamChange) {
                PageAdvance {
                    to: WizardPage::OrderTeam,
                    fetch_team: !state.team_loaded,
                }
            } else {
                PageAdvance {
                    to: WizardPage::Confirmation,
                    fetch_team: false,
                }
            }
        }
        WizardPage::OrderTeam => PageAdvance {
            to: WizardPage::Confirmation,
            fetch_team: false,
        },
        // No Next control on the confirmation page
        WizardPage::Confirmation => PageAdvance {
            to: WizardPage::Confirmation,
            fetch_team: false,
        },
    };
    Ok(advance)
}

/// Decide where Back goes; `None` when already on the first page. Back
/// never validates and never re-triggers the roster fetch.
pub fn back_page(state: &WizardState) -> Option<WizardPage> {
    match state.current_page {
        WizardPage::Confirmation => {
            if state.change_order_type == Some(ChangeOrderType::OrderTeamChange) {
                Some(WizardPage::OrderTeam)
            } else {
                Some(WizardPage::ChangeOrder)
            }
        }
        WizardPage::OrderTeam => Some(WizardPage::ChangeOrder),
        WizardPage::ChangeOrder => None,
    }
}

/// Build the submit payload. For every type except Order Team Change the
/// roster edits are dropped before serializing, so the server only ever
/// sees team data for team changes.
pub fn build_submit_request(
    state: &WizardState,
    change_type: ChangeOrderType,
) -> ProcessChangeOrderRequest {
    let (selected_ids, candidates) = if change_type == ChangeOrderType::OrderTeamChange {
        (state.selected_team_ids.clone(), state.new_members.clone())
    } else {
        (Vec::new(), vec![TeamMemberCandidate::default()])
    };

    ProcessChangeOrderRequest {
        record_id: state.record_id.clone(),
        change_order_type: change_type.label().to_string(),
        target_customer_amount: state.target_customer_amount.clone(),
        selected_order_team_ids: selected_ids,
        // The server procedure takes the rows pre-serialized
        new_team_members_json: serde_json::to_string(&candidates)
            .unwrap_or_else(|_| "[]".to_string()),
    }
}

/// Follow-up navigation after a successful submit, keyed by type.
pub fn follow_up_target(change_type: ChangeOrderType, new_record_id: &str) -> NavigationTarget {
    match change_type {
        ChangeOrderType::NonCommissionableChange | ChangeOrderType::ProductMaterialChange => {
            NavigationTarget::quote_edit_products(new_record_id)
        }
        _ => NavigationTarget::record_view("Order", new_record_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_type(change_type: ChangeOrderType) -> WizardState {
        let mut state = WizardState::new("001");
        state.change_order_type = Some(change_type);
        state
    }

    #[test]
    fn test_non_team_types_skip_the_order_team_page() {
        for change_type in [
            ChangeOrderType::NonCommissionableChange,
            ChangeOrderType::ProductMaterialChange,
            ChangeOrderType::ContractAmountChange,
        ] {
            let mut state = state_with_type(change_type);
            state.target_customer_amount = "100".to_string();
            let advance = next_page(&state).unwrap();
            assert_eq!(advance.to, WizardPage::Confirmation);
            assert!(!advance.fetch_team);
        }
    }

    #[test]
    fn test_order_team_change_goes_through_the_team_page() {
        let mut state = state_with_type(ChangeOrderType::OrderTeamChange);

        let advance = next_page(&state).unwrap();
        assert_eq!(advance.to, WizardPage::OrderTeam);
        assert!(advance.fetch_team);

        // Once loaded, re-entering the page must not fetch again
        state.team_loaded = true;
        let advance = next_page(&state).unwrap();
        assert!(!advance.fetch_team);

        // Next from the team page needs a satisfied rule 3
        state.current_page = WizardPage::OrderTeam;
        state.toggle_team_selection("otm-1");
        let advance = next_page(&state).unwrap();
        assert_eq!(advance.to, WizardPage::Confirmation);
        assert!(!advance.fetch_team);
    }

    #[test]
    fn test_next_is_rejected_by_validation() {
        let state = WizardState::new("001");
        assert_eq!(next_page(&state), Err(ValidationError::NoOptionSelected));
    }

    #[test]
    fn test_back_returns_to_the_type_specific_page() {
        let mut state = state_with_type(ChangeOrderType::OrderTeamChange);
        state.current_page = WizardPage::Confirmation;
        assert_eq!(back_page(&state), Some(WizardPage::OrderTeam));

        state.change_order_type = Some(ChangeOrderType::ContractAmountChange);
        assert_eq!(back_page(&state), Some(WizardPage::ChangeOrder));

        state.current_page = WizardPage::OrderTeam;
        assert_eq!(back_page(&state), Some(WizardPage::ChangeOrder));

        state.current_page = WizardPage::ChangeOrder;
        assert_eq!(back_page(&state), None);
    }

    #[test]
    fn test_submit_request_carries_roster_only_for_team_changes() {
        let mut state = state_with_type(ChangeOrderType::OrderTeamChange);
        state.toggle_team_selection("otm-1");
        state.set_candidate_user(0, "005".to_string()).unwrap();
        state.set_candidate_role(0, "Owner".to_string()).unwrap();

        let request = build_submit_request(&state, ChangeOrderType::OrderTeamChange);
        assert_eq!(request.selected_order_team_ids, vec!["otm-1"]);
        assert_eq!(
            request.new_team_members_json,
            r#"[{"userId":"005","role":"Owner"}]"#
        );

        // Any other type submits an empty roster even if edits linger
        let request = build_submit_request(&state, ChangeOrderType::ContractAmountChange);
        assert!(request.selected_order_team_ids.is_empty());
        assert_eq!(
            request.new_team_members_json,
            r#"[{"userId":"","role":""}]"#
        );
        assert_eq!(request.change_order_type, "Contract Amount Change");
        assert_eq!(request.record_id, "001");
    }

    #[test]
    fn test_follow_up_target_by_type() {
        let target = follow_up_target(ChangeOrderType::NonCommissionableChange, "a1B01");
        assert_eq!(
            target.url(),
            "/apex/sbqq__sb?scontrolCaching=1&id=a1B01#quote/le?qId=a1B01"
        );

        let target = follow_up_target(ChangeOrderType::ProductMaterialChange, "a1B02");
        assert!(target.url().contains("a1B02"));
        assert!(target.url().starts_with("/apex/sbqq__sb"));

        for change_type in [
            ChangeOrderType::ContractAmountChange,
            ChangeOrderType::OrderTeamChange,
        ] {
            let target = follow_up_target(change_type, "801000042");
            assert_eq!(target.url(), "/lightning/r/Order/801000042/view");
        }
    }
}
