//! Wizard orchestrator - wraps the remote calls in spinner handling, toast
//! reporting and the follow-up navigation. All state changes go through the
//! dispatch callback; all UI effects go through the host bridge.

use tracing::{error, info};

use crate::services::client::ChangeOrderApi;
use crate::services::host::{HostBridge, ToastSeverity};
use crate::wizard::logic::{build_submit_request, follow_up_target};
use crate::wizard::types::{RoleOption, WizardAction, WizardState};

pub const ERROR_TITLE: &str = "Error";
pub const SUCCESS_TITLE: &str = "Success";

/// Load the role lookup once at mount. A failure is reported but does not
/// block the wizard; the role dropdown just stays empty.
pub async fn load_role_options(
    api: &impl ChangeOrderApi,
    host: &impl HostBridge,
    dispatch: impl Fn(WizardAction),
) {
    match api.get_team_member_roles().await {
        Ok(roles) => {
            let options: Vec<RoleOption> = roles.iter().map(|r| RoleOption::from_name(r)).collect();
            dispatch(WizardAction::SetRoleOptions(options));
        }
        Err(err) => {
            error!("Failed to load team member roles: {}", err);
            host.notify(ERROR_TITLE, &err.to_string(), ToastSeverity::Error);
        }
    }
}

/// Fetch the existing order team when entering the order-team page. The
/// spinner is cleared on every exit path.
pub async fn load_order_team(
    api: &impl ChangeOrderApi,
    host: &impl HostBridge,
    record_id: &str,
    dispatch: impl Fn(WizardAction),
) {
    dispatch(WizardAction::SetLoading(true));
    match api.get_order_team(record_id).await {
        Ok(members) => {
            dispatch(WizardAction::SetOrderTeam(members));
        }
        Err(err) => {
            error!("Failed to fetch order team for {}: {}", record_id, err);
            host.notify(
                ERROR_TITLE,
                "Error fetching order team members",
                ToastSeverity::Error,
            );
        }
    }
    dispatch(WizardAction::SetLoading(false));
}

/// Run the change order procedure from the confirmation page. On success
/// this toasts, then navigates to the follow-up record; on failure it
/// toasts the extracted error message. Either way the spinner is cleared
/// and the wizard closed.
pub async fn submit_change_order(
    state: &WizardState,
    api: &impl ChangeOrderApi,
    host: &impl HostBridge,
    dispatch: impl Fn(WizardAction),
) {
    if state.submit_in_flight {
        info!("Submit already in flight for {}, ignoring", state.record_id);
        return;
    }
    let Some(change_type) = state.change_order_type else {
        // Unreachable through the UI; the confirmation page requires a type
        error!("Submit without a change order type on {}", state.record_id);
        host.notify(ERROR_TITLE, "Please select an option", ToastSeverity::Error);
        return;
    };

    dispatch(WizardAction::SetSubmitting(true));
    dispatch(WizardAction::SetLoading(true));

    let request = build_submit_request(state, change_type);
    match api.process_change_order(&request).await {
        Ok(new_record_id) => {
            info!(
                "Change order {} on {} created record {}",
                change_type, state.record_id, new_record_id
            );
            host.notify(
                SUCCESS_TITLE,
                &format!("{} executed successfully", change_type),
                ToastSeverity::Success,
            );
            host.navigate(&follow_up_target(change_type, &new_record_id));
        }
        Err(err) => {
            error!(
                "Change order submit failed on {} (type {}): {}",
                state.record_id, change_type, err
            );
            host.notify(ERROR_TITLE, &err.to_string(), ToastSeverity::Error);
        }
    }

    // Guaranteed cleanup regardless of outcome
    dispatch(WizardAction::SetLoading(false));
    dispatch(WizardAction::SetSubmitting(false));
    host.close_wizard();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use async_trait::async_trait;
    use crate::services::client::{ApiError, ApiResult, ProcessChangeOrderRequest};
    use crate::services::host::NavigationTarget;
    use crate::wizard::types::{ChangeOrderType, OrderTeamMember};

    struct FakeApi {
        roles: ApiResult<Vec<String>>,
        team: ApiResult<Vec<OrderTeamMember>>,
        process: ApiResult<String>,
        team_calls: RefCell<u32>,
        process_calls: RefCell<Vec<ProcessChangeOrderRequest>>,
    }

    impl FakeApi {
        fn happy() -> Self {
            Self {
                roles: Ok(vec!["Owner".to_string(), "Engineer".to_string()]),
                team: Ok(vec![OrderTeamMember {
                    id: "otm-1".to_string(),
                    user_id: "005".to_string(),
                    user_name: "Avery Quinn".to_string(),
                }]),
                process: Ok("801NEW".to_string()),
                team_calls: RefCell::new(0),
                process_calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ChangeOrderApi for FakeApi {
        async fn get_team_member_roles(&self) -> ApiResult<Vec<String>> {
            self.roles.clone()
        }

        async fn get_order_team(&self, _record_id: &str) -> ApiResult<Vec<OrderTeamMember>> {
            *self.team_calls.borrow_mut() += 1;
            self.team.clone()
        }

        async fn process_change_order(
            &self,
            request: &ProcessChangeOrderRequest,
        ) -> ApiResult<String> {
            self.process_calls.borrow_mut().push(request.clone());
            self.process.clone()
        }
    }

    #[derive(Default)]
    struct RecordingHost {
        toasts: RefCell<Vec<(String, String, ToastSeverity)>>,
        navigations: RefCell<Vec<NavigationTarget>>,
        closes: RefCell<u32>,
    }

    impl HostBridge for RecordingHost {
        fn notify(&self, title: &str, message: &str, severity: ToastSeverity) {
            self.toasts
                .borrow_mut()
                .push((title.to_string(), message.to_string(), severity));
        }

        fn navigate(&self, target: &NavigationTarget) {
            self.navigations.borrow_mut().push(target.clone());
        }

        fn close_wizard(&self) {
            *self.closes.borrow_mut() += 1;
        }
    }

    fn shared_state(record_id: &str) -> (Rc<RefCell<WizardState>>, impl Fn(WizardAction)) {
        let state = Rc::new(RefCell::new(WizardState::new(record_id)));
        let dispatch = {
            let state = Rc::clone(&state);
            move |action: WizardAction| state.borrow_mut().reduce_in_place(action)
        };
        (state, dispatch)
    }

    #[tokio::test]
    async fn test_load_role_options_populates_dropdown() {
        let api = FakeApi::happy();
        let host = RecordingHost::default();
        let (state, dispatch) = shared_state("001");

        load_role_options(&api, &host, dispatch).await;

        let state = state.borrow();
        let options = &state.role_options;
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "Owner");
        assert_eq!(options[0].value, "Owner");
        assert!(host.toasts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_role_load_failure_does_not_block_the_wizard() {
        let mut api = FakeApi::happy();
        api.roles = Err(ApiError::Network {
            message: "connection refused".to_string(),
        });
        let host = RecordingHost::default();
        let (state, dispatch) = shared_state("001");

        load_role_options(&api, &host, dispatch).await;

        assert!(state.borrow().role_options.is_empty());
        let toasts = host.toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].0, "Error");
        assert_eq!(toasts[0].2, ToastSeverity::Error);
    }

    #[tokio::test]
    async fn test_load_order_team_sets_cache_and_clears_spinner() {
        let api = FakeApi::happy();
        let host = RecordingHost::default();
        let (state, dispatch) = shared_state("001");

        load_order_team(&api, &host, "001", dispatch).await;

        let state = state.borrow();
        assert!(state.team_loaded);
        assert_eq!(state.order_team.len(), 1);
        assert!(!state.is_loading);
        assert_eq!(*api.team_calls.borrow(), 1);
    }

    #[tokio::test]
    async fn test_order_team_fetch_failure_shows_generic_toast() {
        let mut api = FakeApi::happy();
        api.team = Err(ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        });
        let host = RecordingHost::default();
        let (state, dispatch) = shared_state("001");

        load_order_team(&api, &host, "001", dispatch).await;

        let toasts = host.toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].1, "Error fetching order team members");
        // Spinner cleared even on failure, cache flag untouched
        assert!(!state.borrow().is_loading);
        assert!(!state.borrow().team_loaded);
    }

    #[tokio::test]
    async fn test_submit_success_navigates_by_type() {
        let api = FakeApi::happy();
        let host = RecordingHost::default();
        let (state, dispatch) = shared_state("001");
        state.borrow_mut().change_order_type = Some(ChangeOrderType::NonCommissionableChange);

        let snapshot = state.borrow().clone();
        submit_change_order(&snapshot, &api, &host, dispatch).await;

        let toasts = host.toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].0, "Success");
        assert_eq!(
            toasts[0].1,
            "Non Commissionable Change executed successfully"
        );

        let navigations = host.navigations.borrow();
        assert_eq!(navigations.len(), 1);
        assert_eq!(
            navigations[0].url(),
            "/apex/sbqq__sb?scontrolCaching=1&id=801NEW#quote/le?qId=801NEW"
        );

        assert_eq!(*host.closes.borrow(), 1);
        assert!(!state.borrow().is_loading);
        assert!(!state.borrow().submit_in_flight);
    }

    #[tokio::test]
    async fn test_submit_other_types_navigate_to_the_order_record() {
        let api = FakeApi::happy();
        let host = RecordingHost::default();
        let (state, dispatch) = shared_state("001");
        state.borrow_mut().change_order_type = Some(ChangeOrderType::OrderTeamChange);
        state.borrow_mut().toggle_team_selection("otm-1");

        let snapshot = state.borrow().clone();
        submit_change_order(&snapshot, &api, &host, dispatch).await;

        let navigations = host.navigations.borrow();
        assert_eq!(navigations[0].url(), "/lightning/r/Order/801NEW/view");

        // The roster made it onto the wire
        let calls = api.process_calls.borrow();
        assert_eq!(calls[0].selected_order_team_ids, vec!["otm-1"]);
    }

    #[tokio::test]
    async fn test_submit_failure_toasts_once_and_still_closes() {
        let mut api = FakeApi::happy();
        api.process = Err(ApiError::Server {
            status: 409,
            message: "Order is locked".to_string(),
        });
        let host = RecordingHost::default();
        let (state, dispatch) = shared_state("001");
        state.borrow_mut().change_order_type = Some(ChangeOrderType::ContractAmountChange);
        state.borrow_mut().target_customer_amount = "1200".to_string();

        let snapshot = state.borrow().clone();
        submit_change_order(&snapshot, &api, &host, dispatch).await;

        let toasts = host.toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].1, "Order is locked");
        assert_eq!(toasts[0].2, ToastSeverity::Error);
        assert!(host.navigations.borrow().is_empty());

        // Guaranteed cleanup: spinner off, wizard closed
        assert_eq!(*host.closes.borrow(), 1);
        assert!(!state.borrow().is_loading);
        assert!(!state.borrow().submit_in_flight);
    }

    #[tokio::test]
    async fn test_submit_in_flight_is_a_no_op() {
        let api = FakeApi::happy();
        let host = RecordingHost::default();
        let (state, dispatch) = shared_state("001");
        state.borrow_mut().change_order_type = Some(ChangeOrderType::OrderTeamChange);
        state.borrow_mut().toggle_team_selection("otm-1");
        state.borrow_mut().submit_in_flight = true;

        let snapshot = state.borrow().clone();
        submit_change_order(&snapshot, &api, &host, dispatch).await;

        assert!(api.process_calls.borrow().is_empty());
        assert!(host.toasts.borrow().is_empty());
        assert_eq!(*host.closes.borrow(), 0);
    }
}
