use dioxus::prelude::*;

use crate::services::client::CrmClient;
use crate::services::host::WebHost;
use crate::wizard::{
    back_page, orchestrator::submit_change_order, ChangeOrderType, WizardAction, WizardState,
};

#[derive(Props, PartialEq, Clone)]
pub struct ConfirmationFormProps {
    pub state: Signal<WizardState>,
    pub dispatch: EventHandler<WizardAction>,
}

/// Final page: summarize the selections and run the change order procedure.
#[component]
pub fn ConfirmationForm(props: ConfirmationFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    let snapshot = state();
    let change_type_label = snapshot
        .change_order_type
        .map(|t| t.label())
        .unwrap_or("(none)");
    let is_team_change = snapshot.change_order_type == Some(ChangeOrderType::OrderTeamChange);
    let kept_count = snapshot.selected_team_ids.len();
    let added_count = snapshot
        .new_members
        .iter()
        .filter(|member| member.is_complete())
        .count();

    rsx! {
        div {
            class: "wizard-form confirmation-page",

            h2 {
                class: "form-title",
                "Confirm Change Order"
            }

            div {
                class: "summary-section",
                div {
                    class: "summary-row",
                    span { class: "summary-label", "Change order type:" }
                    span { class: "summary-value", "{change_type_label}" }
                }
                if snapshot.show_target_customer_amount() {
                    div {
                        class: "summary-row",
                        span { class: "summary-label", "Target customer amount:" }
                        span { class: "summary-value", "{snapshot.target_customer_amount}" }
                    }
                }
                if is_team_change {
                    div {
                        class: "summary-row",
                        span { class: "summary-label", "Existing members kept:" }
                        span { class: "summary-value", "{kept_count}" }
                    }
                    div {
                        class: "summary-row",
                        span { class: "summary-label", "New members added:" }
                        span { class: "summary-value", "{added_count}" }
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    class: "back-button",
                    disabled: state().submit_in_flight,
                    onclick: move |_| {
                        if let Some(page) = back_page(&state()) {
                            dispatch.call(WizardAction::SetCurrentPage(page));
                        }
                    },
                    "Back"
                }
                button {
                    class: "submit-button",
                    disabled: state().submit_in_flight,
                    onclick: move |_| {
                        let snapshot = state();
                        spawn(async move {
                            let api = CrmClient::new();
                            submit_change_order(&snapshot, &api, &WebHost, move |action| {
                                dispatch.call(action)
                            })
                            .await;
                        });
                    },
                    if state().submit_in_flight {
                        "Submitting..."
                    } else {
                        "Submit"
                    }
                }
            }
        }
    }
}
