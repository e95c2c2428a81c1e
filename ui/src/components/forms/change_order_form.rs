use dioxus::prelude::*;

use crate::components::inputs::{InputType, ValidatedInput};
use crate::services::client::CrmClient;
use crate::services::host::{HostBridge, ToastSeverity, WebHost};
use crate::wizard::{
    next_page, orchestrator::load_order_team, ChangeOrderType, WizardAction, WizardState,
    ERROR_TITLE,
};

#[derive(Props, PartialEq, Clone)]
pub struct ChangeOrderFormProps {
    pub state: Signal<WizardState>,
    pub dispatch: EventHandler<WizardAction>,
}

/// Page 1: pick the change-order type. Contract Amount Change additionally
/// asks for the target customer amount.
#[component]
pub fn ChangeOrderForm(props: ChangeOrderFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    let handle_next = move |_| {
        let snapshot = state();
        match next_page(&snapshot) {
            Ok(advance) => {
                dispatch.call(WizardAction::SetCurrentPage(advance.to));
                if advance.fetch_team {
                    let record_id = snapshot.record_id.clone();
                    spawn(async move {
                        let api = CrmClient::new();
                        load_order_team(&api, &WebHost, &record_id, move |action| {
                            dispatch.call(action)
                        })
                        .await;
                    });
                }
            }
            Err(validation) => {
                WebHost.notify(ERROR_TITLE, &validation.to_string(), ToastSeverity::Error);
            }
        }
    };

    rsx! {
        div {
            class: "wizard-form change-order-page",

            h2 {
                class: "form-title",
                "Select Change Order Type"
            }

            div {
                class: "radio-section",
                for change_type in ChangeOrderType::ALL {
                    label {
                        class: "radio-option",
                        input {
                            r#type: "radio",
                            name: "change-order-type",
                            value: "{change_type.label()}",
                            checked: state().change_order_type == Some(change_type),
                            onchange: move |_| {
                                dispatch.call(WizardAction::SelectChangeOrderType(change_type));
                            }
                        }
                        "{change_type.label()}"
                    }
                }
            }

            if state().show_target_customer_amount() {
                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        "Target Customer Amount:"
                    }
                    ValidatedInput {
                        value: state().target_customer_amount,
                        placeholder: "Enter the target customer amount".to_string(),
                        input_type: InputType::Number,
                        input_class: "input-field amount-input".to_string(),
                        disabled: state().is_loading,
                        on_change: move |amount: String| {
                            dispatch.call(WizardAction::SetTargetCustomerAmount(amount));
                        }
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    class: "next-button",
                    disabled: state().is_loading,
                    onclick: handle_next,
                    "Next"
                }
            }
        }
    }
}
