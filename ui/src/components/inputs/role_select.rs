use dioxus::prelude::*;

use crate::wizard::RoleOption;

#[derive(Props, PartialEq, Clone)]
pub struct RoleSelectProps {
    pub options: Vec<RoleOption>,
    pub selected: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

/// Dropdown over the role lookup. When the lookup failed to load it renders
/// with only the placeholder entry, which keeps the row incomplete.
#[component]
pub fn RoleSelect(props: RoleSelectProps) -> Element {
    let options = props.options;
    let selected = props.selected;
    let on_change = props.on_change;

    rsx! {
        select {
            class: "role-select",
            value: "{selected}",
            disabled: props.disabled,
            onchange: move |evt| {
                on_change.call(evt.value());
            },
            option {
                value: "",
                selected: selected.is_empty(),
                "Select a role"
            }
            for role in options {
                option {
                    value: "{role.value}",
                    selected: role.value == selected,
                    "{role.label}"
                }
            }
        }
    }
}
