use dioxus::prelude::*;
use store::{Field, Gender, Profile};

/// One input per profile field, bound field-by-field.
///
/// Shared by the create form and the edit dialog. `id_prefix` keeps element
/// ids unique when both are on screen.
#[component]
pub fn ProfileFields(
    id_prefix: String,
    draft: Profile,
    on_input: EventHandler<(Field, String)>,
) -> Element {
    rsx! {
        for field in Field::ALL {
            div {
                key: "{id_prefix}-{field.key()}",
                class: "mb-3",
                FieldInput {
                    id: format!("{id_prefix}-{}", field.key()),
                    field: field,
                    value: draft.get(field),
                    on_input: on_input,
                }
            }
        }
    }
}

#[component]
fn FieldInput(
    id: String,
    field: Field,
    value: String,
    on_input: EventHandler<(Field, String)>,
) -> Element {
    let placeholder = field.label();

    match field {
        Field::Gender => rsx! {
            select {
                id: "{id}",
                class: "form-select neumorphic",
                value: "{value}",
                onchange: move |evt: FormEvent| on_input.call((field, evt.value())),
                for gender in Gender::ALL {
                    option {
                        key: "{gender.as_str()}",
                        value: gender.as_str(),
                        selected: gender.as_str() == value,
                        {gender.label()}
                    }
                }
            }
        },
        Field::Address => rsx! {
            textarea {
                id: "{id}",
                class: "form-control neumorphic",
                placeholder: placeholder,
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call((field, evt.value())),
            }
        },
        _ => {
            let input_type = match field {
                Field::Email => "email",
                Field::Phone => "tel",
                Field::Birthdate => "date",
                _ => "text",
            };
            rsx! {
                input {
                    id: "{id}",
                    class: "form-control neumorphic",
                    r#type: input_type,
                    placeholder: placeholder,
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_input.call((field, evt.value())),
                }
            }
        }
    }
}
