//! Registration page: profile fields plus the class schedule editor.

use api::{ScheduleEntry, SignupRequest, CAMPUS_MODE};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{use_auth, use_signup};

use crate::Route;

fn new_entry() -> ScheduleEntry {
    ScheduleEntry {
        mode: CAMPUS_MODE.to_string(),
        ..Default::default()
    }
}

/// Register page component.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let signup = use_signup();
    let loading = signup.loading;

    let mut uni_id = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut gender = use_signal(String::new);
    let mut role = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut schedule = use_signal(|| vec![new_entry()]);

    // If already signed in, go straight to the chat
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Chat {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        signup.submit(SignupRequest {
            uni_id: uni_id(),
            first_name: first_name(),
            last_name: last_name(),
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
            gender: gender(),
            role: role(),
            department: department(),
            title: title(),
            schedule: schedule(),
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-page__title", "Create Account" }
            p { class: "auth-page__subtitle", "Sign up for CampusChat" }

            form {
                onsubmit: handle_register,
                class: "auth-form auth-form--wide",

                Input {
                    class: "w-full",
                    r#type: "text",
                    placeholder: "University ID",
                    value: uni_id(),
                    oninput: move |evt: FormEvent| uni_id.set(evt.value()),
                }

                div {
                    class: "form-row",
                    Input {
                        r#type: "text",
                        placeholder: "First name",
                        value: first_name(),
                        oninput: move |evt: FormEvent| first_name.set(evt.value()),
                    }
                    Input {
                        r#type: "text",
                        placeholder: "Last name",
                        value: last_name(),
                        oninput: move |evt: FormEvent| last_name.set(evt.value()),
                    }
                }

                Input {
                    class: "w-full",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                div {
                    class: "form-row",
                    Input {
                        r#type: "password",
                        placeholder: "Password (min 6 characters)",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    Input {
                        r#type: "password",
                        placeholder: "Confirm password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }
                }

                div {
                    class: "form-row",
                    select {
                        class: "select",
                        value: "{gender}",
                        onchange: move |evt| gender.set(evt.value()),
                        option { value: "", "Select gender" }
                        option { value: "male", "Male" }
                        option { value: "female", "Female" }
                    }
                    select {
                        class: "select",
                        value: "{role}",
                        onchange: move |evt| role.set(evt.value()),
                        option { value: "", "Select role" }
                        option { value: "student", "Student" }
                        option { value: "lecturer", "Lecturer" }
                    }
                }

                div {
                    class: "form-row",
                    Input {
                        r#type: "text",
                        placeholder: "Department",
                        value: department(),
                        oninput: move |evt: FormEvent| department.set(evt.value()),
                    }
                    Input {
                        r#type: "text",
                        placeholder: "Title (e.g. Mr, Dr)",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                }

                div {
                    class: "schedule",
                    Label { class: "schedule__label", "Class schedule" }

                    for (i, entry) in schedule().into_iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "schedule-entry",

                            Input {
                                class: "schedule-entry__subject",
                                r#type: "text",
                                placeholder: "Subject",
                                value: "{entry.subject}",
                                oninput: move |evt: FormEvent| schedule.write()[i].subject = evt.value(),
                            }

                            select {
                                class: "select",
                                value: "{entry.mode}",
                                onchange: move |evt| schedule.write()[i].mode = evt.value(),
                                option { value: "campus", "On campus" }
                                option { value: "online", "Online" }
                            }

                            if entry.mode == CAMPUS_MODE {
                                Input {
                                    class: "schedule-entry__room",
                                    r#type: "text",
                                    placeholder: "Room",
                                    value: "{entry.room}",
                                    oninput: move |evt: FormEvent| schedule.write()[i].room = evt.value(),
                                }
                            }

                            Input {
                                r#type: "time",
                                value: "{entry.start_time}",
                                oninput: move |evt: FormEvent| schedule.write()[i].start_time = evt.value(),
                            }
                            Input {
                                r#type: "time",
                                value: "{entry.end_time}",
                                oninput: move |evt: FormEvent| schedule.write()[i].end_time = evt.value(),
                            }

                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| { schedule.write().remove(i); },
                                "Remove"
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Outline,
                        class: "schedule__add",
                        onclick: move |_| schedule.write().push(new_entry()),
                        "Add schedule entry"
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-page__footer",
                "Already have an account? "
                Link {
                    class: "auth-page__link",
                    to: Route::Login {},
                    "Sign in"
                }
            }
        }
    }
}
