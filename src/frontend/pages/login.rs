//! Login page for Inmobiliaria Mendoza

use futures_util::future::{AbortHandle, abortable};
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use crate::frontend::components::{
    AlertStack, FormInput, LOGO_SRC, Nav, PasswordInput, SubmitButton,
};
use crate::frontend::timers::TimerRegistry;
use crate::login::{Command, LoginController, TimerId};
use crate::services::{Authenticator, SimulatedAuthenticator};
use crate::types::{Credentials, Field};

/// Everything the view owns besides the reactive state. All handles are
/// arena ids, so the struct is `Copy` and can be moved into callbacks.
#[derive(Clone, Copy)]
struct LoginRuntime {
    state: RwSignal<LoginController>,
    timers: StoredValue<TimerRegistry, LocalStorage>,
    in_flight: StoredValue<Option<AbortHandle>, LocalStorage>,
    authenticator: StoredValue<Rc<dyn Authenticator>, LocalStorage>,
    email_input: NodeRef<Input>,
}

impl LoginRuntime {
    /// Run an operation on the controller and carry out what it asks for.
    /// Does nothing once the view has been disposed.
    fn apply(self, operation: impl FnOnce(&mut LoginController) -> Vec<Command>) {
        if let Some(commands) = self.state.try_update(operation) {
            self.dispatch(commands);
        }
    }

    fn dispatch(self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::Arm { timer, after } => {
                    self.timers.try_update_value(|timers| {
                        timers.arm(timer, after, move || self.fire(timer))
                    });
                }
                Command::Authenticate(credentials) => self.authenticate(credentials),
                Command::FocusEmail => self.focus_email(),
            }
        }
    }

    fn fire(self, timer: TimerId) {
        self.timers.try_update_value(|timers| timers.release(timer));
        self.apply(|controller| controller.timer_fired(timer));
    }

    fn authenticate(self, credentials: Credentials) {
        let Some(authenticator) = self.authenticator.try_with_value(Rc::clone) else {
            return;
        };

        let (call, handle) = abortable(authenticator.authenticate(credentials));
        self.in_flight.try_update_value(|slot| *slot = Some(handle));

        spawn_local(async move {
            match call.await {
                Ok(outcome) => {
                    self.in_flight.try_update_value(|slot| *slot = None);
                    self.apply(|controller| controller.resolve(outcome));
                }
                Err(_) => log::debug!("Authentication aborted"),
            }
        });
    }

    fn focus_email(self) {
        if let Some(input) = self.email_input.get_untracked() {
            let _ = input.focus();
        }
    }

    /// Cancel timers and the pending call so nothing touches disposed state
    fn teardown(self) {
        self.timers.try_update_value(|timers| {
            if timers.is_armed(TimerId::LockoutCooldown) {
                log::info!("Login view closed during lockout, cancelling cool-down");
            }
            timers.clear();
        });
        self.in_flight.try_update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        });
    }
}

/// Login page component
#[component]
pub fn LoginPage(
    /// Defaults to [`SimulatedAuthenticator`]
    #[prop(optional)]
    authenticator: Option<Rc<dyn Authenticator>>,
) -> impl IntoView {
    let authenticator =
        authenticator.unwrap_or_else(|| Rc::new(SimulatedAuthenticator::default()));

    let runtime = LoginRuntime {
        state: RwSignal::new(LoginController::default()),
        timers: StoredValue::new_local(TimerRegistry::new()),
        in_flight: StoredValue::new_local(None),
        authenticator: StoredValue::new_local(authenticator),
        email_input: NodeRef::new(),
    };
    let state = runtime.state;

    Effect::new(move |_| {
        let commands = state.with_untracked(|controller| controller.mount());
        runtime.dispatch(commands);
    });

    let escape_listener = window_event_listener(leptos::ev::keydown, move |ev| {
        let key = ev.key();
        runtime.apply(|controller| controller.window_key_down(&key));
    });

    on_cleanup(move || {
        escape_listener.remove();
        runtime.teardown();
    });

    let blocked = Signal::derive(move || state.with(|c| c.is_blocked()));
    let notifications =
        Signal::derive(move || state.with(|c| c.alerts().iter().cloned().collect::<Vec<_>>()));
    let email = Signal::derive(move || state.with(|c| c.credentials().email.clone()));
    let password = Signal::derive(move || state.with(|c| c.credentials().password.clone()));
    let email_error = Signal::derive(move || state.with(|c| c.errors().email));
    let password_error = Signal::derive(move || state.with(|c| c.errors().password));
    let password_visible = Signal::derive(move || state.with(|c| c.password_visible()));
    let submit_label = Signal::derive(move || state.with(|c| c.submit_label()));
    let attempts_warning = move || state.with(|c| c.attempts_warning());

    let on_field = move |field: Field| {
        Callback::new(move |value: String| {
            state.update(|controller| controller.set_field(field, &value));
        })
    };
    let on_key = Callback::new(move |key: String| {
        runtime.apply(|controller| controller.field_key_down(&key));
    });
    let on_toggle = Callback::new(move |_: ()| state.update(|c| c.toggle_password_visibility()));
    let on_submit = Callback::new(move |_: ()| runtime.apply(|controller| controller.submit()));

    view! {
        <div class="login-container">
            <AlertStack notifications=notifications/>

            <Nav/>

            <div class="login-page">
                <div class="login-modal">
                    <div class="login-header">
                        <div class="logo-circle">
                            <img src=LOGO_SRC alt="Logo" class="modal-logo"/>
                        </div>
                        <h1 class="login-title">"Iniciar Sesión"</h1>
                        <p class="login-subtitle">"Accede a tu cuenta para gestionar propiedades"</p>
                    </div>

                    {move || attempts_warning().map(|warning| view! {
                        <div class="warning-alert">
                            <i class="fas fa-info-circle"></i>
                            " "
                            {warning}
                        </div>
                    })}

                    <div class="login-form">
                        <FormInput
                            name="email"
                            placeholder="Correo Electrónico"
                            input_type="email".to_string()
                            icon="fa-envelope"
                            value=email
                            error=email_error
                            disabled=blocked
                            on_input=on_field(Field::Email)
                            on_key=on_key
                            node_ref=runtime.email_input
                        />
                        <PasswordInput
                            value=password
                            error=password_error
                            disabled=blocked
                            visible=password_visible
                            on_input=on_field(Field::Password)
                            on_key=on_key
                            on_toggle=on_toggle
                        />

                        <SubmitButton label=submit_label on_click=on_submit/>

                        <div class="login-footer">
                            <a href="/recuperar" class="footer-link">
                                <i class="fas fa-key"></i>" ¿Olvidaste tu contraseña?"
                            </a>
                            <p class="register-text">
                                "¿No tienes cuenta? "
                                <a href="/registro" class="register-link">"Regístrate aquí"</a>
                            </p>
                            <a href="/" class="back-link">
                                <i class="fas fa-arrow-left"></i>" Volver al inicio"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
