//! Interactive prompts built on `dialoguer`.

use dialoguer::{Confirm, Input, Password};
use studentdesk_auth::Session;
use studentdesk_client::ImageUpload;
use studentdesk_core::AppError;
use studentdesk_models::{Student, StudentField};
use tracing::warn;

use super::render::{render_errors, render_notification};
use crate::modules::auth::{AuthService, LoginForm};
use crate::modules::students::{StudentForm, SubmitOutcome};
use crate::state::AppState;

const LOGIN_ATTEMPTS: usize = 3;

pub fn print_notifications(state: &AppState) {
    for notification in state.notifier.drain() {
        println!("{}", render_notification(&notification));
    }
}

/// Signs in, prompting for whatever was not supplied.
pub async fn login(
    state: &AppState,
    session: &mut Session,
    email: Option<String>,
    password: Option<String>,
) -> Result<(), AppError> {
    let mut form = LoginForm::default();
    let mut email = email;
    let mut password = password;

    for _ in 0..LOGIN_ATTEMPTS {
        form.email = match email.take() {
            Some(email) => email,
            None => Input::<String>::new()
                .with_prompt("Email")
                .with_initial_text(form.email.clone())
                .interact_text()?,
        };
        form.password = match password.take() {
            Some(password) => password,
            None => Password::new().with_prompt("Password").interact()?,
        };

        let result = AuthService::login(state, session, &mut form).await;
        print_notifications(state);
        if result.is_ok() {
            return Ok(());
        }
    }

    session.require().map(|_| ())
}

/// Asks for every editable field until it passes validation.
pub fn fill_form(form: &mut StudentForm, existing: &[Student]) -> Result<(), AppError> {
    for field in form.editable_fields() {
        loop {
            let value = Input::<String>::new()
                .with_prompt(prompt_label(field))
                .with_initial_text(form.value(field).to_string())
                .allow_empty(true)
                .interact_text()?;

            match form.set_field(field, value, Some(existing)) {
                None => break,
                Some(message) => println!("  {}", message),
            }
        }
    }
    Ok(())
}

fn prompt_label(field: StudentField) -> String {
    match field {
        StudentField::DateAdmission => format!("{} (YYYY-MM-DD)", field.label()),
        _ => field.label().to_string(),
    }
}

/// Optionally uploads an avatar chosen by path.
pub async fn ask_avatar(state: &AppState, form: &mut StudentForm) -> Result<(), AppError> {
    let path = Input::<String>::new()
        .with_prompt("Avatar image path (leave empty to skip)")
        .allow_empty(true)
        .interact_text()?;
    let path = path.trim();
    if path.is_empty() {
        return Ok(());
    }

    match ImageUpload::from_path(path).await {
        Ok(image) => {
            if let Err(err) = form.attach_avatar(state, &image).await {
                warn!(error = %err.error, "Avatar not attached");
            }
        }
        Err(err) => state
            .notifier
            .error(format!("Could not read {}: {}", path, err)),
    }
    print_notifications(state);
    Ok(())
}

/// Runs the form until it saves or the operator gives up.
pub async fn edit_until_saved(
    state: &AppState,
    form: &mut StudentForm,
    existing: &[Student],
) -> Result<Option<Student>, AppError> {
    fill_form(form, existing)?;
    ask_avatar(state, form).await?;

    loop {
        let outcome = form.submit(state).await;
        print_notifications(state);
        match outcome {
            Ok(SubmitOutcome::Saved(student)) => return Ok(Some(student)),
            Ok(SubmitOutcome::Invalid(result)) => print!("{}", render_errors(&result)),
            Err(_) => {}
        }

        if !confirm("Edit the form and try again?", true)? {
            return Ok(None);
        }
        fill_form(form, existing)?;
    }
}

pub fn confirm(prompt: &str, default: bool) -> Result<bool, AppError> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
