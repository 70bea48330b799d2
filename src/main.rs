use anyhow::{bail, Result};
use signup_form::api::HttpRegistrationEndpoint;
use signup_form::config::Config;
use signup_form::form::{Field, SignUpController, SignUpView, SubmissionStatus};
use signup_form::i18n::{CatalogValidator, LocaleSwitch};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("signup_form=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if !(5..=6).contains(&args.len()) {
        bail!(
            "Usage: {} <username> <email> <password> <repeat-password> [locale]",
            args.first().map(String::as_str).unwrap_or("signup")
        );
    }

    let catalog = CatalogValidator::validate_registry();
    if !catalog.warnings.is_empty() {
        warn!("Locale catalog warnings: {:?}", catalog.warnings);
    }
    if !catalog.errors.is_empty() {
        warn!("Locale catalog errors: {:?}", catalog.errors);
    }

    let config = Config::from_env()?;
    let locale = LocaleSwitch::new(config.default_locale);
    if let Some(code) = args.get(5) {
        locale.set_locale_code(code)?;
    }

    let endpoint = HttpRegistrationEndpoint::from_config(&config)?;
    info!("Registering against {}", endpoint.url());

    let mut controller = SignUpController::new(locale);
    for (field, value) in Field::ALL.into_iter().zip(&args[1..5]) {
        controller.set_field(field, value.as_str());
    }

    if !controller.submit(&endpoint).await {
        print_view(&controller.view());
        bail!("Form cannot be submitted");
    }

    print_view(&controller.view());
    check_outcome(&controller)
}

/// Anything short of an accepted registration is a non-zero exit.
fn check_outcome(controller: &SignUpController) -> Result<()> {
    match controller.status() {
        SubmissionStatus::Succeeded => Ok(()),
        _ if controller.field_errors().is_empty() => {
            bail!("Registration failed, try again later")
        }
        _ => bail!(
            "Registration rejected with {} field error(s)",
            controller.field_errors().len()
        ),
    }
}

fn print_view(view: &SignUpView) {
    match view {
        SignUpView::Confirmation(message) => println!("{}", message),
        SignUpView::Form(form) => {
            println!("== {} ==", form.heading);
            for input in form.inputs.iter().filter(|input| input.is_invalid()) {
                println!("{}: {}", input.label, input.help.as_deref().unwrap_or_default());
            }
        }
    }
}
