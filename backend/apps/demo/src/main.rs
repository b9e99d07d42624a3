//! Demo Entry Point
//!
//! Walks through client creation, authentication, the password policy and
//! basic account operations, printing each outcome.
//! Uses `anyhow` for startup errors; library errors are converted from
//! `kernel::error::AppError`.

use account::BankAccount;
use auth::{
    AuthConfig, Authenticatable, CorporateClient, IndividualClient, SignInAttempts, SignInOutcome,
};
use kernel::error::app_error::AppError;
use platform::password::policy_violations;
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn mark(ok: bool) -> &'static str {
    if ok { "✓" } else { "✗" }
}

fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "demo=info,auth=info,account=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AuthConfig::from_env()?;
    tracing::info!(max_attempts = config.max_attempts, "Configuration loaded");

    println!("=== Banking demo ===\n");

    individual_client_demo(&config)?;
    corporate_client_demo()?;
    rejected_identifier_demo();
    password_policy_demo()?;
    account_demo()?;

    println!("\n=== Demo finished ===");
    Ok(())
}

fn individual_client_demo(config: &AuthConfig) -> anyhow::Result<()> {
    println!("1. Individual client");
    let client = IndividualClient::new(1, "João da Silva", "123.456.789-09", "Senh@Segura123")
        .map_err(AppError::from)?;
    println!("   {} created: {} ({})", mark(true), client.name(), client.national_id());

    let ok = client.authenticate("123.456.789-09", "Senh@Segura123");
    println!("   {} correct credentials accepted", mark(ok));

    let rejected = !client.authenticate("123.456.789-09", "senhaerrada");
    println!("   {} wrong password rejected", mark(rejected));

    println!("\n2. Sign-in attempts (limit {})", config.max_attempts);
    let mut attempts = SignInAttempts::new(config);
    for password in ["Errada@Senha01", "Errada@Senha02", "Errada@Senha03", "Senh@Segura123"] {
        match attempts.attempt(&client, "12345678909", password) {
            SignInOutcome::Authenticated => println!("   signed in"),
            SignInOutcome::Rejected { remaining } => {
                println!("   rejected, {remaining} attempt(s) left")
            }
            SignInOutcome::Locked => println!("   locked"),
        }
    }
    Ok(())
}

fn corporate_client_demo() -> anyhow::Result<()> {
    println!("\n3. Corporate client");
    let client = CorporateClient::new(
        1,
        "Tech Solutions Ltda",
        "11.222.333/0001-81",
        "Empres@Segura456",
    )
    .map_err(AppError::from)?;
    println!(
        "   {} created: {} ({})",
        mark(true),
        client.legal_name(),
        client.national_id()
    );

    let ok = client.authenticate("11222333000181", "Empres@Segura456");
    println!("   {} unformatted identifier accepted at sign-in", mark(ok));

    match CorporateClient::new(2, "Tech Solutions Ltda", "11222333000181", "Empres@Segura456") {
        Ok(_) => println!("   ✗ unformatted identifier accepted at creation"),
        Err(e) => println!("   ✓ unformatted identifier refused at creation: {e}"),
    }
    Ok(())
}

fn rejected_identifier_demo() {
    println!("\n4. Invalid individual identifier");
    match IndividualClient::new(2, "Maria Santos", "111.111.111-11", "Senh@Forte789") {
        Ok(_) => println!("   ✗ repeated digits accepted"),
        Err(e) => println!("   ✓ rejected: {}", AppError::from(e)),
    }
}

fn password_policy_demo() -> anyhow::Result<()> {
    println!("\n5. Password policy");
    let client = IndividualClient::new(3, "Pedro Oliveira", "987.654.321-00", "S3nh@Fort3Valid@")
        .map_err(AppError::from)?;

    for candidate in ["S3nh@Fort3Valid@", "Sen@1", "SenhaForte123", "Password@123"] {
        if client.is_strong_password(candidate) {
            println!("   {candidate:<18} accepted");
        } else {
            let reasons: Vec<String> = policy_violations(candidate)
                .iter()
                .map(ToString::to_string)
                .collect();
            println!("   {candidate:<18} rejected: {}", reasons.join("; "));
        }
    }
    Ok(())
}

fn account_demo() -> anyhow::Result<()> {
    println!("\n6. Bank account");
    let mut account =
        BankAccount::create("João da Silva", Decimal::new(1000, 0)).map_err(AppError::from)?;
    println!("   {} opened: {}", mark(true), account);

    let deposited = account.deposit(Decimal::new(500, 0));
    println!(
        "   {} deposit of 500.00, balance {:.2}",
        mark(deposited),
        account.balance()
    );

    let withdrawn = account.withdraw(Decimal::new(200, 0));
    println!(
        "   {} withdrawal of 200.00, balance {:.2}",
        mark(withdrawn),
        account.balance()
    );

    let refused = !account.withdraw(Decimal::new(10_000, 0));
    println!(
        "   {} withdrawal of 10000.00 refused, balance {:.2}",
        mark(refused),
        account.balance()
    );

    println!("   monthly fee: {:.2}", account.monthly_fee());
    Ok(())
}
