use clap::{Parser, ValueEnum};
use restaurant_core::{
    Order, RestaurantConfig, RestaurantError,
    application::{PaymentProcessor, RestaurantManager},
    mocks::{CallLog, MockDatabase, MockNotification},
    notifiers::{EmailNotification, SmsNotification},
    payments::{CashStrategy, CreditCardStrategy, DigitalWalletStrategy},
    repositories::{MySqlDatabase, PostgreSqlDatabase},
    services::{RestaurantService, TightlyCoupledRestaurantService},
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "restaurant-demo",
    about = "Walks through the Dependency Inversion Principle with a restaurant order system"
)]
struct Cli {
    /// Section of the walkthrough to run
    #[arg(value_enum, default_value_t = Section::All)]
    section: Section,

    /// TOML file with `database`, `notification` and `payment` keys
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Database backend for the factory section (mysql, postgresql, mongodb)
    #[arg(long)]
    database: Option<String>,

    /// Notification channel for the factory section (email, sms, slack)
    #[arg(long)]
    notification: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Section {
    All,
    Problem,
    Injection,
    Factory,
    Strategy,
    Testing,
    Summary,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), RestaurantError> {
    let config = load_config(cli)?;
    let all = cli.section == Section::All;

    if all {
        print_separator("RESTAURANT MANAGEMENT SYSTEM - DIP DEMO");
        println!("High-level order processing should not depend on low-level details.");
        println!("Both should depend on abstractions.");
    }
    if all || cli.section == Section::Problem {
        demonstrate_problem();
    }
    if all || cli.section == Section::Injection {
        demonstrate_dependency_injection();
    }
    if all || cli.section == Section::Factory {
        demonstrate_factory(&config)?;
    }
    if all || cli.section == Section::Strategy {
        demonstrate_strategy(&config)?;
    }
    if all || cli.section == Section::Testing {
        demonstrate_testing();
    }
    if all || cli.section == Section::Summary {
        demonstrate_benefits();
    }
    if all {
        print_separator("DEMO COMPLETED");
        println!("Depend on abstractions, not concretions.");
    }

    Ok(())
}

/// File first, then environment, then command-line flags.
fn load_config(cli: &Cli) -> Result<RestaurantConfig, RestaurantError> {
    let mut config = match &cli.config {
        Some(path) => RestaurantConfig::load(path)?,
        None => RestaurantConfig::default(),
    }
    .apply_env_overrides();

    if let Some(database) = &cli.database {
        config.database = database.clone();
    }
    if let Some(notification) = &cli.notification {
        config.notification = notification.clone();
    }
    Ok(config)
}

fn print_separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}", "=".repeat(60));
}

fn print_sub_separator(title: &str) {
    println!("\n{}", "-".repeat(40));
    println!("  {}", title);
    println!("{}", "-".repeat(40));
}

fn demonstrate_problem() {
    print_sub_separator("PROBLEM: DIP violation");
    println!("The service below creates MySQL and e-mail handles itself.");

    let service = TightlyCoupledRestaurantService::new();
    service.process_order(&Order::new(1, "Nasi Gudeg Special", 35.00));

    println!("Switching database or channel means editing the service.");
    println!("It cannot be tested without the real collaborators.");
}

fn demonstrate_dependency_injection() {
    print_sub_separator("SOLUTION 1: Dependency injection");

    let service = RestaurantService::new(
        Arc::new(MySqlDatabase::new()),
        Arc::new(EmailNotification::new()),
    );
    service.process_order(&Order::new(2, "Sate Ayam Madura", 28.50));

    println!("\nSame service, different implementations:");
    let service = RestaurantService::new(
        Arc::new(PostgreSqlDatabase::new()),
        Arc::new(SmsNotification::new()),
    );
    service.process_order(&Order::new(3, "Rendang Padang", 42.00));
}

fn demonstrate_factory(config: &RestaurantConfig) -> Result<(), RestaurantError> {
    print_sub_separator("SOLUTION 2: Factory");

    let mut manager = RestaurantManager::new();
    if manager
        .process_order(&Order::new(0, "Early bird", 1.00))
        .is_err()
    {
        println!("Orders are refused until the manager is configured.");
    }

    manager.initialize_from_config(config)?;
    manager.process_order(&Order::new(4, "Gado-gado Jakarta", 22.00))?;
    println!("Configuration: {}", manager.configuration());

    println!("\nSwitching configuration at runtime:");
    manager.initialize("postgresql", "email")?;
    manager.process_order(&Order::new(5, "Bakso Malang", 18.50))?;
    println!("Configuration: {}", manager.configuration());

    Ok(())
}

fn demonstrate_strategy(config: &RestaurantConfig) -> Result<(), RestaurantError> {
    print_sub_separator("SOLUTION 3: Strategy");

    let mut order = Order::new(6, "Ayam Bakar Taliwang", 45.00);
    let mut processor = PaymentProcessor::new(Arc::new(CreditCardStrategy::new()));

    order.set_payment_info("credit_card", "1234567890123456");
    processor.process_order_payment(&order);

    println!("\nRuntime strategy switching:");
    processor.set_strategy(Arc::new(DigitalWalletStrategy::new()));
    order.set_payment_info("wallet", "wallet123");
    processor.process_order_payment(&order);

    processor.set_strategy(Arc::new(CashStrategy::new()));
    order.set_payment_info("cash", "");
    processor.process_order_payment(&order);

    if let Some(payment) = &config.payment {
        println!("\nConfigured payment method: {}", payment);
        let processor = PaymentProcessor::from_key(payment)?;
        processor.process_order_payment(&Order::new(7, "Es Cendol", 5.00));
    }

    Ok(())
}

fn demonstrate_testing() {
    print_sub_separator("TESTING: Mocks instead of real backends");

    let log = CallLog::new();
    let service = RestaurantService::new(
        Arc::new(MockDatabase::with_log(log.clone())),
        Arc::new(MockNotification::with_log(log.clone())),
    );
    service.process_order(&Order::new(999, "Test Order", 99.99));

    println!("Recorded calls: {:?}", log.calls());
}

fn demonstrate_benefits() {
    print_sub_separator("BENEFITS");
    println!("Flexibility: swap implementations without touching client code.");
    println!("Testability: inject mocks, no database or mail server needed.");
    println!("Extensibility: new backends only touch the factories.");
    println!("Maintainability: changes stay inside one adapter.");
}
