//! End-to-end flows through the public API

use restaurant_core::application::{PaymentProcessor, RestaurantManager};
use restaurant_core::factories::{DatabaseFactory, NotificationFactory, PaymentStrategyFactory};
use restaurant_core::mocks::{Call, CallLog, MockDatabase, MockNotification};
use restaurant_core::services::{RestaurantService, TightlyCoupledRestaurantService};
use restaurant_core::{Order, RestaurantConfig, RestaurantError};
use std::io::Write;
use std::sync::Arc;

#[test]
fn test_every_factory_pair_composes() {
    let databases = [("mysql", "MySQL"), ("postgresql", "PostgreSQL"), ("mongodb", "MongoDB")];
    let notifiers = [("email", "Email"), ("sms", "SMS"), ("slack", "Slack")];

    for (db_key, db_label) in databases {
        for (notif_key, notif_label) in notifiers {
            let service = RestaurantService::new(
                DatabaseFactory::create(db_key).unwrap(),
                NotificationFactory::create(notif_key).unwrap(),
            );
            service.process_order(&Order::new(10, "Soto Betawi", 19.0));

            assert_eq!(service.configuration(), format!("{} + {}", db_label, notif_label));
        }
    }
}

#[test]
fn test_postgresql_and_sms_label() {
    let service = RestaurantService::new(
        DatabaseFactory::create("postgresql").unwrap(),
        NotificationFactory::create("sms").unwrap(),
    );
    assert_eq!(service.configuration(), "PostgreSQL + SMS");
}

#[test]
fn test_manager_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "database = \"mongodb\"\nnotification = \"slack\"\n").unwrap();

    let config = RestaurantConfig::load(file.path()).unwrap();
    let mut manager = RestaurantManager::new();
    manager.initialize_from_config(&config).unwrap();

    manager
        .process_order(&Order::new(4, "Gado-gado Jakarta", 22.00))
        .unwrap();
    assert_eq!(manager.configuration(), "MongoDB + Slack");
}

#[test]
fn test_manager_rejects_unknown_keys_from_config() {
    let config = RestaurantConfig::new("mysql", "carrier-pigeon");
    let mut manager = RestaurantManager::new();

    let err = manager.initialize_from_config(&config).unwrap_err();

    assert!(matches!(err, RestaurantError::UnknownNotification(ref key) if key == "carrier-pigeon"));
    assert!(!manager.is_initialized());
}

#[test]
fn test_mocks_replace_real_backends() {
    let log = CallLog::new();
    let database = MockDatabase::with_log(log.clone());
    let service = RestaurantService::new(
        Arc::new(database.clone()),
        Arc::new(MockNotification::with_log(log.clone())),
    );

    service.process_order(&Order::new(999, "Test Order", 99.99));
    service.process_order(&Order::new(1000, "Test Order 2", 1.0));

    assert_eq!(
        log.calls(),
        vec![
            Call::Save(999),
            Call::Send("Order 999 processed successfully!".to_string()),
            Call::Save(1000),
            Call::Send("Order 1000 processed successfully!".to_string()),
        ]
    );
    assert_eq!(database.saved_orders()[1].description(), "Test Order 2");
}

#[test]
fn test_payment_method_follows_order() {
    let mut order = Order::new(6, "Ayam Bakar Taliwang", 45.00);
    order.set_payment_info("credit_card", "1234567890123456");

    let mut processor = PaymentProcessor::new(PaymentStrategyFactory::create("cash").unwrap());
    processor.select_for_order(&order).unwrap();

    assert_eq!(processor.current_strategy(), "Credit Card");
    assert!(processor.process_order_payment(&order));

    order.set_payment_info("credit_card", "4111");
    assert!(!processor.process_order_payment(&order));
}

#[test]
fn test_before_and_after_agree_on_mysql_lookup() {
    let before = TightlyCoupledRestaurantService::new();
    let after = RestaurantService::new(
        DatabaseFactory::create("mysql").unwrap(),
        NotificationFactory::create("email").unwrap(),
    );

    assert_eq!(before.get_order(12), after.get_order(12));
}
