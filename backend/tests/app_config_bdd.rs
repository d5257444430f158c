//! Behaviour tests for environment-driven configuration.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use mockable::MockEnv;
use novashield_backend::config::{AppConfig, ConfigError};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

struct ConfigWorld {
    vars: RefCell<HashMap<String, String>>,
    outcome: RefCell<Option<Result<AppConfig, ConfigError>>>,
}

impl ConfigWorld {
    fn new() -> Self {
        Self {
            vars: RefCell::new(HashMap::new()),
            outcome: RefCell::new(None),
        }
    }

    fn set(&self, name: &str, value: &str) {
        self.vars
            .borrow_mut()
            .insert(name.to_owned(), value.to_owned());
    }

    fn evaluate(&self) {
        let vars = self.vars.borrow().clone();
        let mut env = MockEnv::new();
        env.expect_string()
            .times(0..)
            .returning(move |key| vars.get(key).cloned());
        *self.outcome.borrow_mut() = Some(AppConfig::from_env(&env));
    }

    fn with_config<F>(&self, f: F)
    where
        F: FnOnce(&AppConfig),
    {
        let outcome = self.outcome.borrow();
        let config = outcome
            .as_ref()
            .expect("evaluation result")
            .as_ref()
            .expect("expected configuration to load");
        f(config);
    }

    fn with_error<F>(&self, f: F)
    where
        F: FnOnce(&ConfigError),
    {
        let outcome = self.outcome.borrow();
        let error = match outcome.as_ref().expect("evaluation result") {
            Ok(_) => panic!("expected configuration to fail"),
            Err(error) => error,
        };
        f(error);
    }
}

#[fixture]
fn world() -> ConfigWorld {
    ConfigWorld::new()
}

#[given("the mandatory mail settings are present")]
fn the_mandatory_mail_settings_are_present(world: &ConfigWorld) {
    world.set("MAIL_SERVER", "smtp.example.com");
    world.set("MAIL_USERNAME", "bot@novashield.test");
    world.set("MAIL_PASSWORD", "hunter2");
    world.set("ADMIN_EMAIL", "office@novashield.test");
}

#[given("{name} is set to {value}")]
fn variable_is_set(world: &ConfigWorld, name: String, value: String) {
    world.set(&name, &value);
}

#[given("{name} is unset")]
fn variable_is_unset(world: &ConfigWorld, name: String) {
    world.vars.borrow_mut().remove(&name);
}

#[when("the configuration is loaded")]
fn the_configuration_is_loaded(world: &ConfigWorld) {
    world.evaluate();
}

#[then("the configuration load succeeds")]
fn the_configuration_load_succeeds(world: &ConfigWorld) {
    world.with_config(|_| {});
}

#[then("the relay port is {port}")]
fn the_relay_port_is(world: &ConfigWorld, port: u16) {
    world.with_config(|config| assert_eq!(config.smtp.port(), port));
}

#[then("the relay timeout is {seconds} seconds")]
fn the_relay_timeout_is(world: &ConfigWorld, seconds: u64) {
    world.with_config(|config| {
        assert_eq!(config.smtp.timeout(), Duration::from_secs(seconds));
    });
}

#[then("the listening port is {port}")]
fn the_listening_port_is(world: &ConfigWorld, port: u16) {
    world.with_config(|config| assert_eq!(config.bind_addr.port(), port));
}

#[then("the configuration load fails because {name} is missing")]
fn configuration_fails_missing(world: &ConfigWorld, name: String) {
    world.with_error(|error| {
        assert!(
            matches!(error, ConfigError::MissingEnv { name: actual } if *actual == name),
            "unexpected error: {error}"
        );
    });
}

#[then("the configuration load fails because {name} is invalid")]
fn configuration_fails_invalid(world: &ConfigWorld, name: String) {
    world.with_error(|error| {
        assert!(
            matches!(error, ConfigError::InvalidEnv { name: actual, .. } if *actual == name),
            "unexpected error: {error}"
        );
    });
}

#[scenario(
    path = "tests/features/app_config.feature",
    name = "Optional settings fall back to defaults"
)]
fn optional_settings_fall_back_to_defaults(world: ConfigWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/app_config.feature",
    name = "Optional settings can be overridden"
)]
fn optional_settings_can_be_overridden(world: ConfigWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/app_config.feature",
    name = "A missing admin address is rejected"
)]
fn missing_admin_address_is_rejected(world: ConfigWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/app_config.feature",
    name = "A non-numeric relay port is rejected"
)]
fn non_numeric_relay_port_is_rejected(world: ConfigWorld) {
    drop(world);
}
