use crate::{MIN_POLL_INTERVAL, PollerSettings};

use std::time::Duration;

use googletest::prelude::*;

#[test]
fn given_zero_periods_when_clamped_then_raised_to_minimum() {
    let settings = PollerSettings {
        refresh_interval: Duration::ZERO,
        tick_interval: Duration::ZERO,
        recovery_delay: Duration::ZERO,
    };

    let clamped = settings.clamped();

    assert_that!(clamped.refresh_interval, eq(MIN_POLL_INTERVAL));
    assert_that!(clamped.tick_interval, eq(MIN_POLL_INTERVAL));
    assert_that!(clamped.recovery_delay, eq(Duration::ZERO));
}

#[test]
fn given_default_settings_when_clamped_then_unchanged() {
    let settings = PollerSettings::default();

    assert_that!(settings.clamped(), eq(settings));
}
