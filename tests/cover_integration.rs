// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end tests for the bind -> read -> command cycle and the shared
//! refresh throttle, driven through the public API only.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use dpcover::inventory::{CodeDescriptor, DeviceInventory, IntegerSpec};
use dpcover::refresh::{RefreshOutcome, RefreshThrottle, ScopeId};
use dpcover::types::{DeviceCategory, DpValue, Position};
use dpcover::{CommandError, Cover, CoverOperation, CoverState, Error};
use tokio::time::Instant;

type Status = HashMap<String, DpValue>;

fn status_of(entries: &[(&str, DpValue)]) -> Status {
    entries
        .iter()
        .map(|(code, value)| ((*code).to_string(), value.clone()))
        .collect()
}

// ============================================================================
// Boolean-instruction devices (Kogan blind driver, garage doors)
// ============================================================================

mod boolean_instruction {
    use super::*;

    /// A Kogan-style blind: boolean `switch_1` plus percent codes.
    fn kogan_blind() -> DeviceInventory {
        let mut inventory = DeviceInventory::new();
        inventory.insert_function("switch_1", CodeDescriptor::boolean());
        inventory.insert_function(
            "percent_control",
            CodeDescriptor::integer(IntegerSpec::new(0, 100)),
        );
        inventory.insert_status(
            "percent_state",
            CodeDescriptor::integer(IntegerSpec::new(0, 100)),
        );
        inventory
    }

    #[test]
    fn open_emits_instruction_then_position_write() {
        let covers = Cover::bind_category(DeviceCategory::Cl, &kogan_blind()).unwrap();
        assert_eq!(covers.len(), 1, "only the switch_1 description applies");
        let cover = &covers[0];
        let status = Status::new();

        let batch = cover.open_command(&status).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.pairs()[0].code, "switch_1");
        assert_eq!(batch.pairs()[0].value, DpValue::Bool(true));
        assert_eq!(batch.pairs()[1].code, "percent_control");
        // Fully open on the reversed vendor percent scale is raw 0.
        assert_eq!(batch.pairs()[1].value, DpValue::Integer(0));
    }

    #[test]
    fn boolean_key_gives_open_close_but_no_stop() {
        let covers = Cover::bind_category(DeviceCategory::Cl, &kogan_blind()).unwrap();
        let caps = covers[0].capabilities();
        assert!(caps.supports_open());
        assert!(caps.supports_close());
        assert!(!caps.supports_stop());
        assert!(caps.supports_set_position());
        assert!(covers[0].stop_command().is_err());
    }

    #[test]
    fn garage_door_channels_bind_independently() {
        let mut inventory = DeviceInventory::new();
        inventory.insert_function("switch_1", CodeDescriptor::boolean());
        inventory.insert_function("switch_2", CodeDescriptor::boolean());
        inventory.insert_status("doorcontact_state", CodeDescriptor::boolean());
        inventory.insert_status("doorcontact_state_2", CodeDescriptor::boolean());

        let covers = Cover::bind_category(DeviceCategory::Ckmkzq, &inventory).unwrap();
        assert_eq!(covers.len(), 2);

        // Each door follows its own contact, inverted (contact true = open).
        let status = status_of(&[
            ("doorcontact_state", DpValue::Bool(true)),
            ("doorcontact_state_2", DpValue::Bool(false)),
        ]);
        assert_eq!(covers[0].state(&status), CoverState::Open);
        assert_eq!(covers[1].state(&status), CoverState::Closed);
    }
}

// ============================================================================
// Enumeration-instruction curtains
// ============================================================================

mod enum_instruction {
    use super::*;

    fn curtain(literals: &[&str]) -> DeviceInventory {
        let mut inventory = DeviceInventory::new();
        inventory.insert_function(
            "control",
            CodeDescriptor::enumeration(literals.iter().copied()),
        );
        inventory.insert_function(
            "percent_control",
            CodeDescriptor::integer(IntegerSpec::new(0, 100)),
        );
        inventory.insert_status(
            "percent_state",
            CodeDescriptor::integer(IntegerSpec::new(0, 100)),
        );
        inventory
    }

    #[test]
    fn full_enum_range_supports_all_discrete_operations() {
        let covers =
            Cover::bind_category(DeviceCategory::Cl, &curtain(&["open", "close", "stop"])).unwrap();
        let caps = covers[0].capabilities();
        assert!(caps.supports_open());
        assert!(caps.supports_close());
        assert!(caps.supports_stop());
    }

    #[test]
    fn missing_stop_literal_makes_stop_unsupported() {
        let covers =
            Cover::bind_category(DeviceCategory::Cl, &curtain(&["open", "close"])).unwrap();
        let cover = &covers[0];

        assert!(!cover.capabilities().supports_stop());
        let result = cover.stop_command();
        assert!(matches!(
            result,
            Err(Error::Command(CommandError::UnsupportedOperation(
                CoverOperation::Stop
            )))
        ));
    }

    #[test]
    fn mach_operate_curtain_uses_vendor_literals() {
        let mut inventory = DeviceInventory::new();
        inventory.insert_function(
            "mach_operate",
            CodeDescriptor::enumeration(["FZ", "ZZ", "STOP"]),
        );
        inventory.insert_function("position", CodeDescriptor::integer(IntegerSpec::new(0, 100)));

        let covers = Cover::bind_category(DeviceCategory::Cl, &inventory).unwrap();
        assert_eq!(covers.len(), 1);
        let cover = &covers[0];
        let status = Status::new();

        let open = cover.open_command(&status).unwrap();
        assert_eq!(open.pairs()[0].value, DpValue::from("FZ"));
        let close = cover.close_command(&status).unwrap();
        assert_eq!(close.pairs()[0].value, DpValue::from("ZZ"));
        let stop = cover.stop_command().unwrap();
        assert_eq!(stop.pairs()[0].value, DpValue::from("STOP"));
    }

    #[test]
    fn mach_operate_missing_stop_in_enum_drops_capability() {
        let mut inventory = DeviceInventory::new();
        inventory.insert_function("mach_operate", CodeDescriptor::enumeration(["FZ", "ZZ"]));

        let covers = Cover::bind_category(DeviceCategory::Cl, &inventory).unwrap();
        let cover = &covers[0];
        assert!(!cover.capabilities().supports_stop());
        assert!(cover.stop_command().is_err());
    }

    #[test]
    fn stop_report_with_no_position_is_unknown() {
        let mut inventory = DeviceInventory::new();
        inventory.insert_function(
            "control",
            CodeDescriptor::enumeration(["open", "close", "stop"]),
        );
        let covers = Cover::bind_category(DeviceCategory::Cl, &inventory).unwrap();
        let cover = &covers[0];

        // The control echo is the resolved state code here; "stop" is
        // transient and carries no endpoint information.
        let status = status_of(&[("control", DpValue::from("stop"))]);
        assert_eq!(cover.state(&status), CoverState::Unknown);

        let status = status_of(&[("control", DpValue::from("close"))]);
        assert_eq!(cover.state(&status), CoverState::Closed);
    }

    #[test]
    fn position_zero_beats_conflicting_open_report() {
        let covers =
            Cover::bind_category(DeviceCategory::Cl, &curtain(&["open", "close", "stop"])).unwrap();
        let cover = &covers[0];

        let status = status_of(&[
            ("control", DpValue::from("open")),
            // Raw 100 on the reversed scale: fully closed.
            ("percent_state", DpValue::Integer(100)),
        ]);
        assert_eq!(cover.state(&status), CoverState::Closed);
    }

    #[test]
    fn set_position_round_trips_through_raw_scale() {
        let covers =
            Cover::bind_category(DeviceCategory::Cl, &curtain(&["open", "close", "stop"])).unwrap();
        let cover = &covers[0];
        let status = Status::new();

        let batch = cover
            .set_position_command(Position::new(30).unwrap(), &status)
            .unwrap();
        assert_eq!(batch.len(), 1);
        let DpValue::Integer(raw) = &batch.pairs()[0].value else {
            panic!("expected integer write");
        };

        // Feeding the written value back as the state echo reads the same
        // normalized position.
        let echo = status_of(&[("percent_state", DpValue::Integer(*raw))]);
        assert_eq!(cover.position(&echo).unwrap().value(), 30);
    }
}

// ============================================================================
// Mode-dependent inversion (curtain switches)
// ============================================================================

mod conditional_inversion {
    use super::*;

    fn curtain_switch() -> DeviceInventory {
        let mut inventory = DeviceInventory::new();
        inventory.insert_function(
            "control",
            CodeDescriptor::enumeration(["open", "close", "stop"]),
        );
        inventory.insert_function(
            "percent_control",
            CodeDescriptor::integer(IntegerSpec::new(0, 100)),
        );
        inventory.insert_status(
            "percent_state",
            CodeDescriptor::integer(IntegerSpec::new(0, 100)),
        );
        inventory
    }

    #[test]
    fn control_back_mode_selects_mapping_direction() {
        let covers = Cover::bind_category(DeviceCategory::Clkg, &curtain_switch()).unwrap();
        let cover = &covers[0];

        let status = status_of(&[
            ("percent_state", DpValue::Integer(30)),
            ("control_back_mode", DpValue::from("back")),
        ]);
        assert_eq!(cover.position(&status).unwrap().value(), 30);

        let status = status_of(&[
            ("percent_state", DpValue::Integer(30)),
            ("control_back_mode", DpValue::from("forward")),
        ]);
        assert_eq!(cover.position(&status).unwrap().value(), 70);
    }

    #[test]
    fn mode_change_between_write_and_read_stays_consistent() {
        let covers = Cover::bind_category(DeviceCategory::Clkg, &curtain_switch()).unwrap();
        let cover = &covers[0];

        // Write while the motor runs forward.
        let status = status_of(&[("control_back_mode", DpValue::from("back"))]);
        let batch = cover
            .set_position_command(Position::new(20).unwrap(), &status)
            .unwrap();
        assert_eq!(batch.pairs()[0].value, DpValue::Integer(20));

        // After the user reverses the motor, the same write target maps
        // to the opposite raw value; the policy is re-evaluated, not
        // cached from bind time.
        let status = status_of(&[("control_back_mode", DpValue::from("forward"))]);
        let batch = cover
            .set_position_command(Position::new(20).unwrap(), &status)
            .unwrap();
        assert_eq!(batch.pairs()[0].value, DpValue::Integer(80));
    }
}

// ============================================================================
// Shared refresh throttle under concurrent pollers
// ============================================================================

mod shared_refresh {
    use super::*;

    #[tokio::test]
    async fn many_entities_fund_one_refresh_per_window() {
        let throttle = Arc::new(RefreshThrottle::new(Duration::from_secs(25)));
        let backend_calls = Arc::new(AtomicU32::new(0));
        let scope = ScopeId::new(7);
        let now = Instant::now();

        // 22 cover entities poll at the same instant.
        let mut handles = Vec::new();
        for _ in 0..22 {
            let throttle = Arc::clone(&throttle);
            let backend_calls = Arc::clone(&backend_calls);
            handles.push(tokio::spawn(async move {
                throttle
                    .request_refresh(scope, now, move || async move {
                        backend_calls.fetch_add(1, Ordering::SeqCst);
                        Ok::<(), &'static str>(())
                    })
                    .await
                    .unwrap()
            }));
        }

        let mut refreshed = 0;
        let mut skipped = 0;
        for handle in handles {
            match handle.await.unwrap() {
                RefreshOutcome::Refreshed => refreshed += 1,
                RefreshOutcome::Skipped => skipped += 1,
            }
        }

        assert_eq!(refreshed, 1);
        assert_eq!(skipped, 21);
        assert_eq!(backend_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn next_poll_cycle_refreshes_again() {
        let throttle = RefreshThrottle::new(Duration::from_secs(25));
        let scope = ScopeId::new(1);
        let start = Instant::now();

        let ok = || async { Ok::<(), &'static str>(()) };
        assert_eq!(
            throttle.request_refresh(scope, start, ok).await.unwrap(),
            RefreshOutcome::Refreshed
        );
        // Mid-window poll from another entity.
        assert_eq!(
            throttle
                .request_refresh(scope, start + Duration::from_secs(10), ok)
                .await
                .unwrap(),
            RefreshOutcome::Skipped
        );
        // The 30-second host cadence lands after the 25-second window.
        assert_eq!(
            throttle
                .request_refresh(scope, start + Duration::from_secs(30), ok)
                .await
                .unwrap(),
            RefreshOutcome::Refreshed
        );
    }

    #[tokio::test]
    async fn refresh_failure_reaches_the_caller() {
        let throttle = RefreshThrottle::default();
        let result = throttle
            .request_refresh(ScopeId::new(1), Instant::now(), || async {
                Err::<(), _>("cloud unreachable")
            })
            .await;
        assert_eq!(result, Err("cloud unreachable"));
    }
}

// ============================================================================
// Poll -> cache -> read cycle
// ============================================================================

mod poll_cycle {
    use super::*;
    use parking_lot::RwLock;

    /// Minimal stand-in for the host's shared status cache: the throttled
    /// refresh writes it, every entity reads it.
    #[derive(Default)]
    struct SharedCache(RwLock<Status>);

    impl dpcover::StatusSource for SharedCache {
        fn dp_value(&self, code: &str) -> Option<DpValue> {
            self.0.read().get(code).cloned()
        }
    }

    #[tokio::test]
    async fn refresh_updates_feed_subsequent_reads() {
        let mut inventory = DeviceInventory::new();
        inventory.insert_function(
            "control",
            CodeDescriptor::enumeration(["open", "close", "stop"]),
        );
        inventory.insert_status(
            "percent_state",
            CodeDescriptor::integer(IntegerSpec::new(0, 100)),
        );
        let covers = Cover::bind_category(DeviceCategory::Cl, &inventory).unwrap();
        let cover = &covers[0];

        let cache = Arc::new(SharedCache::default());
        let throttle = RefreshThrottle::default();

        assert_eq!(cover.state(cache.as_ref()), CoverState::Unknown);

        let refresh_cache = Arc::clone(&cache);
        let outcome = throttle
            .request_refresh(ScopeId::new(1), Instant::now(), move || async move {
                refresh_cache
                    .0
                    .write()
                    .insert("percent_state".to_string(), DpValue::Integer(100));
                Ok::<(), &'static str>(())
            })
            .await
            .unwrap();
        assert_eq!(outcome, RefreshOutcome::Refreshed);

        // Raw 100 on the reversed scale: the curtain is closed.
        assert_eq!(cover.position(cache.as_ref()).unwrap().value(), 0);
        assert_eq!(cover.state(cache.as_ref()), CoverState::Closed);
    }
}
