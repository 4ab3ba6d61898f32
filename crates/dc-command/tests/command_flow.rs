//! Integration tests for the command layer driving a real device
//!
//! These tests verify end-to-end behavior of command processing including:
//! - State mutation and observer notification on the success path
//! - State preservation on every rejection path
//! - Listener attach/detach semantics during command-driven mutation
//! - Rendered notification text via the message generator

use std::cell::RefCell;
use std::rc::Rc;

use dc_command::{process_command, CommandError};
use dc_device::{
    Control, ControlValue, Device, DeviceListener, ListenerHandle, MessageGenerator,
    MINUS_INFINITY_DB,
};

// ============================================================================
// Helper Types
// ============================================================================

mod helpers {
    use super::*;

    /// Listener that records every notification it receives
    #[derive(Default)]
    pub struct RecordingListener {
        pub updates: Vec<(Control, ControlValue)>,
    }

    impl DeviceListener for RecordingListener {
        fn update(&mut self, control: Control, value: ControlValue) {
            self.updates.push((control, value));
        }
    }

    pub fn recording_listener() -> Rc<RefCell<RecordingListener>> {
        Rc::new(RefCell::new(RecordingListener::default()))
    }

    /// Fresh device with one recording listener attached
    pub fn observed_device() -> (Device, Rc<RefCell<RecordingListener>>) {
        let mut device = Device::new("testDevice");
        let listener = recording_listener();
        device.add_listener(listener.clone());
        (device, listener)
    }
}

// ============================================================================
// Success Path Tests
// ============================================================================

mod success_tests {
    use super::*;

    #[test]
    fn fresh_device_starts_at_minus_infinity() {
        let device = Device::new("testDevice");
        assert_eq!(device.preamp_level(), MINUS_INFINITY_DB);
    }

    #[test]
    fn preamp_command_mutates_and_notifies_once() {
        let (mut device, listener) = helpers::observed_device();

        process_command("set-preamp-level -6", &mut device).unwrap();

        assert_eq!(device.preamp_level(), -6);
        let recorded = listener.borrow();
        assert_eq!(recorded.updates.len(), 1);
        assert_eq!(recorded.updates[0], (Control::PreampLevel, ControlValue::Db(-6)));
    }

    #[test]
    fn phantom_command_mutates_and_notifies_once() {
        let (mut device, listener) = helpers::observed_device();

        process_command("set-phantom-power on", &mut device).unwrap();

        assert!(device.phantom_power());
        let recorded = listener.borrow();
        assert_eq!(recorded.updates.len(), 1);
        assert_eq!(recorded.updates[0], (Control::PhantomPower, ControlValue::Switch(true)));
    }

    #[test]
    fn repeating_a_command_notifies_independently() {
        let (mut device, listener) = helpers::observed_device();

        process_command("set-preamp-level -40", &mut device).unwrap();
        process_command("set-preamp-level -40", &mut device).unwrap();

        assert_eq!(device.preamp_level(), -40);
        assert_eq!(listener.borrow().updates.len(), 2);
    }

    #[test]
    fn formatter_renders_command_driven_change() {
        let mut device = Device::new("testDevice");
        let generator = Rc::new(RefCell::new(MessageGenerator::new()));
        device.add_listener(generator.clone());

        process_command("set-preamp-level -66", &mut device).unwrap();
        assert_eq!(
            generator.borrow().last_message(),
            "preampLevel control changed to -66"
        );

        process_command("set-phantom-power OFF", &mut device).unwrap();
        assert_eq!(
            generator.borrow().last_message(),
            "phantomPower control changed to off"
        );
    }

    #[test]
    fn detached_listener_misses_later_commands() {
        let (mut device, first) = helpers::observed_device();
        let second = helpers::recording_listener();
        device.add_listener(second.clone());

        process_command("set-preamp-level -12", &mut device).unwrap();

        let handle: ListenerHandle = first.clone();
        device.remove_listener(&handle);

        process_command("set-preamp-level -24", &mut device).unwrap();

        assert_eq!(first.borrow().updates.len(), 1);
        assert_eq!(second.borrow().updates.len(), 2);
    }
}

// ============================================================================
// Rejection Path Tests
// ============================================================================

mod rejection_tests {
    use super::*;

    /// Process a line expected to fail and assert nothing changed
    fn assert_rejected(device: &mut Device, line: &str) -> CommandError {
        let level_before = device.preamp_level();
        let phantom_before = device.phantom_power();

        let err = process_command(line, device).unwrap_err();

        assert_eq!(device.preamp_level(), level_before);
        assert_eq!(device.phantom_power(), phantom_before);
        err
    }

    #[test]
    fn out_of_range_level_leaves_state_alone() {
        let (mut device, listener) = helpers::observed_device();

        let err = assert_rejected(&mut device, "set-preamp-level -200");
        assert_eq!(err, CommandError::OutOfRange(-200));

        let err = assert_rejected(&mut device, "set-preamp-level 5");
        assert_eq!(err, CommandError::OutOfRange(5));

        assert!(listener.borrow().updates.is_empty());
    }

    #[test]
    fn non_numeric_level_leaves_state_alone() {
        let (mut device, listener) = helpers::observed_device();

        let err = assert_rejected(&mut device, "set-preamp-level abc");
        assert_eq!(err, CommandError::NotANumber("abc".to_string()));
        assert!(listener.borrow().updates.is_empty());
    }

    #[test]
    fn invalid_switch_token_leaves_state_alone() {
        let (mut device, listener) = helpers::observed_device();
        process_command("set-phantom-power on", &mut device).unwrap();

        let err = assert_rejected(&mut device, "set-phantom-power maybe");
        assert_eq!(err, CommandError::InvalidSwitchValue("maybe".to_string()));

        assert!(device.phantom_power());
        assert_eq!(listener.borrow().updates.len(), 1);
    }

    #[test]
    fn unknown_command_leaves_state_alone() {
        let (mut device, listener) = helpers::observed_device();

        let err = assert_rejected(&mut device, "set-volume 3");
        assert!(matches!(err, CommandError::UnknownCommand(_)));
        assert!(listener.borrow().updates.is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_in_range_level_round_trips(level_db in -127i32..=0) {
            let (mut device, listener) = helpers::observed_device();

            process_command(&format!("set-preamp-level {}", level_db), &mut device)
                .unwrap();

            prop_assert_eq!(device.preamp_level(), level_db);
            let recorded = listener.borrow();
            prop_assert_eq!(recorded.updates.len(), 1);
            prop_assert_eq!(
                recorded.updates[0],
                (Control::PreampLevel, ControlValue::Db(level_db))
            );
        }

        #[test]
        fn every_out_of_range_level_rejects(level_db in prop_oneof![
            i32::MIN..-127i32,
            1i32..=i32::MAX,
        ]) {
            let (mut device, listener) = helpers::observed_device();

            let err = process_command(&format!("set-preamp-level {}", level_db), &mut device)
                .unwrap_err();

            prop_assert_eq!(err, CommandError::OutOfRange(level_db));
            prop_assert_eq!(device.preamp_level(), MINUS_INFINITY_DB);
            prop_assert!(listener.borrow().updates.is_empty());
        }

        #[test]
        fn arbitrary_lines_never_mutate_on_rejection(line in "[a-z0-9 -]{0,24}") {
            let (mut device, listener) = helpers::observed_device();

            if process_command(&line, &mut device).is_err() {
                prop_assert_eq!(device.preamp_level(), MINUS_INFINITY_DB);
                prop_assert!(!device.phantom_power());
                prop_assert!(listener.borrow().updates.is_empty());
            }
        }
    }
}
