//! Built-in self-test suite
//!
//! Launched with `--test` instead of the interactive loop. Drives the
//! public core entry points, counts failures, and prints a one-line
//! summary; the process exit code stays 0 either way.

use std::cell::RefCell;
use std::rc::Rc;

use dc_command::{process_command, CommandError};
use dc_device::{
    Control, ControlValue, Device, DeviceListener, ListenerHandle, MessageGenerator,
    MINUS_INFINITY_DB,
};

/// Failure counter shared by every check in the suite
#[derive(Default)]
struct Tester {
    failures: u32,
}

impl Tester {
    fn check(&mut self, assertion: bool, what: &str) {
        if !assertion {
            eprintln!("Test failed: {what}");
            self.failures += 1;
        }
    }
}

/// Listener recording the latest notification it received
#[derive(Default)]
struct MockListener {
    update_count: u32,
    latest: Option<(Control, ControlValue)>,
}

impl DeviceListener for MockListener {
    fn update(&mut self, control: Control, value: ControlValue) {
        self.update_count += 1;
        self.latest = Some((control, value));
    }
}

/// Run the suite and print the pass/fail summary
pub fn run() {
    let mut tester = Tester::default();

    test_device_can_set_preamp_level(&mut tester);
    test_message_generator(&mut tester);
    test_set_preamp_level_command(&mut tester);
    test_phantom_power_command(&mut tester);
    test_rejections_leave_state_unchanged(&mut tester);
    test_listener_detach(&mut tester);

    println!(
        "Number of test failures: {} {}",
        tester.failures,
        if tester.failures == 0 { ":)" } else { ":(" }
    );
}

fn test_device_can_set_preamp_level(tester: &mut Tester) {
    let mut device = Device::new("testDevice");

    let listener = Rc::new(RefCell::new(MockListener::default()));
    device.add_listener(listener.clone());
    tester.check(listener.borrow().update_count == 0, "no update before set");

    device.set_preamp_level(-12);

    tester.check(device.preamp_level() == -12, "preamp level stored");
    tester.check(listener.borrow().update_count == 1, "one update per set");
    tester.check(
        listener.borrow().latest == Some((Control::PreampLevel, ControlValue::Db(-12))),
        "update carries control and value",
    );
}

fn test_message_generator(tester: &mut Tester) {
    let mut device = Device::new("testDevice");

    let generator = Rc::new(RefCell::new(MessageGenerator::new()));
    device.add_listener(generator.clone());

    tester.check(
        generator.borrow().last_message().is_empty(),
        "message empty before set",
    );
    device.set_preamp_level(-66);
    tester.check(
        generator.borrow().last_message() == "preampLevel control changed to -66",
        "preamp message text",
    );
}

fn test_set_preamp_level_command(tester: &mut Tester) {
    let mut device = Device::new("testDevice");
    tester.check(
        device.preamp_level() == MINUS_INFINITY_DB,
        "fresh device at minus infinity",
    );

    let result = process_command("set-preamp-level -6", &mut device);

    tester.check(result.is_ok(), "in-range level accepted");
    tester.check(device.preamp_level() == -6, "command sets level");
}

fn test_phantom_power_command(tester: &mut Tester) {
    let mut device = Device::new("testDevice");
    tester.check(!device.phantom_power(), "phantom power defaults off");

    tester.check(
        process_command("set-phantom-power ON", &mut device).is_ok(),
        "case-insensitive on accepted",
    );
    tester.check(device.phantom_power(), "phantom power on");

    tester.check(
        process_command("set-phantom-power 0", &mut device).is_ok(),
        "numeric off accepted",
    );
    tester.check(!device.phantom_power(), "phantom power off");
}

fn test_rejections_leave_state_unchanged(tester: &mut Tester) {
    let mut device = Device::new("testDevice");

    tester.check(
        process_command("set-preamp-level 10", &mut device)
            == Err(CommandError::OutOfRange(10)),
        "out-of-range level rejected",
    );
    tester.check(
        process_command("set-preamp-level abc", &mut device)
            == Err(CommandError::NotANumber("abc".to_string())),
        "non-numeric level rejected",
    );
    tester.check(
        process_command("set-phantom-power maybe", &mut device)
            == Err(CommandError::InvalidSwitchValue("maybe".to_string())),
        "invalid switch token rejected",
    );
    tester.check(
        device.preamp_level() == MINUS_INFINITY_DB && !device.phantom_power(),
        "state unchanged after rejections",
    );
}

fn test_listener_detach(tester: &mut Tester) {
    let mut device = Device::new("testDevice");
    let first = Rc::new(RefCell::new(MockListener::default()));
    let second = Rc::new(RefCell::new(MockListener::default()));
    device.add_listener(first.clone());
    device.add_listener(second.clone());

    device.set_preamp_level(-1);

    let handle: ListenerHandle = first.clone();
    device.remove_listener(&handle);
    device.set_preamp_level(-2);

    tester.check(
        first.borrow().update_count == 1,
        "detached listener stops receiving",
    );
    tester.check(
        second.borrow().update_count == 2,
        "remaining listener keeps receiving",
    );
}
