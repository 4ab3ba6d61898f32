//! Interactive read loop
//!
//! Thin I/O glue around the device and command layer: banner, prompt,
//! `status` and `quit` handling, and one-line rendering of rejections.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use dc_command::{process_command, CommandError};
use dc_device::{ControlValue, Device, DeviceConfig, MessageGenerator};

/// Run the interactive loop until `quit`, an empty line, or EOF
pub fn run(config: DeviceConfig) -> anyhow::Result<()> {
    let mut device = Device::from_config(config);

    let generator = Rc::new(RefCell::new(MessageGenerator::new()));
    device.add_listener(generator);

    print_banner(&device);

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let line = input.trim_end_matches(['\r', '\n']);
        if line.is_empty() || line == "quit" {
            break;
        }

        if line == "status" {
            print_status(&device);
            continue;
        }

        if let Err(err) = process_command(line, &mut device) {
            print_rejection(&err);
        }
    }

    Ok(())
}

fn print_banner(device: &Device) {
    println!("DEVICE CONTROL v1.0");
    println!("===================");
    println!("Connected device: {}\n", device.model_name());
    println!("Enter a command followed by a value to set it on the device.\n");
    println!("Possible commands");
    println!("-----------------");
    println!("set-preamp-level   [-127 .. 0]   : set the preamp level (dB)");
    println!("set-phantom-power  [on|1|off|0]  : toggle 48V phantom power");
    println!("status                           : view a list of controls and their values");
    println!("quit                             : quit Device Control\n");
}

fn print_status(device: &Device) {
    println!("Preamp level: {}", device.preamp_level());
    println!(
        "Phantom power: {}",
        ControlValue::Switch(device.phantom_power())
    );
}

/// Render a rejection on one line
///
/// An unmatched keyword and a missing value both read as a plain failure;
/// value errors name the reason.
fn print_rejection(err: &CommandError) {
    match err {
        CommandError::UnknownCommand(_) | CommandError::EmptyValue => {
            println!("Command failed");
        }
        other => println!("Command failed: {other}"),
    }
}
