//! Example: Polling Host
//!
//! Drives the CAM peripheral the way a hardware verification harness
//! would: pin-level packed bytes, a held reset, explicit strobe edges, and
//! fixed waits between command and response.
//!
//! Run with:
//! ```sh
//! cargo run --example polling_host
//! ```

use libcam8::{BusInputs, Cam8, Status, RESPONSE_LATENCY};

const CMD_LOOKUP: u8 = 0x0;
const CMD_INSERT: u8 = 0x1;
const CMD_DELETE: u8 = 0x2;
const GO: u8 = 1 << 2;

/// Holds the given pin levels for `cycles` clock cycles.
fn drive(cam: &mut Cam8, data: u8, ctrl: u8, cycles: u64) {
    for _ in 0..cycles {
        cam.tick(BusInputs::from_pins(data, ctrl, false))
            .expect("pin drive failed");
    }
}

/// Strobes one command and waits out the response window.
fn transact(cam: &mut Cam8, name: &str, data: u8, opcode: u8) {
    // Deassert the strobe so the next assertion is a fresh edge
    drive(cam, data, opcode, 2);
    drive(cam, data, GO | opcode, RESPONSE_LATENCY);

    println!(
        "cycle {:4}  {:<18} -> {:<8} value=0x{:X}",
        cam.cycles(),
        name,
        cam.status().to_string(),
        cam.value()
    );
}

fn main() {
    let mut cam = Cam8::new();

    // Hold reset for ten cycles before releasing, as the hardware
    // bring-up sequence does
    for _ in 0..10 {
        cam.tick(BusInputs::from_pins(0, 0, true)).unwrap();
    }
    println!("reset released at cycle {}", cam.cycles());

    transact(&mut cam, "insert(0x4, 0x2)", 0x42, CMD_INSERT);
    transact(&mut cam, "insert(0x6, 0x9)", 0x69, CMD_INSERT);
    transact(&mut cam, "lookup(0x4)", 0x40, CMD_LOOKUP);
    transact(&mut cam, "lookup(0x9)", 0x90, CMD_LOOKUP);
    transact(&mut cam, "delete(0x6)", 0x60, CMD_DELETE);
    transact(&mut cam, "lookup(0x6)", 0x60, CMD_LOOKUP);

    // Early strobe: the device answers BUSY and drops the request
    drive(&mut cam, 0x11, CMD_INSERT, 2);
    cam.tick(BusInputs::from_pins(0x11, GO | CMD_INSERT, false))
        .unwrap();
    cam.tick(BusInputs::from_pins(0x11, CMD_INSERT, false))
        .unwrap();
    cam.tick(BusInputs::from_pins(0x22, GO | CMD_INSERT, false))
        .unwrap();
    assert_eq!(cam.status(), Status::Busy);
    println!(
        "cycle {:4}  early second strobe -> {}",
        cam.cycles(),
        cam.status()
    );
    drive(&mut cam, 0, 0, RESPONSE_LATENCY);

    println!(
        "done: {} entries stored after {} cycles",
        cam.store().occupancy(),
        cam.cycles()
    );
}
