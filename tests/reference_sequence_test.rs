//! The reference command sequences the device contract was verified
//! against, replayed end to end: once through the host-side handshake
//! helper and once at the packed pin level, cycle by cycle.

use libcam8::{BusInputs, Cam8, Command, Response, Status};

#[test]
fn test_reference_sequence() {
    let mut cam = Cam8::new();

    let ok = |value: u8| Response::new(Status::Ok, value);

    assert_eq!(cam.issue(Command::insert(0x4, 0x2)).unwrap(), ok(0));
    assert_eq!(cam.issue(Command::insert(0x6, 0x9)).unwrap(), ok(0));
    assert_eq!(cam.issue(Command::lookup(0x4)).unwrap(), ok(0x2));
    assert_eq!(
        cam.issue(Command::lookup(0x9)).unwrap().status,
        Status::NotFound
    );
    assert_eq!(cam.issue(Command::delete(0x6)).unwrap(), ok(0x9));
    assert_eq!(
        cam.issue(Command::lookup(0x6)).unwrap().status,
        Status::NotFound
    );
    assert_eq!(cam.issue(Command::insert(0x4, 0x3)).unwrap(), ok(0));
    assert_eq!(cam.issue(Command::lookup(0x4)).unwrap(), ok(0x3));

    // Fill every slot (key 0x4 is an upsert, the rest are fresh)
    for key in 0..8 {
        assert_eq!(cam.issue(Command::insert(key, key)).unwrap(), ok(0));
    }

    assert_eq!(
        cam.issue(Command::insert(0xF, 0xF)).unwrap().status,
        Status::Full
    );
    assert_eq!(cam.issue(Command::delete(0x5)).unwrap(), ok(0x5));
    assert_eq!(cam.issue(Command::insert(0xF, 0xF)).unwrap(), ok(0));
    assert_eq!(cam.issue(Command::lookup(0xF)).unwrap(), ok(0xF));
}

/// Holds the given pin levels for `cycles` clock cycles.
fn drive(cam: &mut Cam8, data: u8, ctrl: u8, cycles: u32) {
    for _ in 0..cycles {
        cam.tick(BusInputs::from_pins(data, ctrl, false))
            .expect("pin drive failed");
    }
}

/// The pin-level sequence the hardware harness drives: reset held for ten
/// cycles, packed data/ctrl bytes, ten-cycle waits between strobes.
#[test]
fn test_reference_sequence_at_pin_level() {
    const CMD_LOOKUP: u8 = 0x0;
    const CMD_INSERT: u8 = 0x1;
    const GO: u8 = 1 << 2;

    let mut cam = Cam8::new();

    // Reset held for ten cycles
    for _ in 0..10 {
        cam.tick(BusInputs::from_pins(0, 0, true)).unwrap();
    }

    // Present key=4 value=2 with the strobe low, then raise it
    drive(&mut cam, 0x42, CMD_INSERT, 10);
    assert_eq!(cam.data_out(), 0);
    drive(&mut cam, 0x42, GO | CMD_INSERT, 10);
    assert_eq!(cam.ctrl_out() >> 6, Status::Ok.bits());

    // Second insert: drop the strobe for two cycles, then strobe key=6
    // value=9
    drive(&mut cam, 0x69, CMD_INSERT, 2);
    drive(&mut cam, 0x69, GO | CMD_INSERT, 10);
    assert_eq!(cam.ctrl_out() >> 6, Status::Ok.bits());

    // Lookup key=4: data byte 0x40, value nibble ignored
    drive(&mut cam, 0x40, 0, 2);
    drive(&mut cam, 0x40, GO | CMD_LOOKUP, 10);
    assert_eq!(cam.ctrl_out() >> 6, Status::Ok.bits());
    assert_eq!(cam.data_out(), 0x02);

    // Lookup key=6
    drive(&mut cam, 0x60, 0, 2);
    drive(&mut cam, 0x60, GO | CMD_LOOKUP, 10);
    assert_eq!(cam.ctrl_out() >> 6, Status::Ok.bits());
    assert_eq!(cam.data_out(), 0x09);
}
