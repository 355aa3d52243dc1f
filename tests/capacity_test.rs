//! Integration tests for capacity accounting: eight slots, FULL on the
//! ninth distinct key, reclamation through DELETE.

use libcam8::{Cam8, Command, Response, Status, SLOT_COUNT};

#[test]
fn test_eight_distinct_keys_fit() {
    let mut cam = Cam8::new();

    for key in 0..SLOT_COUNT as u8 {
        let response = cam.issue(Command::insert(key, key)).unwrap();
        assert_eq!(response.status, Status::Ok, "insert of key {} failed", key);
    }

    assert_eq!(cam.store().occupancy(), SLOT_COUNT);
    for key in 0..SLOT_COUNT as u8 {
        assert_eq!(cam.store().get(key), Some(key));
    }
}

#[test]
fn test_ninth_distinct_key_reports_full() {
    let mut cam = Cam8::new();
    for key in 0..SLOT_COUNT as u8 {
        cam.issue(Command::insert(key, key)).unwrap();
    }

    let response = cam.issue(Command::insert(0xF, 0xF)).unwrap();
    assert_eq!(response, Response::new(Status::Full, 0));

    // Store unchanged by the rejected insert
    assert_eq!(cam.store().occupancy(), SLOT_COUNT);
    assert!(!cam.store().contains(0xF));
    for key in 0..SLOT_COUNT as u8 {
        assert_eq!(cam.store().get(key), Some(key));
    }
}

#[test]
fn test_delete_reclaims_capacity() {
    let mut cam = Cam8::new();
    for key in 0..SLOT_COUNT as u8 {
        cam.issue(Command::insert(key, key)).unwrap();
    }
    assert_eq!(
        cam.issue(Command::insert(0xF, 0xF)).unwrap().status,
        Status::Full
    );

    let response = cam.issue(Command::delete(0x5)).unwrap();
    assert_eq!(response, Response::new(Status::Ok, 0x5));

    // The freed slot takes the previously rejected key
    assert_eq!(
        cam.issue(Command::insert(0xF, 0xF)).unwrap().status,
        Status::Ok
    );
    let response = cam.issue(Command::lookup(0xF)).unwrap();
    assert_eq!(response, Response::new(Status::Ok, 0xF));
    assert_eq!(cam.store().occupancy(), SLOT_COUNT);
}

#[test]
fn test_full_store_still_answers_lookups() {
    let mut cam = Cam8::new();
    for key in 0..SLOT_COUNT as u8 {
        cam.issue(Command::insert(key, 0xF - key)).unwrap();
    }

    for key in 0..SLOT_COUNT as u8 {
        let response = cam.issue(Command::lookup(key)).unwrap();
        assert_eq!(response, Response::new(Status::Ok, 0xF - key));
    }
    let response = cam.issue(Command::lookup(0xE)).unwrap();
    assert_eq!(response.status, Status::NotFound);
}

#[test]
fn test_fill_drain_fill_cycle() {
    let mut cam = Cam8::new();

    // Fill, drain completely, fill again with different keys
    for key in 0..8 {
        cam.issue(Command::insert(key, key)).unwrap();
    }
    for key in 0..8 {
        assert_eq!(cam.issue(Command::delete(key)).unwrap().status, Status::Ok);
    }
    assert_eq!(cam.store().occupancy(), 0);

    for key in 8..16 {
        assert_eq!(
            cam.issue(Command::insert(key, key)).unwrap().status,
            Status::Ok
        );
    }
    assert_eq!(cam.store().occupancy(), SLOT_COUNT);
}
