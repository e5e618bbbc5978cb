//! End-to-end checks over the public builder API: wire layout, framing
//! markers and checksum validity across the protocol families.

use razer_report::types::{LedId, Rgb, VariableStorage, WaveDirection};
use razer_report::{
    custom_frame, extended, misc, mouse, standard, ProtocolType, RazerReport, ReportError,
    REPORT_LEN, TRANSACTION_EXTENDED, TRANSACTION_STANDARD,
};

#[test]
fn standard_static_effect_wire_layout() {
    let report = standard::matrix_effect_static(&Rgb::RED).unwrap();
    let wire = report.to_wire();
    assert_eq!(wire.len(), REPORT_LEN);
    assert_eq!(wire[2], TRANSACTION_STANDARD);
    assert_eq!(wire[6], 3); // data size
    assert_eq!(wire[7], 0x0F); // command class
    assert_eq!(wire[8], 0x06); // command id
    assert_eq!(wire[9..12], [255, 0, 0]);
    // Checksum byte is the XOR of wire bytes 3..89.
    let folded = wire[3..89].iter().fold(0u8, |acc, &b| acc ^ b);
    assert_eq!(wire[89], folded);
}

#[test]
fn extended_breathing_dual_wire_layout() {
    let report = extended::matrix_effect_breathing_dual(
        VariableStorage::VarStore,
        LedId::Backlight,
        &Rgb::RED,
        &Rgb::BLUE,
    )
    .unwrap();
    let wire = report.to_wire();
    assert_eq!(wire[2], TRANSACTION_EXTENDED);
    assert_eq!(wire[5], ProtocolType::Extended as u8);
    assert_eq!(wire[6], 8);
    assert_eq!(wire[9..17], [1, 5, 255, 0, 0, 0, 0, 255]);
}

#[test]
fn every_family_produces_valid_checksums() {
    let reports = [
        standard::get_serial().unwrap(),
        standard::matrix_effect_wave(WaveDirection::RightToLeft).unwrap(),
        standard::set_led_brightness(VariableStorage::VarStore, LedId::Logo, 100).unwrap(),
        extended::matrix_effect_spectrum(VariableStorage::NoStore, LedId::Zero).unwrap(),
        extended::matrix_brightness(VariableStorage::VarStore, LedId::Backlight, 255).unwrap(),
        mouse::matrix_effect_reactive(VariableStorage::NoStore, LedId::Logo, 3, &Rgb::GREEN)
            .unwrap(),
        misc::set_dpi_xy(VariableStorage::VarStore, 1600, 1600).unwrap(),
        misc::set_idle_time(300).unwrap(),
        misc::set_blade_brightness(128).unwrap(),
    ];
    for report in reports {
        assert!(report.checksum_is_valid());
        let parsed = RazerReport::from_wire(&report.to_wire()).unwrap();
        assert_eq!(parsed, report);
    }
}

#[test]
fn extended_family_always_prefixes_storage_and_zone() {
    let s = VariableStorage::VarStore;
    let l = LedId::RightSide;
    let reports = [
        extended::matrix_effect_none(s, l).unwrap(),
        extended::matrix_effect_static(s, l, &Rgb::WHITE).unwrap(),
        extended::matrix_effect_breathing_random(s, l).unwrap(),
        extended::matrix_effect_starlight_random(s, l, 2).unwrap(),
        mouse::matrix_effect_none(s, l).unwrap(),
        mouse::matrix_effect_breathing_single(s, l, &Rgb::BLUE).unwrap(),
    ];
    for report in reports {
        assert_eq!(report.arguments()[0], 0x01);
        assert_eq!(report.arguments()[1], 0x10);
    }
}

#[test]
fn wide_row_upload_round_trips_through_the_wire() {
    let pixels: Vec<u8> = (0..44 * 3).map(|i| (i % 251) as u8).collect();
    let packets = custom_frame::extended_row_packets(5, 0, &pixels).unwrap();
    assert_eq!(packets.len(), 2);

    let mut recovered = Vec::new();
    for (i, packet) in packets.iter().enumerate() {
        let parsed = RazerReport::from_wire(&packet.to_wire()).unwrap();
        assert_eq!(parsed.remaining_packets() as usize, packets.len() - 1 - i);
        let live = usize::from(parsed.data_size()) - 3;
        recovered.extend_from_slice(&parsed.arguments()[3..3 + live]);
    }
    assert_eq!(recovered, pixels);
}

#[test]
fn transaction_id_override_keeps_frames_valid() {
    // Some devices want a per-model transaction id instead of the default.
    let report = standard::matrix_effect_static(&Rgb::GREEN)
        .unwrap()
        .with_transaction_id(0x1F);
    assert_eq!(report.transaction_id(), 0x1F);
    assert!(report.checksum_is_valid());
    assert!(RazerReport::from_wire(&report.to_wire()).is_ok());
}

#[test]
fn builder_errors_surface_before_any_frame_exists() {
    assert!(matches!(
        standard::matrix_set_custom_frame(0, 0, 30, &[0u8; 31 * 3]),
        Err(ReportError::RowTooWide { .. })
    ));
    assert!(matches!(
        misc::set_polling_rate(333),
        Err(ReportError::UnsupportedOperation(_))
    ));
    assert!(matches!(
        misc::set_dpi_stages(VariableStorage::NoStore, 0, &[(800, 800); 7]),
        Err(ReportError::TooManyStages { count: 7, max: 5 })
    ));
}
