mod common;

use std::cell::RefCell;

use common::*;
use cropdeck_core::config::{CropConfig, ReplacePolicy};
use cropdeck_core::error::CropError;
use cropdeck_core::io::{load, SourceImage};
use cropdeck_core::preset::{CropTarget, PresetTag, ProfileOwner};
use cropdeck_core::session::{CropOutput, CropSession, FnSink, SessionHost, SessionPhase};

fn host() -> SessionHost {
    SessionHost::new(CropConfig::default())
}

fn upload(w: u32, h: u32) -> Vec<u8> {
    png_bytes(&coordinate_pattern(w, h))
}

#[test]
fn test_load_starts_with_reset_viewport() {
    let mut host = host();
    let session = host.load(CropTarget::HeaderBanner, &upload(160, 90)).unwrap();

    assert_eq!(session.phase(), SessionPhase::Loaded);
    assert_eq!(session.viewport().zoom(), 1.0);
    assert_eq!(session.viewport().pan(), (0.0, 0.0));
    assert!(!session.viewport().is_dragging());
    assert_eq!(session.preset().dimensions(), (1200, 300));
}

#[test]
fn test_preview_has_output_dimensions() {
    let mut host = host();
    host.load(CropTarget::Signature, &upload(50, 50)).unwrap();
    let preview = host.session().unwrap().preview().unwrap();
    assert_eq!(preview.dimensions(), (300, 80));
}

#[test]
fn test_phase_transitions() {
    let mut host = host();
    assert_eq!(host.phase(), SessionPhase::Idle);

    host.load(CropTarget::FooterBanner, &upload(64, 64)).unwrap();
    assert_eq!(host.phase(), SessionPhase::Loaded);

    // A move without a drag is ignored and does not count as interaction.
    host.drag_move(10.0, 10.0).unwrap();
    assert_eq!(host.phase(), SessionPhase::Loaded);

    host.set_zoom(1.5).unwrap();
    assert_eq!(host.phase(), SessionPhase::Previewing);

    let mut sink: Vec<CropOutput> = Vec::new();
    host.confirm(&mut sink).unwrap();
    assert_eq!(host.phase(), SessionPhase::Confirmed);
    assert!(!host.is_active());

    host.load(CropTarget::FooterBanner, &upload(64, 64)).unwrap();
    host.cancel().unwrap();
    assert_eq!(host.phase(), SessionPhase::Cancelled);
}

#[test]
fn test_confirm_emits_exactly_one_output() {
    let mut host = host();
    host.load(CropTarget::ReportThumbnail(2), &upload(300, 200)).unwrap();
    host.zoom_by(0.4).unwrap();
    host.drag_start().unwrap();
    host.drag_move(-20.0, 15.0).unwrap();
    host.drag_end().unwrap();

    let mut sink: Vec<CropOutput> = Vec::new();
    host.confirm(&mut sink).unwrap();
    assert_eq!(sink.len(), 1);

    let output = &sink[0];
    assert_eq!(output.target, CropTarget::ReportThumbnail(2));
    assert_eq!(output.tag, PresetTag::ReportThumbnail);
    assert_eq!(output.slot, Some(2));
    assert_eq!((output.image.width, output.image.height), (800, 1000));

    let decoded = load(&output.image.bytes, &CropConfig::default().loader).unwrap();
    assert_eq!(decoded.dimensions(), (800, 1000));

    // Session is gone; a second confirm has nothing to emit.
    let err = host.confirm(&mut sink).unwrap_err();
    assert!(matches!(err, CropError::NoActiveSession));
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_cancel_emits_nothing() {
    let emitted = RefCell::new(0usize);
    let mut sink = FnSink(|_: CropOutput| *emitted.borrow_mut() += 1);

    let mut host = host();
    host.load(CropTarget::ProfileCircle(ProfileOwner::Admin), &upload(80, 120))
        .unwrap();
    host.set_zoom(3.0).unwrap();
    host.cancel().unwrap();

    let err = host.confirm(&mut sink).unwrap_err();
    assert!(matches!(err, CropError::NoActiveSession));
    assert_eq!(*emitted.borrow(), 0);
}

#[test]
fn test_events_without_session_are_rejected() {
    let mut host = host();
    assert!(matches!(host.set_zoom(2.0), Err(CropError::NoActiveSession)));
    assert!(matches!(host.drag_start(), Err(CropError::NoActiveSession)));
    assert!(matches!(host.cancel(), Err(CropError::NoActiveSession)));
}

#[test]
fn test_failed_decode_keeps_current_session() {
    let mut host = host();
    host.load(CropTarget::HeaderBanner, &upload(100, 100)).unwrap();
    host.set_zoom(2.5).unwrap();

    let err = host
        .load(CropTarget::Signature, b"not an image at all")
        .unwrap_err();
    assert!(matches!(err, CropError::Decode(_)));

    let session = host.session().unwrap();
    assert_eq!(session.target(), CropTarget::HeaderBanner);
    assert_eq!(session.viewport().zoom(), 2.5);
    assert_eq!(session.phase(), SessionPhase::Previewing);
}

#[test]
fn test_new_upload_replaces_by_default() {
    let mut host = host();
    host.load(CropTarget::HeaderBanner, &upload(100, 100)).unwrap();
    host.set_zoom(4.0).unwrap();

    let session = host.load(CropTarget::Signature, &upload(20, 40)).unwrap();
    assert_eq!(session.target(), CropTarget::Signature);
    assert_eq!(session.viewport().zoom(), 1.0);
    assert_eq!(session.source().dimensions(), (20, 40));
}

#[test]
fn test_require_resolve_refuses_new_upload() {
    let mut config = CropConfig::default();
    config.session.replace_policy = ReplacePolicy::RequireResolve;
    let mut host = SessionHost::new(config);

    host.load(CropTarget::HeaderBanner, &upload(100, 100)).unwrap();
    let err = host.load(CropTarget::Signature, &upload(20, 40)).unwrap_err();
    assert!(matches!(err, CropError::SessionBusy));
    assert_eq!(host.session().unwrap().target(), CropTarget::HeaderBanner);

    host.cancel().unwrap();
    assert!(host.load(CropTarget::Signature, &upload(20, 40)).is_ok());
}

#[test]
fn test_set_target_resets_viewport() {
    let source = SourceImage::from_rgba(coordinate_pattern(120, 90)).unwrap();
    let mut session =
        CropSession::open(CropTarget::HeaderBanner, source, CropConfig::default()).unwrap();
    session.set_zoom(2.0).unwrap();
    session.drag_start();
    session.drag_move(5.0, 5.0).unwrap();

    session
        .set_target(CropTarget::ProfileCircle(ProfileOwner::User))
        .unwrap();
    assert_eq!(session.viewport().zoom(), 1.0);
    assert_eq!(session.viewport().pan(), (0.0, 0.0));
    assert_eq!(session.phase(), SessionPhase::Loaded);
    assert_eq!(session.preview().unwrap().dimensions(), (400, 400));
}

#[test]
fn test_session_confirm_consumes() {
    let source = SourceImage::from_rgba(solid(10, 10, RED)).unwrap();
    let session = CropSession::open(CropTarget::Signature, source, CropConfig::default()).unwrap();
    let output = session.confirm().unwrap();
    assert_eq!(output.slot, None);
    assert!(output.image.to_data_uri().starts_with("data:image/png;base64,"));
}

#[test]
fn test_preview_matches_confirmed_pixels() {
    let mut host = host();
    host.load(CropTarget::Signature, &upload(90, 60)).unwrap();
    host.set_zoom(1.8).unwrap();
    host.drag_start().unwrap();
    host.drag_move(7.0, -3.0).unwrap();

    let preview = host.session().unwrap().preview().unwrap().clone();
    let mut sink: Vec<CropOutput> = Vec::new();
    host.confirm(&mut sink).unwrap();

    let decoded = load(&sink[0].image.bytes, &CropConfig::default().loader).unwrap();
    assert_eq!(decoded.pixels(), preview.pixels());
}

#[test]
fn test_set_config_applies_to_next_session() {
    let mut host = host();
    host.load(CropTarget::HeaderBanner, &upload(40, 40)).unwrap();

    let mut config = CropConfig::default();
    config.export.format = cropdeck_core::io::ExportFormat::Tiff;
    host.set_config(config);

    // The open session keeps its PNG settings.
    let mut sink: Vec<CropOutput> = Vec::new();
    host.confirm(&mut sink).unwrap();
    assert_eq!(sink[0].image.mime(), "image/png");

    host.load(CropTarget::HeaderBanner, &upload(40, 40)).unwrap();
    host.confirm(&mut sink).unwrap();
    assert_eq!(sink[1].image.mime(), "image/tiff");
}

#[test]
fn test_drag_gesture_marks_previewing() {
    let mut host = host();
    host.load(CropTarget::Signature, &upload(40, 40)).unwrap();
    host.drag_start().unwrap();
    assert_eq!(host.phase(), SessionPhase::Previewing);
    host.drag_end().unwrap();
    assert!(!host.session().unwrap().viewport().is_dragging());
}

#[test]
fn test_huge_drag_never_breaks_rendering() {
    let mut host = host();
    host.load(CropTarget::HeaderBanner, &upload(64, 48)).unwrap();
    host.set_zoom(2.0).unwrap();
    host.drag_start().unwrap();
    host.drag_move(f64::MAX, 0.0).unwrap();
    host.drag_move(f64::MAX, 0.0).unwrap();
    host.drag_move(-f64::MAX, 0.0).unwrap();
    host.set_zoom(3.0).unwrap();
    host.drag_end().unwrap();

    let session = host.session().unwrap();
    assert!(session.sample_rect().is_finite());

    let mut sink: Vec<CropOutput> = Vec::new();
    host.confirm(&mut sink).unwrap();
    assert_eq!(sink.len(), 1);
}
