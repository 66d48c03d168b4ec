//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use holo_isis_filter::filter::{MAX_TLV_RECORDS, Outcome, PassReason};
use holo_isis_filter::inspect;
use holo_isis_filter::packet::error::{DecodeError, Layer};
use holo_isis_filter::packet::tlv::DropReason;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    END_OF_TLVS, TLV_HOSTNAME, TLV128_SINGLE, TLV130_SINGLE, TLVS_OFFSET,
    lsp_frame, test_inspect,
};

const MAX_TLVS: Outcome = Outcome::Pass(PassReason::MaxTlvs);

// Zero-length TLV of an unassigned type.
const TLV_FILLER: [u8; 2] = [0xfa, 0x00];

fn fillers(count: usize) -> Vec<&'static [u8]> {
    std::iter::repeat_n(&TLV_FILLER[..], count).collect()
}

#[test]
fn test_tlv_limit() {
    let frame = lsp_frame(&fillers(200));
    test_inspect(&frame, MAX_TLVS, MAX_TLV_RECORDS);
}

#[test]
fn test_tlv_limit_exact() {
    let frame = lsp_frame(&fillers(MAX_TLV_RECORDS));
    test_inspect(&frame, END_OF_TLVS, MAX_TLV_RECORDS);
}

#[test]
fn test_tlv_limit_exact_area() {
    // The last inspected TLV ends the area, with other TLVs in between.
    let mut tlvs = fillers(MAX_TLV_RECORDS - 2);
    tlvs.push(&TLV_HOSTNAME);
    tlvs.push(&TLV128_SINGLE);
    let frame = lsp_frame(&tlvs);
    test_inspect(&frame, END_OF_TLVS, MAX_TLV_RECORDS);

    // A single byte past the last inspected TLV.
    let mut tlvs = fillers(MAX_TLV_RECORDS);
    tlvs.push(&[0x82]);
    let frame = lsp_frame(&tlvs);
    test_inspect(&frame, MAX_TLVS, MAX_TLV_RECORDS);
}

#[test]
fn test_drop_at_last_inspected_tlv() {
    let mut tlvs = fillers(MAX_TLV_RECORDS - 1);
    tlvs.push(&TLV130_SINGLE);
    let frame = lsp_frame(&tlvs);
    test_inspect(
        &frame,
        Outcome::Drop(DropReason::Ipv4ExternalReach),
        MAX_TLV_RECORDS,
    );
}

#[test]
fn test_drop_beyond_tlv_limit() {
    let mut tlvs = fillers(MAX_TLV_RECORDS);
    tlvs.push(&TLV130_SINGLE);
    let frame = lsp_frame(&tlvs);
    test_inspect(&frame, MAX_TLVS, MAX_TLV_RECORDS);
}

#[test]
fn test_first_drop_wins() {
    let tlv128: [u8; 26] = [
        0x80, 0x18, 0x0a, 0x80, 0x80, 0x80, 0x0a, 0x00, 0x01, 0x00, 0xff,
        0xff, 0xff, 0x00, 0x0a, 0x80, 0x80, 0x80, 0x0a, 0x00, 0x02, 0x00,
        0xff, 0xff, 0xff, 0x00,
    ];
    let frame = lsp_frame(&[&TLV_HOSTNAME, &tlv128, &TLV130_SINGLE]);
    test_inspect(
        &frame,
        Outcome::Drop(DropReason::Ipv4InternalReachMultiple { tlv_len: 24 }),
        2,
    );
}

#[test]
fn test_short_circuit() {
    // Nothing after the dropping TLV is looked at.
    let mut frame = lsp_frame(&[&TLV128_SINGLE, &TLV130_SINGLE]);
    frame.extend_from_slice(&[0x89, 0xff]);
    test_inspect(&frame, Outcome::Drop(DropReason::Ipv4ExternalReach), 2);

    // Short internal reachability TLV.
    let tlv128: [u8; 12] = [
        0x80, 0x0a, 0x0a, 0x80, 0x80, 0x80, 0x0a, 0x00, 0x01, 0x00, 0xff, 0xff,
    ];
    let frame = lsp_frame(&[&tlv128, &TLV130_SINGLE]);
    test_inspect(&frame, Outcome::Drop(DropReason::Ipv4ExternalReach), 2);
}

#[test]
fn test_stray_byte() {
    let frame = lsp_frame(&[&[0x82]]);
    test_inspect(
        &frame,
        Outcome::Pass(PassReason::Decode(DecodeError::IncompleteHeader(
            Layer::TlvHeader,
        ))),
        0,
    );

    let frame = lsp_frame(&[&TLV_HOSTNAME, &[0x82]]);
    test_inspect(
        &frame,
        Outcome::Pass(PassReason::Decode(DecodeError::IncompleteHeader(
            Layer::TlvHeader,
        ))),
        1,
    );
}

#[test]
fn test_tlv_exceeds_frame() {
    let frame = lsp_frame(&[&[0x89, 0x0a, 0x68, 0x6f]]);
    test_inspect(
        &frame,
        Outcome::Pass(PassReason::Decode(DecodeError::IncompleteTlv {
            tlv_type: 137,
            tlv_len: 10,
        })),
        1,
    );
}

//
// Totality.
//

#[test]
fn test_tiny_frames() {
    for a in 0..=u8::MAX {
        assert_eq!(inspect(&[a]).tlvs, 0);
        for b in 0..=u8::MAX {
            assert_eq!(inspect(&[a, b]).tlvs, 0);
        }
    }
}

#[test]
fn test_random_frames() {
    let mut rng = StdRng::seed_from_u64(0x1505);
    for _ in 0..2000 {
        let len = rng.random_range(0..=300);
        let mut frame = vec![0u8; len];
        rng.fill(&mut frame[..]);
        let inspection = inspect(&frame);
        assert!(inspection.tlvs <= MAX_TLV_RECORDS);
    }
}

#[test]
fn test_random_tlv_areas() {
    let mut rng = StdRng::seed_from_u64(0x0fe);
    for _ in 0..5000 {
        let len = rng.random_range(0..=1500);
        let mut tlvs = vec![0u8; len];
        rng.fill(&mut tlvs[..]);
        let frame = lsp_frame(&[&tlvs]);
        assert_eq!(frame.len(), TLVS_OFFSET + len);

        let inspection = inspect(&frame);
        assert!(inspection.tlvs <= MAX_TLV_RECORDS);
        assert!(!matches!(
            inspection.outcome,
            Outcome::Pass(PassReason::Decode(DecodeError::OutOfBounds { .. }))
        ));
        if len == 0 {
            assert_eq!(inspection.outcome, END_OF_TLVS);
        }
        if let Outcome::Pass(PassReason::Decode(error)) = inspection.outcome {
            assert!(error.is_truncation());
        }
    }
}
