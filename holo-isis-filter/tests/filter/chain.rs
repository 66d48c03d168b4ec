//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use holo_isis_filter::filter::{Outcome, PassReason};
use holo_isis_filter::packet::error::{DecodeError, Layer};
use holo_isis_filter::packet::tlv::DropReason;

use super::{
    END_OF_TLVS, ETHER_TYPE_OFFSET, GRE_PROTO_OFFSET, IP_PROTO_OFFSET,
    PDU_TYPE_OFFSET, TLV128_SINGLE, TLV130_SINGLE, TLV135_SINGLE,
    TLV236_SINGLE, TLV_HOSTNAME, TLV_PROTOCOLS_SUPPORTED, TLVS_OFFSET,
    lsp_frame, lsp_frame_with, test_drop, test_inspect, test_pass,
};

fn decode_error(error: DecodeError) -> Outcome {
    Outcome::Pass(PassReason::Decode(error))
}

// Layer whose header is cut short by a frame of the given length.
fn truncated_layer(len: usize) -> Layer {
    match len {
        0..14 => Layer::Ethernet,
        14..34 => Layer::Ipv4,
        34..38 => Layer::Gre,
        38..46 => Layer::IsisCommon,
        _ => Layer::Lsp,
    }
}

#[test]
fn test_empty_frame() {
    test_inspect(
        &[],
        decode_error(DecodeError::IncompleteHeader(Layer::Ethernet)),
        0,
    );
}

#[test]
fn test_valid_chain_without_tlvs() {
    let frame = lsp_frame(&[]);
    assert_eq!(frame.len(), TLVS_OFFSET);
    test_inspect(&frame, END_OF_TLVS, 0);
}

#[test]
fn test_valid_chain_single_network_tlvs() {
    let frame = lsp_frame(&[
        &TLV_PROTOCOLS_SUPPORTED,
        &TLV_HOSTNAME,
        &TLV128_SINGLE,
        &TLV135_SINGLE,
        &TLV236_SINGLE,
    ]);
    test_inspect(&frame, END_OF_TLVS, 5);
}

#[test]
fn test_truncated_headers() {
    let frame = lsp_frame(&[&TLV130_SINGLE]);
    for len in 0..TLVS_OFFSET {
        let layer = truncated_layer(len);
        test_inspect(
            &frame[..len],
            decode_error(DecodeError::IncompleteHeader(layer)),
            0,
        );
    }
}

#[test]
fn test_truncated_single_network_lsp() {
    // Every prefix of an LSP that would be passed is passed as well.
    let frame = lsp_frame(&[
        &TLV_PROTOCOLS_SUPPORTED,
        &TLV128_SINGLE,
        &TLV135_SINGLE,
        &TLV_HOSTNAME,
        &TLV236_SINGLE,
    ]);
    for len in 0..=frame.len() {
        test_pass(&frame[..len]);
    }
}

#[test]
fn test_truncated_before_drop() {
    // Prefixes that cut the LSP before the external reachability TLV header
    // are passed, the others are dropped.
    let frame = lsp_frame(&[&TLV128_SINGLE, &TLV130_SINGLE]);
    let tlv130_offset = TLVS_OFFSET + TLV128_SINGLE.len();
    for len in 0..tlv130_offset + 2 {
        test_pass(&frame[..len]);
    }
    for len in tlv130_offset + 2..=frame.len() {
        test_inspect(
            &frame[..len],
            Outcome::Drop(DropReason::Ipv4ExternalReach),
            2,
        );
    }
}

#[test]
fn test_non_ipv4_ethertype() {
    for ether_type in [0x86dd_u16, 0x0806, 0x8100, 0x0000, 0x0801] {
        let mut frame = lsp_frame(&[&TLV130_SINGLE]);
        frame[ETHER_TYPE_OFFSET..ETHER_TYPE_OFFSET + 2]
            .copy_from_slice(&ether_type.to_be_bytes());
        test_inspect(
            &frame,
            decode_error(DecodeError::UnexpectedEtherType(ether_type)),
            0,
        );
    }
}

#[test]
fn test_non_gre_ip_protocol() {
    for proto in [1, 6, 17, 41, 46, 48, 255] {
        let frame = lsp_frame_with(IP_PROTO_OFFSET, proto, &[&TLV130_SINGLE]);
        test_inspect(
            &frame,
            decode_error(DecodeError::UnexpectedIpProto(proto)),
            0,
        );
    }
}

#[test]
fn test_non_osi_gre_protocol() {
    for proto in [0x0800_u16, 0x86dd, 0x6558, 0x00ff, 0xfe00] {
        let mut frame = lsp_frame(&[&TLV130_SINGLE]);
        frame[GRE_PROTO_OFFSET..GRE_PROTO_OFFSET + 2]
            .copy_from_slice(&proto.to_be_bytes());
        test_inspect(
            &frame,
            decode_error(DecodeError::UnexpectedGreProto(proto)),
            0,
        );
    }
}

#[test]
fn test_non_lsp_pdu_type() {
    // Hellos, CSNPs, PSNPs and unassigned codes.
    for pdu_type in [0x0f, 0x10, 0x11, 0x13, 0x18, 0x19, 0x1a, 0x1b, 0x00] {
        let frame =
            lsp_frame_with(PDU_TYPE_OFFSET, pdu_type, &[&TLV130_SINGLE]);
        test_inspect(
            &frame,
            decode_error(DecodeError::UnexpectedPduType(pdu_type)),
            0,
        );
    }
}

#[test]
fn test_l2_lsp() {
    let frame = lsp_frame_with(PDU_TYPE_OFFSET, 0x14, &[&TLV130_SINGLE]);
    test_inspect(&frame, Outcome::Drop(DropReason::Ipv4ExternalReach), 1);
}

#[test]
fn test_pdu_type_reserved_bits() {
    // Only the five low-order bits carry the PDU type.
    let frame = lsp_frame_with(PDU_TYPE_OFFSET, 0xf2, &[&TLV130_SINGLE]);
    test_drop(&frame);
    let frame = lsp_frame_with(PDU_TYPE_OFFSET, 0xf4, &[&TLV130_SINGLE]);
    test_drop(&frame);
    let frame = lsp_frame_with(PDU_TYPE_OFFSET, 0xf1, &[&TLV130_SINGLE]);
    test_inspect(
        &frame,
        decode_error(DecodeError::UnexpectedPduType(0x11)),
        0,
    );
}

#[test]
fn test_lsp_header_not_validated() {
    // Garbage in the LSP header fields doesn't affect classification.
    let mut frame = lsp_frame(&[&TLV135_SINGLE]);
    frame[TLVS_OFFSET - 19..TLVS_OFFSET].fill(0xff);
    test_inspect(&frame, END_OF_TLVS, 1);
}
