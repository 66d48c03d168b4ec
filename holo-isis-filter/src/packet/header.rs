//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::Ipv4Addr;

use bytes::Buf;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::packet::consts::{
    EtherType, GreProto, IpProto, LspFlags, PDU_TYPE_MASK, PduType,
};
use crate::packet::cursor::Cursor;
use crate::packet::error::{DecodeError, DecodeResult, Layer};

// Ethernet II header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct EthHdr {
    pub dst: [u8; 6],
    pub src: [u8; 6],
    pub ether_type: u16,
}

// IPv4 header (fixed part only).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Ipv4Hdr {
    pub ihl: u8,
    pub total_len: u16,
    pub ttl: u8,
    pub protocol: u8,
    pub src: Ipv4Addr,
    pub dst: Ipv4Addr,
}

// GRE header (fixed part only).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct GreHdr {
    pub flags_ver: u16,
    pub proto: u16,
}

// IS-IS common PDU header.
//
// +-------+-------+-------+-------+-------+-------+-------+-------+
// |         Intradomain Routeing Protocol Discriminator           |
// +-------+-------+-------+-------+-------+-------+-------+-------+
// |                       Length Indicator                        |
// +-------+-------+-------+-------+-------+-------+-------+-------+
// |                  Version/Protocol ID extension                |
// +-------+-------+-------+-------+-------+-------+-------+-------+
// |                           ID Length                           |
// +-------+-------+-------+-------+-------+-------+-------+-------+
// |   R   |   R   |   R   |              PDU Type                 |
// +-------+-------+-------+-------+-------+-------+-------+-------+
// |                           Version                             |
// +-------+-------+-------+-------+-------+-------+-------+-------+
// |                           Reserved                            |
// +-------+-------+-------+-------+-------+-------+-------+-------+
// |                    Maximum Area Addresses                     |
// +-------+-------+-------+-------+-------+-------+-------+-------+
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct IsisHdr {
    pub idrp_discr: u8,
    pub hdr_len: u8,
    pub version_proto_ext: u8,
    pub id_len: u8,
    pub pdu_type: PduType,
    pub version: u8,
    pub max_area_addrs: u8,
}

// LSP fixed header.
//
// None of these fields is validated. They are decoded for diagnostics and to
// position the cursor at the start of the TLV area.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct LspHdr {
    pub pdu_len: u16,
    pub rem_lifetime: u16,
    pub lsp_id: [u8; 8],
    pub seqno: u32,
    pub cksum: u16,
    pub flags: LspFlags,
}

// ===== impl EthHdr =====

impl EthHdr {
    pub const LEN: usize = 14;

    // Decodes the Ethernet header, accepting IPv4 payloads only.
    pub fn decode(cur: &mut Cursor<'_>) -> DecodeResult<Self> {
        let mut buf = cur
            .view(Self::LEN)
            .ok_or(DecodeError::IncompleteHeader(Layer::Ethernet))?;

        let mut dst = [0; 6];
        buf.copy_to_slice(&mut dst);
        let mut src = [0; 6];
        buf.copy_to_slice(&mut src);
        let ether_type = buf.get_u16();
        if EtherType::from_u16(ether_type) != Some(EtherType::Ipv4) {
            return Err(DecodeError::UnexpectedEtherType(ether_type));
        }

        cur.advance(Self::LEN)?;
        Ok(EthHdr {
            dst,
            src,
            ether_type,
        })
    }
}

// ===== impl Ipv4Hdr =====

impl Ipv4Hdr {
    // Options are not accounted for.
    pub const LEN: usize = 20;

    // Decodes the IPv4 header, accepting GRE payloads only.
    pub fn decode(cur: &mut Cursor<'_>) -> DecodeResult<Self> {
        let mut buf = cur
            .view(Self::LEN)
            .ok_or(DecodeError::IncompleteHeader(Layer::Ipv4))?;

        let ihl = buf.get_u8() & 0x0F;
        let _tos = buf.get_u8();
        let total_len = buf.get_u16();
        let _id = buf.get_u16();
        let _frag = buf.get_u16();
        let ttl = buf.get_u8();
        let protocol = buf.get_u8();
        if IpProto::from_u8(protocol) != Some(IpProto::Gre) {
            return Err(DecodeError::UnexpectedIpProto(protocol));
        }
        let _cksum = buf.get_u16();
        let src = Ipv4Addr::from(buf.get_u32());
        let dst = Ipv4Addr::from(buf.get_u32());

        cur.advance(Self::LEN)?;
        Ok(Ipv4Hdr {
            ihl,
            total_len,
            ttl,
            protocol,
            src,
            dst,
        })
    }
}

// ===== impl GreHdr =====

impl GreHdr {
    // Optional checksum, key and sequence fields are not accounted for.
    pub const LEN: usize = 4;

    // Decodes the GRE header, accepting OSI payloads only.
    pub fn decode(cur: &mut Cursor<'_>) -> DecodeResult<Self> {
        let mut buf = cur
            .view(Self::LEN)
            .ok_or(DecodeError::IncompleteHeader(Layer::Gre))?;

        let flags_ver = buf.get_u16();
        let proto = buf.get_u16();
        if GreProto::from_u16(proto) != Some(GreProto::Osi) {
            return Err(DecodeError::UnexpectedGreProto(proto));
        }

        cur.advance(Self::LEN)?;
        Ok(GreHdr { flags_ver, proto })
    }
}

// ===== impl IsisHdr =====

impl IsisHdr {
    pub const LEN: usize = 8;

    // Decodes the IS-IS common header, accepting L1 and L2 LSPs only.
    pub fn decode(cur: &mut Cursor<'_>) -> DecodeResult<Self> {
        let mut buf = cur
            .view(Self::LEN)
            .ok_or(DecodeError::IncompleteHeader(Layer::IsisCommon))?;

        let idrp_discr = buf.get_u8();
        let hdr_len = buf.get_u8();
        let version_proto_ext = buf.get_u8();
        let id_len = buf.get_u8();
        let pdu_type = buf.get_u8() & PDU_TYPE_MASK;
        let pdu_type = match PduType::from_u8(pdu_type) {
            Some(pdu_type @ (PduType::LspL1 | PduType::LspL2)) => pdu_type,
            _ => return Err(DecodeError::UnexpectedPduType(pdu_type)),
        };
        let version = buf.get_u8();
        let _reserved = buf.get_u8();
        let max_area_addrs = buf.get_u8();

        cur.advance(Self::LEN)?;
        Ok(IsisHdr {
            idrp_discr,
            hdr_len,
            version_proto_ext,
            id_len,
            pdu_type,
            version,
            max_area_addrs,
        })
    }
}

// ===== impl LspHdr =====

impl LspHdr {
    pub const LEN: usize = 19;

    pub fn decode(cur: &mut Cursor<'_>) -> DecodeResult<Self> {
        let mut buf = cur
            .view(Self::LEN)
            .ok_or(DecodeError::IncompleteHeader(Layer::Lsp))?;

        let pdu_len = buf.get_u16();
        let rem_lifetime = buf.get_u16();
        let mut lsp_id = [0; 8];
        buf.copy_to_slice(&mut lsp_id);
        let seqno = buf.get_u32();
        let cksum = buf.get_u16();
        let flags = LspFlags::from_bits_truncate(buf.get_u8());

        cur.advance(Self::LEN)?;
        Ok(LspHdr {
            pdu_len,
            rem_lifetime,
            lsp_id,
            seqno,
            cksum,
            flags,
        })
    }
}
