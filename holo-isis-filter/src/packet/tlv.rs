//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

#![allow(clippy::len_without_is_empty)]

use bytes::Buf;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::packet::consts::{
    EXT_IPV4_CONTROL_PLEN_MASK, EXT_IPV4_CONTROL_SUBTLVS,
    EXT_IPV4_CONTROL_UPDOWN, Ipv6ReachFlags, TlvType,
};
use crate::packet::cursor::Cursor;
use crate::packet::error::{DecodeError, DecodeResult, Layer};

// TLV header size.
pub const TLV_HDR_SIZE: usize = 2;
// Size of a single IP Internal Reachability Information entry
// (metrics + IP address + subnet mask).
pub const IPV4_REACH_ENTRY_LEN: usize = 12;

// TLV header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct TlvHdr {
    pub tlv_type: u8,
    pub tlv_len: u8,
}

// TLV record along with the portion of its value present in the frame.
//
// The value slice never extends past the record, nor past the end of the
// frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TlvRecord<'a> {
    pub hdr: TlvHdr,
    pub value: &'a [u8],
}

// Reachability TLVs subject to inspection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum ReachTlv {
    Ipv4InternalReach,
    Ipv4ExternalReach,
    ExtIpv4Reach,
    Ipv6Reach,
    Other(u8),
}

// Leading fields of the first Extended IP Reachability entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct ExtIpv4ReachEntry {
    pub metric: u32,
    pub control: u8,
}

// Leading fields of the first IPv6 Reachability entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Ipv6ReachEntry {
    pub metric: u32,
    pub flags: Ipv6ReachFlags,
    pub plen: u8,
}

// Result of inspecting a single TLV record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TlvAction {
    // Move on to the next record.
    Continue,
    // The first entry isn't fully present; move on to the next record.
    Unchecked,
    // Discard the whole frame.
    Drop(DropReason),
}

// Reasons for discarding a frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DropReason {
    Ipv4ExternalReach,
    Ipv4InternalReachMultiple { tlv_len: u8 },
    ExtIpv4ReachMultiple { tlv_len: u8, entry_len: usize },
    Ipv6ReachMultiple { tlv_len: u8, entry_len: usize },
}

// ===== impl TlvHdr =====

impl TlvHdr {
    // Decodes the TLV header at the cursor position, without advancing.
    pub fn decode(cur: &Cursor<'_>) -> DecodeResult<Self> {
        let mut buf = cur
            .view(TLV_HDR_SIZE)
            .ok_or(DecodeError::IncompleteHeader(Layer::TlvHeader))?;
        let tlv_type = buf.get_u8();
        let tlv_len = buf.get_u8();
        Ok(TlvHdr { tlv_type, tlv_len })
    }

    // Returns the total wire size of the record.
    pub const fn record_size(&self) -> usize {
        TLV_HDR_SIZE + self.tlv_len as usize
    }
}

// ===== impl TlvRecord =====

impl<'a> TlvRecord<'a> {
    // Reads the TLV record at the cursor position, without advancing.
    //
    // Succeeds as long as the TLV header is present. The value may be
    // shorter than the declared length if the frame is truncated.
    pub fn peek(cur: &Cursor<'a>) -> DecodeResult<Self> {
        let hdr = TlvHdr::decode(cur)?;
        let value_len = (hdr.tlv_len as usize)
            .min(cur.remaining().saturating_sub(TLV_HDR_SIZE));
        let value = cur
            .view(TLV_HDR_SIZE + value_len)
            .and_then(|buf| buf.get(TLV_HDR_SIZE..))
            .ok_or(DecodeError::IncompleteHeader(Layer::TlvHeader))?;
        Ok(TlvRecord { hdr, value })
    }

    // Returns whether the whole declared value is present in the frame.
    pub fn is_complete(&self) -> bool {
        self.value.len() == self.hdr.tlv_len as usize
    }
}

// ===== impl ReachTlv =====

impl ReachTlv {
    // Inspects a TLV record of this type.
    pub fn classify(&self, record: &TlvRecord<'_>) -> TlvAction {
        let tlv_len = record.hdr.tlv_len;
        match self {
            ReachTlv::Ipv4InternalReach => ipv4_internal_reach(tlv_len),
            ReachTlv::Ipv4ExternalReach => ipv4_external_reach(),
            ReachTlv::ExtIpv4Reach => ext_ipv4_reach(tlv_len, record.value),
            ReachTlv::Ipv6Reach => ipv6_reach(tlv_len, record.value),
            ReachTlv::Other(_) => TlvAction::Continue,
        }
    }
}

impl From<u8> for ReachTlv {
    fn from(tlv_type: u8) -> ReachTlv {
        match TlvType::from_u8(tlv_type) {
            Some(TlvType::Ipv4InternalReach) => ReachTlv::Ipv4InternalReach,
            Some(TlvType::Ipv4ExternalReach) => ReachTlv::Ipv4ExternalReach,
            Some(TlvType::ExtIpv4Reach) => ReachTlv::ExtIpv4Reach,
            Some(TlvType::Ipv6Reach) => ReachTlv::Ipv6Reach,
            _ => ReachTlv::Other(tlv_type),
        }
    }
}

// ===== impl ExtIpv4ReachEntry =====

impl ExtIpv4ReachEntry {
    // Metric (4 octets) + control octet.
    pub const HDR_LEN: usize = 5;

    pub fn decode(value: &[u8]) -> Option<Self> {
        let mut buf = value.get(..Self::HDR_LEN)?;
        let metric = buf.get_u32();
        let control = buf.get_u8();
        Some(ExtIpv4ReachEntry { metric, control })
    }

    pub const fn up_down(&self) -> bool {
        self.control & EXT_IPV4_CONTROL_UPDOWN != 0
    }

    pub const fn subtlvs(&self) -> bool {
        self.control & EXT_IPV4_CONTROL_SUBTLVS != 0
    }

    pub const fn plen(&self) -> u8 {
        self.control & EXT_IPV4_CONTROL_PLEN_MASK
    }

    // Length of the entry, excluding any Sub-TLVs.
    pub const fn len(&self) -> usize {
        Self::HDR_LEN + prefix_wire_len(self.plen())
    }
}

// ===== impl Ipv6ReachEntry =====

impl Ipv6ReachEntry {
    // Metric (4 octets) + flags octet + prefix length octet.
    pub const HDR_LEN: usize = 6;

    pub fn decode(value: &[u8]) -> Option<Self> {
        let mut buf = value.get(..Self::HDR_LEN)?;
        let metric = buf.get_u32();
        let flags = Ipv6ReachFlags::from_bits_truncate(buf.get_u8());
        let plen = buf.get_u8();
        Some(Ipv6ReachEntry {
            metric,
            flags,
            plen,
        })
    }

    // Length of the entry, excluding any Sub-TLVs.
    pub const fn len(&self) -> usize {
        Self::HDR_LEN + prefix_wire_len(self.plen)
    }
}

// ===== impl DropReason =====

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropReason::Ipv4ExternalReach => {
                write!(f, "TLV 130 external IP reachability detected")
            }
            DropReason::Ipv4InternalReachMultiple { tlv_len } => {
                write!(
                    f,
                    "TLV 128 has more than one network (length: {})",
                    tlv_len
                )
            }
            DropReason::ExtIpv4ReachMultiple { tlv_len, entry_len } => {
                write!(
                    f,
                    "TLV 135 has more than one network (length: {}, first entry: {})",
                    tlv_len, entry_len
                )
            }
            DropReason::Ipv6ReachMultiple { tlv_len, entry_len } => {
                write!(
                    f,
                    "TLV 236 has more than one network (length: {}, first entry: {})",
                    tlv_len, entry_len
                )
            }
        }
    }
}

// ===== helper functions =====

// Calculates the number of bytes required to encode a prefix.
pub const fn prefix_wire_len(len: u8) -> usize {
    (len as usize).div_ceil(8)
}

// ===== global functions =====

// IP External Reachability Information is never accepted.
pub fn ipv4_external_reach() -> TlvAction {
    TlvAction::Drop(DropReason::Ipv4ExternalReach)
}

// IP Internal Reachability Information may hold a single entry.
pub fn ipv4_internal_reach(tlv_len: u8) -> TlvAction {
    if tlv_len as usize > IPV4_REACH_ENTRY_LEN {
        return TlvAction::Drop(DropReason::Ipv4InternalReachMultiple {
            tlv_len,
        });
    }
    TlvAction::Continue
}

// Extended IP Reachability may hold a single entry, whose length depends on
// its prefix length.
pub fn ext_ipv4_reach(tlv_len: u8, value: &[u8]) -> TlvAction {
    let Some(entry) = ExtIpv4ReachEntry::decode(value) else {
        return TlvAction::Unchecked;
    };
    let entry_len = entry.len();
    if tlv_len as usize > entry_len {
        return TlvAction::Drop(DropReason::ExtIpv4ReachMultiple {
            tlv_len,
            entry_len,
        });
    }
    TlvAction::Continue
}

// IPv6 Reachability may hold a single entry, whose length depends on its
// prefix length.
pub fn ipv6_reach(tlv_len: u8, value: &[u8]) -> TlvAction {
    let Some(entry) = Ipv6ReachEntry::decode(value) else {
        return TlvAction::Unchecked;
    };
    let entry_len = entry.len();
    if tlv_len as usize > entry_len {
        return TlvAction::Drop(DropReason::Ipv6ReachMultiple {
            tlv_len,
            entry_len,
        });
    }
    TlvAction::Continue
}
