//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use tracing::{debug, debug_span, trace};

use crate::filter::Inspection;
use crate::packet::header::{EthHdr, GreHdr, Ipv4Hdr, IsisHdr, LspHdr};
use crate::packet::tlv::{DropReason, TlvHdr, TlvRecord};

// Filter debug messages.
#[derive(Debug)]
pub enum Debug<'a> {
    // Frame input
    FrameRx(usize),
    // Header chain
    EthHdrRx(&'a EthHdr),
    Ipv4HdrRx(&'a Ipv4Hdr),
    GreHdrRx(&'a GreHdr),
    IsisHdrRx(&'a IsisHdr),
    LspHdrRx(&'a LspHdr),
    // TLVs
    TlvRx(&'a TlvRecord<'a>),
    TlvUnchecked(&'a TlvHdr),
    TlvDrop(&'a TlvHdr, &'a DropReason),
    // Decision
    Verdict(&'a Inspection),
}

// ===== impl Debug =====

impl Debug<'_> {
    // Log debug message using the tracing API.
    pub(crate) fn log(&self) {
        match self {
            Debug::FrameRx(len) => {
                trace!(%len, "{}", self);
            }
            Debug::EthHdrRx(hdr) => {
                debug_span!("header").in_scope(|| {
                    trace!(ether_type = %hdr.ether_type, "{}", self);
                })
            }
            Debug::Ipv4HdrRx(hdr) => {
                debug_span!("header").in_scope(|| {
                    trace!(src = %hdr.src, dst = %hdr.dst, protocol = %hdr.protocol, ihl = %hdr.ihl, "{}", self);
                })
            }
            Debug::GreHdrRx(hdr) => {
                debug_span!("header").in_scope(|| {
                    trace!(proto = %hdr.proto, flags_ver = %hdr.flags_ver, "{}", self);
                })
            }
            Debug::IsisHdrRx(hdr) => {
                debug_span!("header").in_scope(|| {
                    trace!(nlpid = %hdr.idrp_discr, hdr_len = %hdr.hdr_len, pdu_type = ?hdr.pdu_type, "{}", self);
                })
            }
            Debug::LspHdrRx(hdr) => {
                debug_span!("header").in_scope(|| {
                    trace!(pdu_len = %hdr.pdu_len, rem_lifetime = %hdr.rem_lifetime, seqno = %hdr.seqno, flags = ?hdr.flags, "{}", self);
                })
            }
            Debug::TlvRx(record) => {
                debug_span!("tlv").in_scope(|| {
                    trace!(tlv_type = %record.hdr.tlv_type, tlv_len = %record.hdr.tlv_len, size = %record.hdr.record_size(), complete = %record.is_complete(), "{}", self);
                })
            }
            Debug::TlvUnchecked(hdr) => {
                debug_span!("tlv").in_scope(|| {
                    debug!(tlv_type = %hdr.tlv_type, tlv_len = %hdr.tlv_len, "{}", self);
                })
            }
            Debug::TlvDrop(hdr, reason) => {
                debug_span!("tlv").in_scope(|| {
                    debug!(tlv_type = %hdr.tlv_type, tlv_len = %hdr.tlv_len, %reason, "{}", self);
                })
            }
            Debug::Verdict(inspection) => {
                debug!(verdict = %inspection.verdict(), reason = %inspection.outcome, tlvs = %inspection.tlvs, "{}", self);
            }
        }
    }
}

impl std::fmt::Display for Debug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Debug::FrameRx(..) => {
                write!(f, "frame received")
            }
            Debug::EthHdrRx(..) => {
                write!(f, "Ethernet header")
            }
            Debug::Ipv4HdrRx(..) => {
                write!(f, "IPv4 header")
            }
            Debug::GreHdrRx(..) => {
                write!(f, "GRE header")
            }
            Debug::IsisHdrRx(..) => {
                write!(f, "IS-IS header")
            }
            Debug::LspHdrRx(..) => {
                write!(f, "LSP header")
            }
            Debug::TlvRx(..) => {
                write!(f, "TLV")
            }
            Debug::TlvUnchecked(..) => {
                write!(f, "first TLV entry incomplete, skipping")
            }
            Debug::TlvDrop(..) => {
                write!(f, "dropping frame")
            }
            Debug::Verdict(..) => {
                write!(f, "frame classified")
            }
        }
    }
}
