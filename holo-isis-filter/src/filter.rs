//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::debug::Debug;
use crate::packet::cursor::Cursor;
use crate::packet::error::{DecodeError, DecodeResult};
use crate::packet::header::{EthHdr, GreHdr, Ipv4Hdr, IsisHdr, LspHdr};
use crate::packet::tlv::{DropReason, ReachTlv, TlvAction, TlvRecord};

// Maximum number of TLV records inspected per LSP.
pub const MAX_TLV_RECORDS: usize = 50;

// Forwarding decision for a frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Drop,
}

// Reasons for forwarding a frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PassReason {
    // Not an IS-IS LSP over GRE over IPv4, or truncated.
    Decode(DecodeError),
    // All TLVs were inspected.
    EndOfTlvs,
    // The TLV record limit was reached.
    MaxTlvs,
}

// Classification outcome, along with its reason.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Pass(PassReason),
    Drop(DropReason),
}

// Result of inspecting a single frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq, new)]
#[derive(Deserialize, Serialize)]
pub struct Inspection {
    pub outcome: Outcome,
    // Number of TLV records classified.
    pub tlvs: usize,
}

// ===== impl Verdict =====

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Drop => write!(f, "DROP"),
        }
    }
}

// ===== impl PassReason =====

impl std::fmt::Display for PassReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PassReason::Decode(error) => error.fmt(f),
            PassReason::EndOfTlvs => write!(f, "end of TLVs"),
            PassReason::MaxTlvs => {
                write!(f, "TLV limit reached ({})", MAX_TLV_RECORDS)
            }
        }
    }
}

// ===== impl Outcome =====

impl Outcome {
    pub const fn verdict(&self) -> Verdict {
        match self {
            Outcome::Pass(..) => Verdict::Pass,
            Outcome::Drop(..) => Verdict::Drop,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Pass(reason) => reason.fmt(f),
            Outcome::Drop(reason) => reason.fmt(f),
        }
    }
}

// ===== impl Inspection =====

impl Inspection {
    pub const fn verdict(&self) -> Verdict {
        self.outcome.verdict()
    }
}

// ===== global functions =====

/// Decides whether a received Ethernet frame should be forwarded or dropped.
pub fn classify(frame: &[u8]) -> Verdict {
    inspect(frame).verdict()
}

/// Same as [`classify`], but also reports why the decision was taken.
///
/// Any frame that isn't a complete IS-IS LSP carried over GRE over IPv4 is
/// passed. A frame is dropped only when one of its first
/// [`MAX_TLV_RECORDS`] TLVs is an IP External Reachability TLV, or a
/// reachability TLV holding more than one network.
pub fn inspect(frame: &[u8]) -> Inspection {
    Debug::FrameRx(frame.len()).log();

    let mut cur = Cursor::new(frame);
    let inspection = match decode_headers(&mut cur) {
        Ok(()) => walk_tlvs(&mut cur),
        Err(error) => {
            Inspection::new(Outcome::Pass(PassReason::Decode(error)), 0)
        }
    };

    Debug::Verdict(&inspection).log();
    inspection
}

// ===== helper functions =====

// Decodes the header chain up to the start of the LSP TLV area.
fn decode_headers(cur: &mut Cursor<'_>) -> DecodeResult<()> {
    let eth = EthHdr::decode(cur)?;
    Debug::EthHdrRx(&eth).log();

    let ip = Ipv4Hdr::decode(cur)?;
    Debug::Ipv4HdrRx(&ip).log();

    let gre = GreHdr::decode(cur)?;
    Debug::GreHdrRx(&gre).log();

    let isis = IsisHdr::decode(cur)?;
    Debug::IsisHdrRx(&isis).log();

    let lsp = LspHdr::decode(cur)?;
    Debug::LspHdrRx(&lsp).log();

    Ok(())
}

// Inspects the LSP TLVs one by one, stopping at the first one requiring the
// frame to be dropped.
fn walk_tlvs(cur: &mut Cursor<'_>) -> Inspection {
    for tlv_idx in 0..MAX_TLV_RECORDS {
        // Parse TLV header.
        let record = match TlvRecord::peek(cur) {
            Ok(record) => record,
            Err(_) if cur.remaining() == 0 => {
                return Inspection::new(
                    Outcome::Pass(PassReason::EndOfTlvs),
                    tlv_idx,
                );
            }
            Err(error) => {
                return Inspection::new(
                    Outcome::Pass(PassReason::Decode(error)),
                    tlv_idx,
                );
            }
        };
        Debug::TlvRx(&record).log();
        let tlvs = tlv_idx + 1;

        // Classify TLV.
        match ReachTlv::from(record.hdr.tlv_type).classify(&record) {
            TlvAction::Continue => (),
            TlvAction::Unchecked => {
                Debug::TlvUnchecked(&record.hdr).log();
            }
            TlvAction::Drop(reason) => {
                Debug::TlvDrop(&record.hdr, &reason).log();
                return Inspection::new(Outcome::Drop(reason), tlvs);
            }
        }

        // Move on to the next TLV.
        if cur.advance(record.hdr.record_size()).is_err() {
            let error = DecodeError::IncompleteTlv {
                tlv_type: record.hdr.tlv_type,
                tlv_len: record.hdr.tlv_len,
            };
            return Inspection::new(
                Outcome::Pass(PassReason::Decode(error)),
                tlvs,
            );
        }
    }

    // The last inspected TLV may have been the final one.
    let reason = if cur.remaining() == 0 {
        PassReason::EndOfTlvs
    } else {
        PassReason::MaxTlvs
    };
    Inspection::new(Outcome::Pass(reason), MAX_TLV_RECORDS)
}
