//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde::{Deserialize, Serialize};

// Type aliases.
pub type DecodeResult<T> = Result<T, DecodeError>;

// Protocol layers traversed while decoding a frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layer {
    Ethernet,
    Ipv4,
    Gre,
    IsisCommon,
    Lsp,
    TlvHeader,
}

// Frame decoding errors.
//
// Decoding stops at the first error and the frame is passed unmodified.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum DecodeError {
    // Insufficient buffer
    IncompleteHeader(Layer),
    IncompleteTlv { tlv_type: u8, tlv_len: u8 },
    // Only returned by the cursor API. Frame inspection reports truncation
    // through the layer-aware variants above.
    OutOfBounds {
        offset: usize,
        wanted: usize,
        remaining: usize,
    },
    // Protocol mismatch
    UnexpectedEtherType(u16),
    UnexpectedIpProto(u8),
    UnexpectedGreProto(u16),
    UnexpectedPduType(u8),
}

// ===== impl Layer =====

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layer::Ethernet => write!(f, "Ethernet"),
            Layer::Ipv4 => write!(f, "IPv4"),
            Layer::Gre => write!(f, "GRE"),
            Layer::IsisCommon => write!(f, "IS-IS common"),
            Layer::Lsp => write!(f, "LSP"),
            Layer::TlvHeader => write!(f, "TLV"),
        }
    }
}

// ===== impl DecodeError =====

impl DecodeError {
    // Returns whether the error was caused by a truncated frame, as opposed
    // to a frame that belongs to some other protocol.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            DecodeError::IncompleteHeader(..)
                | DecodeError::IncompleteTlv { .. }
                | DecodeError::OutOfBounds { .. }
        )
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::IncompleteHeader(layer) => {
                write!(f, "incomplete {} header", layer)
            }
            DecodeError::IncompleteTlv { tlv_type, tlv_len } => {
                write!(
                    f,
                    "incomplete TLV (type: {}, length: {})",
                    tlv_type, tlv_len
                )
            }
            DecodeError::OutOfBounds {
                offset,
                wanted,
                remaining,
            } => {
                write!(
                    f,
                    "read past end of frame (offset: {}, wanted: {}, remaining: {})",
                    offset, wanted, remaining
                )
            }
            DecodeError::UnexpectedEtherType(ether_type) => {
                write!(f, "unexpected ethertype: {:#06x}", ether_type)
            }
            DecodeError::UnexpectedIpProto(proto) => {
                write!(f, "unexpected IP protocol: {}", proto)
            }
            DecodeError::UnexpectedGreProto(proto) => {
                write!(f, "unexpected GRE protocol type: {:#06x}", proto)
            }
            DecodeError::UnexpectedPduType(pdu_type) => {
                write!(f, "unexpected PDU type: {:#04x}", pdu_type)
            }
        }
    }
}

impl std::error::Error for DecodeError {}
