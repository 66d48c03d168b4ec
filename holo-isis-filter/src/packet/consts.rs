//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use bitflags::bitflags;
use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

// Ethertypes.
//
// IANA registry:
// https://www.iana.org/assignments/ieee-802-numbers/ieee-802-numbers.xhtml
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[derive(FromPrimitive)]
#[derive(Deserialize, Serialize)]
pub enum EtherType {
    Ipv4 = 0x0800,
    Arp = 0x0806,
    Vlan = 0x8100,
    Ipv6 = 0x86DD,
}

// IP protocol numbers.
//
// IANA registry:
// https://www.iana.org/assignments/protocol-numbers/protocol-numbers.xhtml
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[derive(FromPrimitive)]
#[derive(Deserialize, Serialize)]
pub enum IpProto {
    Icmp = 1,
    Tcp = 6,
    Udp = 17,
    Gre = 47,
}

// GRE encapsulated protocol types.
//
// The OSI network layer code is used when IS-IS PDUs are carried directly
// over GRE, without an LLC header.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[derive(FromPrimitive)]
#[derive(Deserialize, Serialize)]
pub enum GreProto {
    Osi = 0x00FE,
    Ipv4 = 0x0800,
    Ipv6 = 0x86DD,
}

// IS-IS PDU types.
//
// IANA registry:
// https://www.iana.org/assignments/isis-pdu/isis-pdu.xhtml#pdu
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[derive(FromPrimitive)]
#[derive(Deserialize, Serialize)]
pub enum PduType {
    HelloLanL1 = 15,
    HelloLanL2 = 16,
    HelloP2P = 17,
    LspL1 = 18,
    LspL2 = 20,
    CsnpL1 = 24,
    CsnpL2 = 25,
    PsnpL1 = 26,
    PsnpL2 = 27,
}

// IS-IS top-level TLV types.
//
// IANA registry:
// https://www.iana.org/assignments/isis-tlv-codepoints/isis-tlv-codepoints.xhtml#tlv-codepoints
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[derive(FromPrimitive)]
#[derive(Deserialize, Serialize)]
pub enum TlvType {
    AreaAddresses = 1,
    IsReach = 2,
    Padding = 8,
    Authentication = 10,
    ExtIsReach = 22,
    Ipv4InternalReach = 128,
    ProtocolsSupported = 129,
    Ipv4ExternalReach = 130,
    Ipv4Addresses = 132,
    Ipv4RouterId = 134,
    ExtIpv4Reach = 135,
    DynamicHostname = 137,
    Ipv6Addresses = 232,
    Ipv6Reach = 236,
    RouterCapability = 242,
}

// Mask of the PDU type field (bits 0-4 of the fifth header octet).
pub const PDU_TYPE_MASK: u8 = 0x1F;

// Extended IPv4 reachability control octet.
//
//  0   1   2   3   4   5   6   7
// +---+---+---+---+---+---+---+---+
// |U/D| S |    Prefix Length      |
// +---+---+---+---+---+---+---+---+
pub const EXT_IPV4_CONTROL_UPDOWN: u8 = 0x80;
pub const EXT_IPV4_CONTROL_SUBTLVS: u8 = 0x40;
pub const EXT_IPV4_CONTROL_PLEN_MASK: u8 = 0x3F;

bitflags! {
    // LSP flags octet.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    #[derive(Deserialize, Serialize)]
    #[serde(transparent)]
    pub struct LspFlags: u8 {
        const P = 0x80;
        const ATT = 0x08;
        const OL = 0x04;
        const IS_TYPE2 = 0x02;
        const IS_TYPE1 = 0x01;
    }
}

bitflags! {
    // IPv6 reachability flags octet.
    //
    //  0   1   2   3   4   5   6   7
    // +---+---+---+---+---+---+---+---+
    // |U/D| X | S |     Reserved      |
    // +---+---+---+---+---+---+---+---+
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    #[derive(Deserialize, Serialize)]
    #[serde(transparent)]
    pub struct Ipv6ReachFlags: u8 {
        const UP_DOWN = 0x80;
        const EXTERNAL = 0x40;
        const SUBTLVS = 0x20;
    }
}
