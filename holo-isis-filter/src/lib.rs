//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Per-frame classifier for GRE-encapsulated IS-IS Link State PDUs.
//!
//! Each Ethernet frame is decoded through the Ethernet, IPv4, GRE, IS-IS
//! common and LSP headers, after which the TLV area is walked for at most
//! [`filter::MAX_TLV_RECORDS`] records. LSPs advertising external IPv4
//! reachability, or packing more than one network into a single
//! reachability TLV, are dropped. Everything else, including any frame that
//! fails to decode, is passed.
//!
//! Classification is stateless, never allocates and never panics, so it can
//! be invoked concurrently on any number of frames.

pub mod debug;
pub mod filter;
pub mod packet;

pub use filter::{Inspection, Outcome, Verdict, classify, inspect};
