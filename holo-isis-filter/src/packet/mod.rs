//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

pub mod consts;
pub mod cursor;
pub mod error;
pub mod header;
pub mod tlv;

pub use cursor::Cursor;
pub use error::{DecodeError, DecodeResult, Layer};
