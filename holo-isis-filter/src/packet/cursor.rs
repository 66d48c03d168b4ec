//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use crate::packet::error::{DecodeError, DecodeResult};

/// Read-only, forward-only view over a received frame.
///
/// Every access is bounds-checked against the end of the frame: a read that
/// would go past the last byte yields `None` or an error, never a partial
/// read. The offset never exceeds the frame length.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

// ===== impl Cursor =====

impl<'a> Cursor<'a> {
    pub const fn new(buf: &'a [u8]) -> Self {
        Cursor { buf, offset: 0 }
    }

    /// Returns the position of the next unread byte.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the number of unread bytes.
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// Returns whether at least `n` unread bytes remain.
    pub const fn require(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    /// Moves the offset forward by `n` bytes.
    ///
    /// Fails without moving when fewer than `n` bytes remain.
    pub fn advance(&mut self, n: usize) -> DecodeResult<()> {
        if !self.require(n) {
            return Err(DecodeError::OutOfBounds {
                offset: self.offset,
                wanted: n,
                remaining: self.remaining(),
            });
        }
        self.offset += n;
        Ok(())
    }

    /// Returns the next `n` unread bytes without advancing.
    pub fn view(&self, n: usize) -> Option<&'a [u8]> {
        let end = self.offset.checked_add(n)?;
        self.buf.get(self.offset..end)
    }
}
