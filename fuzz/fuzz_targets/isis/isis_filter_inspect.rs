//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
#![no_main]

use holo_isis_filter::filter::MAX_TLV_RECORDS;
use holo_isis_filter::inspect;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let inspection = inspect(data);
    assert!(inspection.tlvs <= MAX_TLV_RECORDS);
});
