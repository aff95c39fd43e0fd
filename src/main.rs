// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::info;

use seqmut::errors::SeqMutError;

fn main() -> Result<(), SeqMutError> {
    env_logger::init();
    info!("Starting log");

    seqmut::run()
}
