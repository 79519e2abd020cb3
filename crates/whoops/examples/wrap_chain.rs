// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates wrapping an error at each layer and printing it at every verbosity.

#![expect(clippy::unwrap_used, reason = "example code")]

use whoops::{BaseError, ErrorExt, ResultExt, Verbosity, WithStack};

fn read_sector(sector: u32) -> Result<Vec<u8>, BaseError> {
    Err(whoops::errorf!("sector {sector} is unreadable"))
}

fn load_settings() -> Result<Vec<u8>, WithStack> {
    read_sector(7).wrap("failed to load settings")
}

fn main() {
    let err = load_settings().unwrap_err();

    println!("Plain:    {}", err.render(Verbosity::Plain));
    println!("Quoted:   {}", err.render(Verbosity::Quoted));
    println!("Detailed: {}", err.render(Verbosity::Detailed));
}
