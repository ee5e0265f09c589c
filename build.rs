//! This build script copies the `memory.x` file from the crate root into a directory where
//! the linker can always find it at build time.

use chrono::{Local, Offset};
use std::{env, fs::File, io::Write, path::PathBuf};

fn main() {
    // Put memory layout in the output directory and ensure it's on the linker search path.
    let out = &PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    File::create(out.join("memory.x"))
        .and_then(|mut file| file.write_all(include_bytes!("memory.x")))
        .expect("failed to write memory.x");
    println!("cargo:rustc-link-search={}", out.display());

    // The watch has no RTC, so start the clock at the build time and offset of the build host
    let now = Local::now();
    File::create(out.join("utc.rs"))
        .and_then(|mut file| {
            writeln!(file, "pub const UTC_EPOCH: i64 = {};", now.timestamp())?;
            writeln!(
                file,
                "pub const UTC_OFFSET: i32 = {};",
                now.offset().fix().local_minus_utc()
            )
        })
        .expect("failed to write utc.rs");

    // Without `rerun-if-changed` every build refreshes the baked-in time.
}
