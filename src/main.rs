//! res-packer: pack the files listed in a resource manifest into a 7z archive
//!
//! Drop a manifest onto the executable (or pass it as the only argument) to
//! produce `Archive.7z` in the working directory.

use anyhow::Result;

fn main() -> Result<()> {
    res_packer::cli::run()
}
