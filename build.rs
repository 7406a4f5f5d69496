// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

// Exposes VERGEN_GIT_SHA and VERGEN_GIT_COMMIT_DATE for `rclint version`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .git_sha(false)
        .git_commit_date()
        .emit()?;
    Ok(())
}
