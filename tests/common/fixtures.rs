//! Reusable asset layouts.

use super::TestEnv;

/// Placeholder image bytes; the loader never decodes images
pub const IMAGE: &[u8] = b"\x89PNG fake";

/// Two grouped projects and two flat ones:
///
/// ```text
/// orbit/        b.jpg a.jpg orbit.txt
/// no sense of time/  cover.png
/// noel-shots.png + noel-shots.txt
/// field_notes.jpg
/// ```
pub fn gallery() -> TestEnv {
    let env = TestEnv::new();
    env.write_asset("orbit/b.jpg", IMAGE);
    env.write_asset("orbit/a.jpg", IMAGE);
    env.write_asset("orbit/orbit.txt", "3D Visualization\nA spinning model.\n");
    env.write_asset("no sense of time/cover.png", IMAGE);
    env.write_asset("noel-shots.png", IMAGE);
    env.write_asset("noel-shots.txt", "  Photography  \n\nWinter series\n");
    env.write_asset("field_notes.jpg", IMAGE);
    env
}
