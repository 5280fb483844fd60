//! raylib/rodio adapters used by the binary.
//!
//! - `process_events`: keyboard → `InputState`
//! - `surface`: `Surface` over a raylib draw handle
//! - `audio_manager`: step and bump sounds

pub mod audio_manager;
pub mod process_events;
pub mod surface;
