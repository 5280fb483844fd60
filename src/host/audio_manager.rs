use std::io::{BufReader, Cursor};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use dungeon_caster::core::player::MotionEvent;

fn load_bytes_any(paths: &[&str]) -> Option<Arc<Vec<u8>>> {
    paths.iter().find_map(|p| std::fs::read(p).ok()).map(Arc::new)
}

/// Footstep and bump sounds. Missing files or no output device just mean
/// silence.
pub struct AudioManager {
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    sfx_sink: Sink,
    foot_sink: Sink,
    step: Option<Arc<Vec<u8>>>,
    bump: Option<Arc<Vec<u8>>>,
    last_bump: Instant,
    bump_interval: Duration,
    bump_volume: f32,
}

impl AudioManager {
    pub fn new() -> Option<Self> {
        let (_stream, handle) = OutputStream::try_default().ok()?;
        let sfx_sink = Sink::try_new(&handle).ok()?;
        let foot_sink = Sink::try_new(&handle).ok()?;
        Some(Self {
            _stream,
            _handle: handle,
            sfx_sink,
            foot_sink,
            step: None,
            bump: None,
            last_bump: Instant::now(),
            bump_interval: Duration::from_millis(350),
            bump_volume: 0.6,
        })
    }

    pub fn load_sfx_auto(&mut self) {
        self.step = load_bytes_any(&[
            "assets/sfx_player_step.wav",
            "assets/sounds/step.wav",
            "assets/sounds/footstep.wav",
        ]);
        self.bump = load_bytes_any(&[
            "assets/sfx_bump.wav",
            "assets/sounds/bump.wav",
        ]);
        log::info!(
            "sfx loaded: step={} bump={}",
            self.step.is_some(),
            self.bump.is_some()
        );
    }

    pub fn on_motion(&mut self, event: MotionEvent) {
        match event {
            MotionEvent::Moved { .. } => self.play_on(&self.foot_sink, self.step.clone(), 1.0),
            MotionEvent::Blocked => {
                // a held key reports Blocked every frame
                if self.last_bump.elapsed() >= self.bump_interval {
                    self.last_bump = Instant::now();
                    self.play_on(&self.sfx_sink, self.bump.clone(), self.bump_volume);
                }
            }
            MotionEvent::Turned { .. } | MotionEvent::Arrived => {}
        }
    }

    fn play_on(&self, sink: &Sink, data: Option<Arc<Vec<u8>>>, vol: f32) {
        if let Some(d) = data {
            if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
                sink.append(dec.amplify(vol.clamp(0.0, 2.5)));
            }
        }
    }
}
